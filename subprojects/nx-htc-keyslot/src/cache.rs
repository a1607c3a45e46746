use alloc::vec::Vec;

use crate::{KeySlotError, Result};

/// Opaque identity of the caller that owns a virtual keyslot.
///
/// The original source stores the owning allocator's `this` pointer; any value
/// that's stable for the allocator's lifetime and distinct across allocators
/// works equally well here. Callers typically use the address of their own
/// allocator struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AllocatorId(pub usize);

/// One physical keyslot's tracking record.
#[derive(Debug)]
pub struct KeySlotCacheEntry {
    slot_index: i32,
    virtual_slot: i32,
    owner: Option<AllocatorId>,
}

impl KeySlotCacheEntry {
    const UNBOUND: i32 = -1;

    fn new(slot_index: i32) -> Self {
        Self {
            slot_index,
            virtual_slot: Self::UNBOUND,
            owner: None,
        }
    }

    fn contains(&self, virtual_slot: i32) -> bool {
        self.virtual_slot == virtual_slot
    }

    /// The physical keyslot index this entry tracks.
    pub fn physical_slot(&self) -> i32 {
        self.slot_index
    }

    /// The virtual keyslot currently bound to this entry, if any.
    pub fn virtual_slot(&self) -> Option<i32> {
        (self.virtual_slot != Self::UNBOUND).then_some(self.virtual_slot)
    }
}

/// MRU cache mapping virtual keyslots onto a fixed pool of physical keyslots.
///
/// `order` holds physical-slot indices with the front being most-recently-used
/// and the back being the next eviction candidate, mirroring the intrusive
/// list's `push_front`/`pop_back` traffic in the original `KeySlotCache`.
pub struct KeySlotCache {
    entries: Vec<KeySlotCacheEntry>,
    order: Vec<usize>,
}

impl KeySlotCache {
    /// Builds a cache over `physical_count` physical keyslots, all initially
    /// unbound, ordered LRU-to-MRU at construction (slot 0 is the first
    /// eviction candidate).
    pub fn new(physical_count: usize) -> Self {
        let entries = (0..physical_count)
            .map(|i| KeySlotCacheEntry::new(i as i32))
            .collect();
        let order = (0..physical_count).collect();
        Self { entries, order }
    }

    fn position_of(&self, physical: usize) -> Option<usize> {
        self.order.iter().position(|&idx| idx == physical)
    }

    fn promote_to_mru(&mut self, physical: usize) {
        if let Some(pos) = self.position_of(physical) {
            let idx = self.order.remove(pos);
            self.order.insert(0, idx);
        }
    }

    fn demote_to_lru(&mut self, physical: usize) {
        if let Some(pos) = self.position_of(physical) {
            let idx = self.order.remove(pos);
            self.order.push(idx);
        }
    }

    /// Binds `virtual_slot` to a physical slot, evicting the current LRU
    /// entry. Always succeeds when the cache has nonzero capacity: eviction is
    /// unconditional, matching the source's `AllocateFromLru`.
    pub fn allocate(&mut self, virtual_slot: i32, owner: AllocatorId) -> Result<i32> {
        let lru_physical = *self.order.last().ok_or(KeySlotError::NoCapacity)?;
        let entry = &mut self.entries[lru_physical];
        log::trace!(
            "keyslot: evicting physical={} (was virtual={:?}) for virtual={virtual_slot}",
            entry.slot_index,
            entry.virtual_slot(),
        );
        entry.virtual_slot = virtual_slot;
        entry.owner = Some(owner);
        let physical = entry.slot_index;
        self.promote_to_mru(lru_physical);
        Ok(physical)
    }

    /// Looks up a cached virtual slot, promoting it to MRU on a hit.
    pub fn find(&mut self, virtual_slot: i32) -> Option<i32> {
        let physical = self
            .entries
            .iter()
            .position(|e| e.contains(virtual_slot))?;
        self.promote_to_mru(physical);
        Some(self.entries[physical].slot_index)
    }

    /// Same as [`find`](Self::find) but also verifies `owner` matches the
    /// entry's recorded owner.
    pub fn find_owned(&mut self, virtual_slot: i32, owner: AllocatorId) -> Result<i32> {
        let physical = self
            .entries
            .iter()
            .position(|e| e.contains(virtual_slot))
            .ok_or(KeySlotError::NotFound)?;
        if self.entries[physical].owner != Some(owner) {
            return Err(KeySlotError::NotOwned);
        }
        self.promote_to_mru(physical);
        Ok(self.entries[physical].slot_index)
    }

    /// Clears the virtual-slot binding and demotes the entry to the LRU end.
    /// The physical slot's cached key content is left untouched so a
    /// subsequent [`find_physical`](Self::find_physical) on the same physical
    /// number still hits.
    pub fn release(&mut self, virtual_slot: i32, owner: AllocatorId) -> Result<i32> {
        let physical = self
            .entries
            .iter()
            .position(|e| e.contains(virtual_slot))
            .ok_or(KeySlotError::NotFound)?;
        if self.entries[physical].owner != Some(owner) {
            return Err(KeySlotError::NotOwned);
        }
        self.entries[physical].virtual_slot = KeySlotCacheEntry::UNBOUND;
        self.entries[physical].owner = None;
        let slot = self.entries[physical].slot_index;
        self.demote_to_lru(physical);
        Ok(slot)
    }

    /// Releases every virtual slot owned by `owner`. Called when an allocator
    /// is torn down, mirroring "dropping the allocator releases all of its
    /// slots" from the spec.
    pub fn release_all(&mut self, owner: AllocatorId) {
        let physicals: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.owner == Some(owner))
            .map(|(i, _)| i)
            .collect();
        for physical in physicals {
            self.entries[physical].virtual_slot = KeySlotCacheEntry::UNBOUND;
            self.entries[physical].owner = None;
            self.demote_to_lru(physical);
        }
    }

    /// Looks up by physical slot number rather than virtual. Returns `true`
    /// if the entry's virtual slot already equals `physical_slot` (no reload
    /// needed), `false` if it had to be re-tagged.
    pub fn find_physical(&mut self, physical_slot: i32) -> bool {
        let physical = self
            .entries
            .iter()
            .position(|e| e.slot_index == physical_slot)
            .expect("physical_slot out of range");
        self.promote_to_mru(physical);
        let entry = &mut self.entries[physical];
        if entry.virtual_slot == physical_slot {
            true
        } else {
            entry.virtual_slot = physical_slot;
            false
        }
    }

    /// Number of physical slots backing this cache.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(id: usize) -> AllocatorId {
        AllocatorId(id)
    }

    #[test]
    fn allocate_then_find_returns_same_physical_slot() {
        let mut cache = KeySlotCache::new(4);
        let phys = cache.allocate(100, owner(1)).unwrap();
        assert_eq!(cache.find(100), Some(phys));
    }

    #[test]
    fn release_then_find_misses() {
        let mut cache = KeySlotCache::new(4);
        cache.allocate(100, owner(1)).unwrap();
        cache.release(100, owner(1)).unwrap();
        assert_eq!(cache.find(100), None);
    }

    #[test]
    fn release_wrong_owner_fails() {
        let mut cache = KeySlotCache::new(4);
        cache.allocate(100, owner(1)).unwrap();
        assert_eq!(cache.release(100, owner(2)), Err(KeySlotError::NotOwned));
    }

    #[test]
    fn eviction_scenario_v1_through_v5() {
        // Capacity 4; allocate/use v1..v5 in order, matching the keyslot
        // eviction scenario: using v1 again after v5 evicts v2 (the least
        // recently used of v2..v5 at that point).
        let mut cache = KeySlotCache::new(4);
        let o = owner(1);

        let p1 = cache.allocate(1, o).unwrap();
        let p2 = cache.allocate(2, o).unwrap();
        let p3 = cache.allocate(3, o).unwrap();
        let p4 = cache.allocate(4, o).unwrap();

        // All four physical slots are now distinct and bound.
        let mut phys = [p1, p2, p3, p4];
        phys.sort_unstable();
        assert_eq!(phys, [0, 1, 2, 3]);

        // v5 evicts the LRU, which is v1 (oldest allocation, never re-touched).
        let p5 = cache.allocate(5, o).unwrap();
        assert_eq!(p5, p1);
        assert_eq!(cache.find(1), None);

        // v1 now evicts the new LRU, which is v2 (v3/v4/v5 are all more
        // recently touched than v2 at this point).
        let p1_again = cache.allocate(1, o).unwrap();
        assert_eq!(p1_again, p2);
        assert_eq!(cache.find(2), None);
        assert_eq!(cache.find(3), Some(p3));
        assert_eq!(cache.find(4), Some(p4));
        assert_eq!(cache.find(5), Some(p5));
    }

    #[test]
    fn find_physical_detects_stale_tag() {
        let mut cache = KeySlotCache::new(2);
        // Fresh entries start with virtual_slot == -1 != slot_index, so the
        // first find_physical on either slot always reports "needs reload".
        assert!(!cache.find_physical(0));
        assert!(cache.find_physical(0));
    }

    #[test]
    fn release_all_frees_every_slot_for_owner() {
        let mut cache = KeySlotCache::new(4);
        let a = owner(1);
        let b = owner(2);
        cache.allocate(1, a).unwrap();
        cache.allocate(2, a).unwrap();
        cache.allocate(3, b).unwrap();

        cache.release_all(a);

        assert_eq!(cache.find(1), None);
        assert_eq!(cache.find(2), None);
        assert!(cache.find(3).is_some());
    }

    #[test]
    fn zero_capacity_cache_fails_to_allocate() {
        let mut cache = KeySlotCache::new(0);
        assert_eq!(cache.allocate(1, owner(1)), Err(KeySlotError::NoCapacity));
    }
}
