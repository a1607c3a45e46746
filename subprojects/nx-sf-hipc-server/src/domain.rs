//! Per-session domains: a small-integer namespace multiplexing many
//! [`ServiceObjectHolder`]s onto one IPC session.
//!
//! Mirrors `sf::cmif::ServerDomainManager`/`Entry` (see
//! `sf_cmif_domain_manager.hpp`): domain storage is an arena of slots, each
//! either free or bound to a holder, with a free list threading the unused
//! slots together. A slot's position in the arena (plus one, since `0` is
//! reserved as the invalid id) *is* its [`DomainObjectId`] -- there is no
//! separate allocation step distinguishing "reserve an id" from "bind an
//! object to it" the way the original's `EntryManager` does, since nothing
//! in this workspace drives that two-phase path.

use alloc::vec::Vec;

use nx_std_sync::Mutex;

use crate::error::{DispatchError, Result};
use crate::holder::ServiceObjectHolder;

/// A domain-local object id. `0` is reserved as invalid; a valid id's slot
/// index within the owning [`Domain`]'s arena is `id - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainObjectId(u32);

impl DomainObjectId {
    pub const INVALID: Self = Self(0);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    fn slot_index(self) -> Option<usize> {
        if self.0 == 0 { None } else { Some((self.0 - 1) as usize) }
    }
}

/// A pool-allocated binding from one [`DomainObjectId`] to a
/// [`ServiceObjectHolder`]. `None` when the slot is free.
struct DomainEntry {
    holder: Option<ServiceObjectHolder>,
}

struct DomainState {
    entries: Vec<DomainEntry>,
    /// Indices of free slots in `entries`, LIFO (most recently freed first --
    /// matches the original's singly-linked free list, no ordering
    /// guarantee is promised or needed beyond "reused only after release").
    free_list: Vec<usize>,
}

/// A per-session mapping from [`DomainObjectId`] to [`ServiceObjectHolder`],
/// created when a client sends the domain-control "convert to domain"
/// request. Register/get/unregister are all serialized through a single
/// mutex: the original relies on the fact that a domain is only ever driven
/// by the single thread servicing its session, but nothing here assumes
/// that, so the lock makes the serialization invariant explicit rather than
/// implicit.
pub struct Domain {
    state: Mutex<DomainState>,
}

impl Domain {
    pub fn new() -> Self {
        Self {
            state: Mutex::from(DomainState {
                entries: Vec::new(),
                free_list: Vec::new(),
            }),
        }
    }

    /// Binds `holder` to a fresh (or reused) [`DomainObjectId`] and returns
    /// it.
    pub fn register(&self, holder: ServiceObjectHolder) -> DomainObjectId {
        let mut state = self.state.lock();
        if let Some(index) = state.free_list.pop() {
            state.entries[index].holder = Some(holder);
            return DomainObjectId((index as u32) + 1);
        }
        let index = state.entries.len();
        state.entries.push(DomainEntry { holder: Some(holder) });
        DomainObjectId((index as u32) + 1)
    }

    /// Looks up the holder bound to `id`, if any. Returns a clone (cheap --
    /// [`ServiceObjectHolder`] is `Rc`-backed) so the caller can drop the
    /// domain lock before invoking a handler on it.
    pub fn get(&self, id: DomainObjectId) -> Result<ServiceObjectHolder> {
        let index = id.slot_index().ok_or(DispatchError::InvalidObjectId)?;
        let state = self.state.lock();
        state
            .entries
            .get(index)
            .and_then(|e| e.holder.clone())
            .ok_or(DispatchError::InvalidObjectId)
    }

    /// The domain-control "Close" operation: unregisters and drops the
    /// holder bound to `id`, freeing the slot for reuse.
    pub fn close(&self, id: DomainObjectId) -> Result<()> {
        let index = id.slot_index().ok_or(DispatchError::InvalidObjectId)?;
        let mut state = self.state.lock();
        let entry = state.entries.get_mut(index).ok_or(DispatchError::InvalidObjectId)?;
        if entry.holder.take().is_none() {
            return Err(DispatchError::InvalidObjectId);
        }
        state.free_list.push(index);
        Ok(())
    }

    /// Number of slots currently bound to a holder.
    pub fn len(&self) -> usize {
        let state = self.state.lock();
        state.entries.len() - state.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_table::{DispatchEntry, DispatchTable};
    use crate::holder::ServiceObject;
    use core::any::Any;

    static TABLE: DispatchTable = DispatchTable::new(&[DispatchEntry::always(0)]);

    struct Obj(u32);
    impl ServiceObject for Obj {
        fn dispatch_table(&self) -> &'static DispatchTable {
            &TABLE
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn register_assigns_sequential_ids_starting_at_one() {
        let domain = Domain::new();
        let a = domain.register(ServiceObjectHolder::new(Obj(1)));
        let b = domain.register(ServiceObjectHolder::new(Obj(2)));
        assert_eq!(a, DomainObjectId::from_raw(1));
        assert_eq!(b, DomainObjectId::from_raw(2));
    }

    #[test]
    fn get_returns_bound_holder() {
        let domain = Domain::new();
        let id = domain.register(ServiceObjectHolder::new(Obj(42)));
        let holder = domain.get(id).unwrap();
        assert_eq!(holder.downcast::<Obj>(&TABLE).unwrap().0, 42);
    }

    #[test]
    fn get_invalid_id_rejected() {
        let domain = Domain::new();
        assert_eq!(domain.get(DomainObjectId::INVALID), Err(DispatchError::InvalidObjectId));
        assert_eq!(domain.get(DomainObjectId::from_raw(99)), Err(DispatchError::InvalidObjectId));
    }

    #[test]
    fn close_frees_slot_for_reuse() {
        let domain = Domain::new();
        let a = domain.register(ServiceObjectHolder::new(Obj(1)));
        domain.close(a).unwrap();
        assert!(domain.get(a).is_err());
        let b = domain.register(ServiceObjectHolder::new(Obj(2)));
        // The freed slot is reused rather than growing the arena.
        assert_eq!(b, a);
    }

    #[test]
    fn close_already_closed_id_rejected() {
        let domain = Domain::new();
        let a = domain.register(ServiceObjectHolder::new(Obj(1)));
        domain.close(a).unwrap();
        assert_eq!(domain.close(a), Err(DispatchError::InvalidObjectId));
    }

    #[test]
    fn len_counts_only_bound_slots() {
        let domain = Domain::new();
        let a = domain.register(ServiceObjectHolder::new(Obj(1)));
        let _b = domain.register(ServiceObjectHolder::new(Obj(2)));
        assert_eq!(domain.len(), 2);
        domain.close(a).unwrap();
        assert_eq!(domain.len(), 1);
    }
}
