//! The transient per-request value a handler operates on.
//!
//! Mirrors `sf::ServerMessageProcessor` plus the handful of fields
//! `sf::ServiceDispatch` maintains for the duration of a single call: the
//! parsed in-header, a cursor into the raw in-data, a growable out-data
//! buffer, the pointer-buffer arena carved from the high end down, resolved
//! handles, and the in/out-object holders a domain or direct session attaches.

use alloc::vec::Vec;

use crate::error::{DispatchError, Result};
use crate::holder::ServiceObjectHolder;

/// The parsed CMIF in-header (magic already validated by the caller).
#[derive(Debug, Clone, Copy)]
pub struct InHeaderInfo {
    pub version: u32,
    pub cmd_id: u32,
    pub token: u32,
}

/// A resolved buffer argument: a validated `(ptr, len)` the handler may read
/// or write through, plus where it came from (only relevant for diagnostics).
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBuffer {
    pub ptr: *mut u8,
    pub len: usize,
}

/// Scratch region the server carves destination buffers for Out-pointer
/// arguments from, high end downward, 16-byte aligned -- one per session,
/// reused across every request on that session.
pub struct PointerBufferArena {
    base: *mut u8,
    capacity: usize,
    /// Offset of the current tail (shrinks towards zero as carvings happen).
    tail: usize,
}

impl PointerBufferArena {
    /// # Safety
    /// `base` must point to a writable region of at least `capacity` bytes,
    /// valid for the lifetime of every [`DispatchContext`] built over it.
    pub unsafe fn new(base: *mut u8, capacity: usize) -> Self {
        Self {
            base,
            capacity,
            tail: capacity,
        }
    }

    pub fn empty() -> Self {
        Self {
            base: core::ptr::null_mut(),
            capacity: 0,
            tail: 0,
        }
    }

    /// Carves `size` bytes off the high end, 16-byte aligned downward.
    /// Returns the carved region's base pointer.
    pub fn carve(&mut self, size: usize) -> Result<*mut u8> {
        let new_tail = self.tail.checked_sub(size).ok_or(DispatchError::PointerBufferOverflow)?;
        let aligned = new_tail & !0xF;
        // Aligning down must not cross into data already carved out below
        // the arena's logical start (head, conceptually 0; here "crossing
        // the tail" means going negative, which the aligned mask can't do
        // once checked_sub already succeeded, but a size of 0 with tail
        // already at 0 is still a valid empty carve).
        if aligned > self.tail {
            return Err(DispatchError::PointerBufferOverflow);
        }
        self.tail = aligned;
        // SAFETY: aligned is within [0, capacity] and base+capacity is valid
        // per the `new` contract.
        Ok(unsafe { self.base.add(aligned) })
    }

    pub fn remaining(&self) -> usize {
        self.tail
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The transient per-request context a dispatch handler operates on.
pub struct DispatchContext {
    pub in_header: InHeaderInfo,
    /// Raw in-data bytes following the in-header, 16-byte aligned start.
    pub in_data: Vec<u8>,
    /// Out-data the handler writes into; sized to the command's compile-time
    /// out_data_size before the handler runs.
    pub out_data: Vec<u8>,
    pub pointer_buffer: PointerBufferArena,
    pub in_buffers: Vec<ResolvedBuffer>,
    pub out_buffers: Vec<ResolvedBuffer>,
    /// In-objects resolved by the caller (direct session: the session's sole
    /// object; domain: looked up by DomainObjectId) before the handler runs.
    pub in_objects: Vec<ServiceObjectHolder>,
    /// Out-objects the handler produces, consumed by the caller after the
    /// handler returns (registered in the domain, or turned into a fresh
    /// session for the non-domain path).
    pub out_objects: Vec<ServiceObjectHolder>,
    pub copy_handles_in: Vec<u32>,
    pub move_handles_in: Vec<u32>,
    pub copy_handles_out: Vec<u32>,
    pub move_handles_out: Vec<u32>,
    /// Process id supplied by the transport, if the request enclosed one.
    pub client_process_id: Option<u64>,
    /// Set when the matched command requires a client process id and the
    /// request didn't carry one, or vice versa -- checked by the caller
    /// before invoking the handler, surfaced here so handlers needing the
    /// pid can `expect`-free unwrap it.
    pub error_result: Option<u32>,
}

impl DispatchContext {
    pub fn new(in_header: InHeaderInfo, in_data: Vec<u8>, out_data_size: usize, pointer_buffer: PointerBufferArena) -> Self {
        Self {
            in_header,
            in_data,
            out_data: alloc::vec![0u8; out_data_size],
            pointer_buffer,
            in_buffers: Vec::new(),
            out_buffers: Vec::new(),
            in_objects: Vec::new(),
            out_objects: Vec::new(),
            copy_handles_in: Vec::new(),
            move_handles_in: Vec::new(),
            copy_handles_out: Vec::new(),
            move_handles_out: Vec::new(),
            client_process_id: None,
            error_result: None,
        }
    }

    /// Reads a `T` out of `in_data` at `offset`. `bool` fields are expected
    /// to have already been normalized to a `u8` by the caller (low-bit
    /// convention, per the processing algorithm's special case).
    pub fn read_in_data<T: Copy>(&self, offset: usize) -> Result<T> {
        let size = core::mem::size_of::<T>();
        let bytes = self
            .in_data
            .get(offset..offset + size)
            .ok_or(DispatchError::InvalidRequest)?;
        // SAFETY: `bytes` has exactly `size_of::<T>()` bytes and T: Copy is
        // required to be read from an arbitrary (but in-bounds) byte slice;
        // callers only instantiate this with plain-old-data command fields.
        Ok(unsafe { core::ptr::read_unaligned(bytes.as_ptr() as *const T) })
    }

    /// Writes a `T` into `out_data` at `offset`.
    pub fn write_out_data<T: Copy>(&mut self, offset: usize, value: T) -> Result<()> {
        let size = core::mem::size_of::<T>();
        let slot = self
            .out_data
            .get_mut(offset..offset + size)
            .ok_or(DispatchError::InvalidRequest)?;
        // SAFETY: slot has exactly size_of::<T>() bytes.
        unsafe { core::ptr::write_unaligned(slot.as_mut_ptr() as *mut T, value) };
        Ok(())
    }

    #[cfg(test)]
    pub fn for_test() -> Self {
        Self::new(
            InHeaderInfo {
                version: 1,
                cmd_id: 0,
                token: 0,
            },
            Vec::new(),
            0,
            PointerBufferArena::empty(),
        )
    }

    #[cfg(test)]
    pub fn mark_tag(&mut self, tag: u32) {
        self.error_result = Some(tag);
    }

    #[cfg(test)]
    pub fn tag(&self) -> Option<u32> {
        self.error_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_round_trip() {
        let mut ctx = DispatchContext::new(
            InHeaderInfo {
                version: 1,
                cmd_id: 5,
                token: 0,
            },
            alloc::vec![0u8; 8],
            8,
            PointerBufferArena::empty(),
        );
        ctx.write_out_data::<u64>(0, 0xDEAD_BEEF_0000_0001).unwrap();
        let got: u64 = ctx.read_in_data(0).unwrap_or(0);
        assert_eq!(got, 0); // in_data untouched by write_out_data
        assert_eq!(ctx.out_data, 0xDEAD_BEEF_0000_0001u64.to_le_bytes());
    }

    #[test]
    fn read_out_of_bounds_rejected() {
        let ctx = DispatchContext::new(
            InHeaderInfo {
                version: 1,
                cmd_id: 0,
                token: 0,
            },
            alloc::vec![0u8; 2],
            0,
            PointerBufferArena::empty(),
        );
        assert_eq!(ctx.read_in_data::<u64>(0), Err(DispatchError::InvalidRequest));
    }

    #[test]
    fn pointer_arena_carves_from_high_end_aligned() {
        let mut backing = alloc::vec![0u8; 64];
        // SAFETY: backing lives for the duration of the test.
        let mut arena = unsafe { PointerBufferArena::new(backing.as_mut_ptr(), 64) };
        let p1 = arena.carve(10).unwrap();
        // 64 - 10 = 54, aligned down to 48.
        assert_eq!(unsafe { p1.offset_from(backing.as_ptr()) }, 48);
        assert_eq!(arena.remaining(), 48);
    }

    #[test]
    fn pointer_arena_overflow_detected() {
        let mut backing = alloc::vec![0u8; 16];
        let mut arena = unsafe { PointerBufferArena::new(backing.as_mut_ptr(), 16) };
        assert!(arena.carve(8).is_ok());
        assert_eq!(arena.carve(16), Err(DispatchError::PointerBufferOverflow));
    }
}
