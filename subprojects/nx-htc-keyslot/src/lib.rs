//! Virtual-to-physical AES keyslot arbitration.
//!
//! Mirrors the `spl` service's keyslot cache: a small, fixed pool of physical
//! AES keyslots is shared by a larger pool of virtual keyslot numbers handed
//! out to callers. An MRU list decides which physical slot gets evicted when a
//! virtual slot that isn't currently cached needs one.
//!
//! The intrusive, node-embedded list used by the original C++ `KeySlotCache` is
//! replaced here with an arena of entries plus an explicit index-based MRU
//! ordering (front = most recently used, back = eviction candidate), per the
//! shared re-architecture used across this workspace for every other
//! intrusive-list-backed structure.

#![no_std]

extern crate alloc;
extern crate nx_panic_handler;

mod cache;

pub use cache::{AllocatorId, KeySlotCache, KeySlotCacheEntry};

/// Errors raised while arbitrating keyslots.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum KeySlotError {
    /// The virtual slot is not currently bound to any physical slot.
    #[error("virtual keyslot not found in cache")]
    NotFound,
    /// The caller does not own the virtual slot it tried to operate on.
    #[error("virtual keyslot is owned by a different allocator")]
    NotOwned,
    /// The cache has no physical slots configured.
    #[error("keyslot cache has zero capacity")]
    NoCapacity,
}

pub type Result<T> = core::result::Result<T, KeySlotError>;
