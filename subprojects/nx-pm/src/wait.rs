//! Multi-object wait over raw process handles.
//!
//! The track thread waits on every live process's handle at once to learn which one changed
//! state. `nx_svc::sync::wait_synchronization` only accepts types implementing the sealed
//! `Waitable` trait, which this crate cannot implement for its own handles, so this goes
//! straight to the raw SVC the same way that wrapper does internally.

use nx_svc::error::KernelError as KError;
use nx_svc::raw::{self, Handle};
use nx_svc::result::Error;

/// Mirrors `nx_svc::sync::MAX_WAIT_HANDLES`; the kernel caps a single wait at 64 objects.
pub const MAX_WAIT_HANDLES: usize = 64;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum WaitError {
    #[error("invalid handle in wait set")]
    InvalidHandle,
    #[error("wait timed out")]
    TimedOut,
    #[error("wait cancelled")]
    Cancelled,
    #[error("unknown wait failure")]
    Unknown,
}

/// Waits on up to [`MAX_WAIT_HANDLES`] raw process handles, returning the index of the one that
/// signalled.
///
/// # Safety
/// Every handle in `handles[..handles.len().min(MAX_WAIT_HANDLES)]` must be a valid kernel
/// handle owned by the current process, and none may be a pseudo-handle
/// (`nx_svc::raw::CUR_THREAD_HANDLE` / `CUR_PROCESS_HANDLE`).
pub unsafe fn wait_any(handles: &[Handle], timeout_ns: u64) -> Result<usize, WaitError> {
    let len = handles.len().min(MAX_WAIT_HANDLES);
    let mut idx: i32 = -1;

    // SAFETY: forwarded to the caller's contract; `handles[..len]` is valid for reads for the
    // duration of the call.
    let rc = unsafe { raw::wait_synchronization(&mut idx, handles.as_ptr(), len as i32, timeout_ns) };

    if rc == 0 {
        return Ok(idx as usize);
    }

    let err = Error::from_raw(rc);
    Err(match err.description() {
        114 => WaitError::InvalidHandle,
        117 => WaitError::TimedOut,
        118 => WaitError::Cancelled,
        _ => WaitError::Unknown,
    })
}
