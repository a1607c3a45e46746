use nx_svc::raw::Handle;

use crate::flags::Flags;

/// Kernel-reported process lifecycle state, as returned by the
/// `GetProcessState`/state-change notification SVCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Created,
    CreatedAttached,
    Running,
    RunningAttached,
    Crashed,
    Terminating,
    Terminated,
    DebugBreak,
}

/// Firmware-version gate used by several of the track thread's side effects.
///
/// Represented as a simple ordered triple rather than a single packed `u32`
/// (as the original source does) because nothing here needs the packed
/// encoding; comparisons against the two gates actually consulted
/// (`2.0.0`, `5.0.0`) read more plainly this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FirmwareVersion(pub u8, pub u8, pub u8);

impl FirmwareVersion {
    pub const V2_0_0: FirmwareVersion = FirmwareVersion(2, 0, 0);
    pub const V5_0_0: FirmwareVersion = FirmwareVersion(5, 0, 0);
}

/// A pin identifier handed out by the launcher to correlate a `ProcessInfo`
/// with the program it was launched from, independent of the kernel-assigned
/// process id (which isn't known until after creation on some paths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(pub u64);

/// One tracked child process.
///
/// `waiter_node` in the source is an intrusive list node linking this entry
/// into the track thread's multi-wait; here the tracker instead keeps a
/// parallel `Vec<Handle>` indexed the same way as its process list (an arena
/// + indices model, per the workspace's standing re-architecture of intrusive
/// lists), so `ProcessInfo` carries no link fields at all.
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    pub process_handle: Handle,
    pub process_id: u64,
    pub pin_id: PinId,
    pub location: u32,
    pub override_status: u32,
    pub svc_state: ProcessState,
    pub flags: Flags,
}

impl ProcessInfo {
    pub fn new(
        process_handle: Handle,
        process_id: u64,
        pin_id: PinId,
        location: u32,
        override_status: u32,
        flags: Flags,
    ) -> Self {
        Self {
            process_handle,
            process_id,
            pin_id,
            location,
            override_status,
            svc_state: ProcessState::Created,
            flags,
        }
    }
}
