use alloc::collections::VecDeque;
use alloc::vec::Vec;

use nx_std_sync::Mutex;

use crate::flags::Flags;
use crate::process_info::{FirmwareVersion, PinId, ProcessInfo, ProcessState};

/// An event surfaced to a client polling [`ProcessTracker::get_process_event_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessEventInfo {
    None,
    Started(PinId),
    DebugBreak(PinId),
    DebugRunning(PinId),
    Exception(PinId),
    Exited(PinId),
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    #[error("no tracked process at that index")]
    NotFound,
}

pub type Result<T> = core::result::Result<T, TrackerError>;

struct Inner {
    live: Vec<ProcessInfo>,
    exiting: VecDeque<ProcessInfo>,
}

/// Owns the live/exiting process lists and the flag-update logic driven by
/// the track thread. Replaces the original source's `g_process_list` /
/// `g_process_event` globals with an explicit, constructible object.
pub struct ProcessTracker {
    inner: Mutex<Inner>,
}

impl ProcessTracker {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                live: Vec::new(),
                exiting: VecDeque::new(),
            }),
        }
    }

    /// Adds a freshly-launched process to the live list. Returns the index
    /// the track thread should use when later reporting this process's
    /// kernel-signaled state changes via [`on_state_change`](Self::on_state_change).
    ///
    /// This stands in for the source's "link into the track thread's
    /// multi-wait" step: the multi-wait's handle table and this list are
    /// expected to be kept index-aligned by the caller (the track thread
    /// owns both).
    pub fn enqueue(&self, info: ProcessInfo) -> usize {
        let mut inner = self.inner.lock();
        inner.live.push(info);
        log::debug!("pm: tracking process_id={}", inner.live.last().unwrap().process_id);
        inner.live.len() - 1
    }

    /// Number of processes currently tracked as live.
    pub fn live_count(&self) -> usize {
        self.inner.lock().live.len()
    }

    /// Applies a kernel-reported state transition to the process at `index`,
    /// per the state -> flag/event table. Returns `true` if the transition
    /// makes the global process event worth signaling.
    pub fn on_state_change(
        &self,
        index: usize,
        new_state: ProcessState,
        fw: FirmwareVersion,
    ) -> Result<bool> {
        let mut inner = self.inner.lock();
        let should_signal = {
            let info = inner.live.get_mut(index).ok_or(TrackerError::NotFound)?;
            info.svc_state = new_state;
            apply_state_transition(&mut info.flags, new_state, fw)
        };

        if new_state == ProcessState::Terminated {
            // fw < 5.0.0 with SignalOnExit set stays in the live list --
            // `get_process_event_info`'s Exited branch below reports it (and
            // removes it) off the live-list entry directly, matching the
            // original's `OnProcessSignaled` which never unlinks this case.
            let stays_live = fw < FirmwareVersion::V5_0_0 && inner.live[index].flags.contains(Flags::SIGNAL_ON_EXIT);
            if !stays_live {
                let info = inner.live.remove(index);
                finish_terminated(&mut inner, info, fw);
            }
        }

        Ok(should_signal)
    }

    /// Scans the live list in insertion order for the first latched,
    /// client-visible event; if none, drains the front of the exiting list.
    pub fn get_process_event_info(&self, fw: FirmwareVersion) -> ProcessEventInfo {
        let mut inner = self.inner.lock();

        for i in 0..inner.live.len() {
            let flags = inner.live[i].flags;
            let pin_id = inner.live[i].pin_id;
            if flags.contains(Flags::STARTED_STATE_CHANGED) {
                inner.live[i].flags.remove(Flags::STARTED_STATE_CHANGED);
                return ProcessEventInfo::Started(pin_id);
            }
            if flags.contains(Flags::SUSPENDED_STATE_CHANGED) {
                inner.live[i].flags.remove(Flags::SUSPENDED_STATE_CHANGED);
                return if flags.contains(Flags::SUSPENDED) {
                    ProcessEventInfo::DebugBreak(pin_id)
                } else {
                    ProcessEventInfo::DebugRunning(pin_id)
                };
            }
            if flags.contains(Flags::EXCEPTION_OCCURRED) {
                inner.live[i].flags.remove(Flags::EXCEPTION_OCCURRED);
                return ProcessEventInfo::Exception(pin_id);
            }
            if fw < FirmwareVersion::V5_0_0 && flags.contains(Flags::SIGNAL_ON_EXIT) && inner.live[i].svc_state == ProcessState::Terminated {
                inner.live.remove(i);
                return ProcessEventInfo::Exited(pin_id);
            }
        }

        if let Some(info) = inner.exiting.pop_front() {
            return ProcessEventInfo::Exited(info.pin_id);
        }

        ProcessEventInfo::None
    }
}

impl Default for ProcessTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn finish_terminated(inner: &mut Inner, info: ProcessInfo, fw: FirmwareVersion) {
    log::debug!(
        "pm: process_id={} terminated, signal_on_exit={}",
        info.process_id,
        info.flags.contains(Flags::SIGNAL_ON_EXIT)
    );
    if info.flags.contains(Flags::SIGNAL_ON_EXIT) && fw >= FirmwareVersion::V5_0_0 {
        inner.exiting.push_back(info);
    }
    // Without SignalOnExit the info is simply dropped here.
}

/// Pure state-table application, split out of [`ProcessTracker`] so it can be
/// unit tested without going through the mutex-guarded list.
fn apply_state_transition(flags: &mut Flags, new_state: ProcessState, fw: FirmwareVersion) -> bool {
    match new_state {
        ProcessState::Running => {
            let mut signal = false;
            if flags.contains(Flags::SIGNAL_ON_DEBUG_EVENT) {
                flags.remove(Flags::SUSPENDED);
                flags.insert(Flags::SUSPENDED_STATE_CHANGED);
                signal = true;
            } else if flags.contains(Flags::SIGNAL_ON_START) && fw >= FirmwareVersion::V2_0_0 {
                flags.insert(Flags::STARTED_STATE_CHANGED);
                flags.remove(Flags::SIGNAL_ON_START);
                signal = true;
            }
            flags.remove(Flags::UNHANDLED_EXCEPTION);
            signal
        }
        ProcessState::Crashed => {
            let mut signal = false;
            if !flags.contains(Flags::UNHANDLED_EXCEPTION) {
                flags.insert(Flags::EXCEPTION_OCCURRED);
                signal = true;
            }
            flags.insert(Flags::EXCEPTION_WAITING_ATTACH);
            signal
        }
        ProcessState::RunningAttached => {
            let mut signal = false;
            if flags.contains(Flags::SIGNAL_ON_DEBUG_EVENT) {
                flags.remove(Flags::SUSPENDED);
                flags.insert(Flags::SUSPENDED_STATE_CHANGED);
                signal = true;
            }
            flags.remove(Flags::UNHANDLED_EXCEPTION);
            signal
        }
        ProcessState::DebugBreak => {
            if flags.contains(Flags::SIGNAL_ON_DEBUG_EVENT) {
                flags.insert(Flags::SUSPENDED);
                flags.insert(Flags::SUSPENDED_STATE_CHANGED);
                true
            } else {
                false
            }
        }
        ProcessState::Terminated => {
            // Side effects are handled by `finish_terminated`; the table
            // entry itself never latches a live-list flag (the process is
            // removed from the live list in the same step).
            flags.contains(Flags::SIGNAL_ON_EXIT)
        }
        ProcessState::Created | ProcessState::CreatedAttached | ProcessState::Terminating => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nx_svc::raw::INVALID_HANDLE;

    fn info(pin: u64, flags: Flags) -> ProcessInfo {
        ProcessInfo::new(INVALID_HANDLE, pin, PinId(pin), 0, 0, flags)
    }

    #[test]
    fn running_with_signal_on_start_latches_started() {
        let tracker = ProcessTracker::new();
        let idx = tracker.enqueue(info(1, Flags::SIGNAL_ON_START));
        let signaled = tracker
            .on_state_change(idx, ProcessState::Running, FirmwareVersion::V2_0_0)
            .unwrap();
        assert!(signaled);
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V2_0_0),
            ProcessEventInfo::Started(PinId(1))
        );
        // Latch is one-shot.
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V2_0_0),
            ProcessEventInfo::None
        );
    }

    #[test]
    fn debug_break_reports_suspended_then_resume_reports_running() {
        let tracker = ProcessTracker::new();
        let idx = tracker.enqueue(info(2, Flags::SIGNAL_ON_DEBUG_EVENT));
        tracker
            .on_state_change(idx, ProcessState::DebugBreak, FirmwareVersion::V5_0_0)
            .unwrap();
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V5_0_0),
            ProcessEventInfo::DebugBreak(PinId(2))
        );

        tracker
            .on_state_change(idx, ProcessState::RunningAttached, FirmwareVersion::V5_0_0)
            .unwrap();
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V5_0_0),
            ProcessEventInfo::DebugRunning(PinId(2))
        );
    }

    #[test]
    fn crash_latches_exception_once() {
        let tracker = ProcessTracker::new();
        let idx = tracker.enqueue(info(3, Flags::empty()));
        let signaled = tracker
            .on_state_change(idx, ProcessState::Crashed, FirmwareVersion::V5_0_0)
            .unwrap();
        assert!(signaled);
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V5_0_0),
            ProcessEventInfo::Exception(PinId(3))
        );
    }

    #[test]
    fn terminated_with_signal_on_exit_post_500_moves_to_exiting_list() {
        let tracker = ProcessTracker::new();
        let idx = tracker.enqueue(info(4, Flags::SIGNAL_ON_EXIT));
        tracker
            .on_state_change(idx, ProcessState::Terminated, FirmwareVersion::V5_0_0)
            .unwrap();
        assert_eq!(tracker.live_count(), 0);
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V5_0_0),
            ProcessEventInfo::Exited(PinId(4))
        );
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V5_0_0),
            ProcessEventInfo::None
        );
    }

    #[test]
    fn terminated_with_signal_on_exit_pre_500_stays_live_until_reported() {
        let tracker = ProcessTracker::new();
        let idx = tracker.enqueue(info(6, Flags::SIGNAL_ON_EXIT));
        tracker
            .on_state_change(idx, ProcessState::Terminated, FirmwareVersion::V2_0_0)
            .unwrap();
        // Not yet reported: still sitting in the live list, not exiting.
        assert_eq!(tracker.live_count(), 1);
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V2_0_0),
            ProcessEventInfo::Exited(PinId(6))
        );
        // Reporting it removes it from the live list.
        assert_eq!(tracker.live_count(), 0);
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V2_0_0),
            ProcessEventInfo::None
        );
    }

    #[test]
    fn terminated_without_signal_on_exit_is_dropped_immediately() {
        let tracker = ProcessTracker::new();
        let idx = tracker.enqueue(info(5, Flags::empty()));
        tracker
            .on_state_change(idx, ProcessState::Terminated, FirmwareVersion::V5_0_0)
            .unwrap();
        assert_eq!(tracker.live_count(), 0);
        assert_eq!(
            tracker.get_process_event_info(FirmwareVersion::V5_0_0),
            ProcessEventInfo::None
        );
    }

    #[test]
    fn unknown_index_is_reported() {
        let tracker = ProcessTracker::new();
        assert_eq!(
            tracker.on_state_change(0, ProcessState::Running, FirmwareVersion::V2_0_0),
            Err(TrackerError::NotFound)
        );
    }
}
