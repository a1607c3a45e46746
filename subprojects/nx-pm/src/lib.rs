//! Process lifecycle tracking.
//!
//! Keeps an in-memory registry of child processes, reacts to kernel-delivered
//! state-change signals by updating per-process flags, and surfaces a queue of
//! [`tracker::ProcessEventInfo`] records for clients to drain. Also arbitrates
//! resource-limit memory boosts against process launches.
//!
//! The process-manager globals from the original source (`g_process_list`,
//! `g_process_event`, ...) become owned fields of [`tracker::ProcessTracker`],
//! constructed once by the embedding binary and shared by reference with the
//! services that expose it over IPC.

#![no_std]

extern crate alloc;
extern crate nx_panic_handler;

pub mod flags;
pub mod process_info;
pub mod resource;
pub mod tracker;
pub mod wait;

pub use flags::Flags;
pub use process_info::{FirmwareVersion, PinId, ProcessInfo, ProcessState};
pub use resource::{BoostArbiter, ResourceError, ResourceLimitGroup, ResourceLimitWriter};
pub use tracker::{ProcessEventInfo, ProcessTracker, TrackerError};
pub use wait::{WaitError, wait_any};
