//! Low-level multiplexed transport (HTC) between target and host.
//!
//! Two protocols share one physical [`driver::Driver`] link: the control
//! protocol (module [`ctrl`]) negotiates the connection itself (handshake,
//! sleep/resume, beacon discovery) while the data protocol (module [`mux`])
//! carries per-channel byte streams once the link is ready. [`task`] is the
//! shared completion-event primitive both protocols hand back to callers for
//! asynchronous operations (connect, send, receive, flush).
//!
//! This crate owns only the protocol state machines and wire format; the
//! actual bytes-on-the-wire I/O (USB gadget, TCP socket, or the plain-channel
//! SMC backend) is supplied by the embedding binary through [`driver::Driver`],
//! and the worker threads that drive `Driver` in a loop are likewise the
//! embedding binary's responsibility, not this crate's.

#![no_std]

extern crate alloc;
extern crate nx_panic_handler;

pub mod ctrl;
pub mod driver;
pub mod mux;
pub mod packet;
pub mod task;

pub use driver::{Driver, DriverType};
pub use packet::{ChannelInternal, ModuleId};
pub use task::{Task, Trigger};

/// Errors common to both the control and data protocols.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum HtclowError {
    /// A peer sent a packet this protocol state machine wasn't expecting.
    #[error("received unexpected protocol packet")]
    ProtocolError,
    /// An operation was attempted while the channel/link wasn't connected.
    #[error("channel is not connected")]
    NotConnected,
    /// The requested channel is not known to the mux.
    #[error("unknown channel")]
    ChannelNotExist,
    /// The underlying driver reported an I/O failure.
    #[error("driver I/O error")]
    DriverError,
    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

pub type Result<T> = core::result::Result<T, HtclowError>;
