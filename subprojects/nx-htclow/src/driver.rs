//! The physical-link abstraction the rest of this crate is built on top of.
//!
//! The original source has three concrete backends (USB gadget, TCP socket,
//! plain serial/SMC channel) behind a common `IDriver` interface; this crate
//! never picks one of them, it only defines the seam. The embedding binary
//! supplies a [`Driver`] implementation and drives the connect-loop / receive
//! / send worker logic by calling it in a loop on its own threads.

use alloc::vec::Vec;

/// Which concrete backend a [`Driver`] wraps; used only to select the
/// human-readable "Conn" field of the control protocol's beacon response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverType {
    Unknown,
    Socket,
    Usb,
    PlainChannel,
}

impl DriverType {
    /// The original source's `GetConnectionType` strings.
    pub const fn connection_name(self) -> &'static str {
        match self {
            DriverType::Socket => "TCP",
            DriverType::Usb => "USB-gen2",
            DriverType::PlainChannel => "HBPC-gen2",
            DriverType::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    #[error("driver link is not connected")]
    NotConnected,
    #[error("driver I/O failed")]
    IoError,
    #[error("driver was cancelled")]
    Cancelled,
}

pub type Result<T> = core::result::Result<T, DriverError>;

/// A single physical byte link carrying both control and data packets.
///
/// Implementations are expected to be cheap to poll repeatedly from a worker
/// thread; `receive` and `send` only need to move bytes, no framing.
pub trait Driver {
    fn driver_type(&self) -> DriverType;

    /// Establishes the physical link (USB enumeration, TCP accept, ...).
    /// Blocks until connected, failed, or cancelled.
    fn connect(&mut self) -> Result<()>;

    /// Tears the physical link down. Idempotent.
    fn disconnect(&mut self);

    /// Reads exactly `buf.len()` bytes, blocking as needed.
    fn receive(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Writes `buf` as a single transfer.
    fn send(&mut self, buf: &[u8]) -> Result<()>;

    /// Largest single write this link supports; packet bodies are chunked to
    /// respect both this and the channel's own configured max packet size.
    fn max_packet_size(&self) -> usize;
}

/// A fixed-capacity in-memory [`Driver`] used by this crate's own tests and
/// by callers exercising the protocol state machines without real hardware.
#[derive(Default)]
pub struct LoopbackDriver {
    pub inbox: Vec<u8>,
    pub outbox: Vec<u8>,
    pub connected: bool,
}

impl LoopbackDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for LoopbackDriver {
    fn driver_type(&self) -> DriverType {
        DriverType::Unknown
    }

    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<()> {
        if !self.connected {
            return Err(DriverError::NotConnected);
        }
        if self.inbox.len() < buf.len() {
            return Err(DriverError::IoError);
        }
        let rest = self.inbox.split_off(buf.len());
        buf.copy_from_slice(&self.inbox);
        self.inbox = rest;
        Ok(())
    }

    fn send(&mut self, buf: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(DriverError::NotConnected);
        }
        self.outbox.extend_from_slice(buf);
        Ok(())
    }

    fn max_packet_size(&self) -> usize {
        0x1000
    }
}
