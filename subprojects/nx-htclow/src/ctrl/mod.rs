//! The control (handshake) protocol.

pub mod packet;
pub mod service;
pub mod state;

pub use packet::{Packet, PacketType, SendBuffer};
pub use service::{HtcctrlService, ServiceChannelDescriptor, TargetSettings, PROTOCOL_VERSION};
pub use state::{State, StateError, StateMachine};
