//! The data-channel multiplexer.
//!
//! Grounded in `htclow_mux.hpp`/`.cpp` (channel registry) layered on top of
//! [`channel::ChannelImpl`]. Channels are stored in a `BTreeMap` keyed by
//! [`ChannelInternal`] rather than the original's intrusive-list-based
//! registry.

pub mod channel;
pub mod packet;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::packet::ChannelInternal;
use crate::{HtclowError, Result};

pub use channel::{ChannelConfig, ChannelImpl, ChannelState, ReceiveOutcome};
pub use packet::{DataPacketType, RawPacketType};

/// Owns every registered data channel and the version the control service
/// most recently negotiated.
pub struct Mux {
    channels: BTreeMap<ChannelInternal, ChannelImpl>,
    version: i16,
    /// Channels an `Error` packet has already been queued for but not yet
    /// sent, so a flood of packets on an unknown channel only ever produces
    /// one outstanding `Error` reply.
    pending_unknown_errors: BTreeSet<ChannelInternal>,
}

impl Mux {
    pub fn new() -> Self {
        Self {
            channels: BTreeMap::new(),
            version: 0,
            pending_unknown_errors: BTreeSet::new(),
        }
    }

    pub fn set_version(&mut self, version: i16) {
        self.version = version;
        for channel in self.channels.values_mut() {
            channel.set_version(version);
        }
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    /// Registers a new channel, starting `Unconnectable` until the control
    /// link and this channel's connectability both agree it can come up.
    pub fn add_channel(&mut self, channel: ChannelInternal, config: ChannelConfig) {
        let mut impl_ = ChannelImpl::new(config);
        impl_.set_version(self.version);
        self.channels.insert(channel, impl_);
    }

    pub fn channel_mut(&mut self, channel: ChannelInternal) -> Result<&mut ChannelImpl> {
        self.channels.get_mut(&channel).ok_or(HtclowError::ChannelNotExist)
    }

    pub fn channel(&self, channel: ChannelInternal) -> Result<&ChannelImpl> {
        self.channels.get(&channel).ok_or(HtclowError::ChannelNotExist)
    }

    /// Drives every channel's `Unconnectable <-> Connectable` transition from
    /// the control state machine, called after the control link's readied /
    /// connectable set changes.
    pub fn update_channel_state(
        &mut self,
        control_readied: bool,
        is_connectable: impl Fn(ChannelInternal) -> bool,
        is_shutdown_unsupported: impl Fn(ChannelInternal) -> bool,
    ) {
        for (&id, channel) in self.channels.iter_mut() {
            channel.update_state(control_readied, is_connectable(id), is_shutdown_unsupported(id));
        }
    }

    /// Routes one received `Data` packet.
    pub fn process_receive_data(&mut self, channel_id: ChannelInternal, version: i16, offset: u64, share: u64, body: &[u8]) -> Result<()> {
        match self.channels.get_mut(&channel_id) {
            Some(channel) => channel.process_receive_data(version, offset, share, body),
            None => {
                self.pending_unknown_errors.insert(channel_id);
                Err(HtclowError::ChannelNotExist)
            }
        }
    }

    pub fn process_receive_max_data(&mut self, channel_id: ChannelInternal, version: i16, share: u64) -> Result<()> {
        match self.channels.get_mut(&channel_id) {
            Some(channel) => channel.process_receive_max_data(version, share),
            None => {
                self.pending_unknown_errors.insert(channel_id);
                Err(HtclowError::ChannelNotExist)
            }
        }
    }

    pub fn process_receive_error(&mut self, channel_id: ChannelInternal) {
        if let Some(channel) = self.channels.get_mut(&channel_id) {
            channel.process_receive_error();
        }
    }

    /// Pops the next `Error` header owed to an unrecognized channel, if any.
    pub fn take_pending_unknown_error(&mut self) -> Option<ChannelInternal> {
        let first = *self.pending_unknown_errors.iter().next()?;
        self.pending_unknown_errors.remove(&first);
        Some(first)
    }

    /// Scans every channel for one with an outgoing packet ready, in
    /// registration order. Used by the send worker's `QueryNextPacket`.
    pub fn query_send_packet(&self) -> Option<(ChannelInternal, DataPacketType)> {
        for (&id, channel) in self.channels.iter() {
            if let Some(packet) = channel.query_send_packet() {
                return Some((id, packet));
            }
        }
        None
    }

    pub fn remove_send_packet(&mut self, channel_id: ChannelInternal) -> Result<()> {
        self.channel_mut(channel_id)?.remove_send_packet();
        Ok(())
    }

    pub fn channel_ids(&self) -> Vec<ChannelInternal> {
        self.channels.keys().copied().collect()
    }
}

impl Default for Mux {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_channel_data_packet_queues_one_error() {
        let mut mux = Mux::new();
        let ch = ChannelInternal::new(9, 9);
        assert_eq!(
            mux.process_receive_data(ch, 1, 0, 0, b"x"),
            Err(HtclowError::ChannelNotExist)
        );
        assert_eq!(
            mux.process_receive_data(ch, 1, 0, 0, b"y"),
            Err(HtclowError::ChannelNotExist)
        );
        assert_eq!(mux.take_pending_unknown_error(), Some(ch));
        assert_eq!(mux.take_pending_unknown_error(), None);
    }

    #[test]
    fn registered_channel_starts_unconnectable_until_control_is_readied() {
        let mut mux = Mux::new();
        let ch = ChannelInternal::new(1, 0);
        mux.add_channel(ch, ChannelConfig::default());
        assert_eq!(mux.channel(ch).unwrap().state(), ChannelState::Unconnectable);

        mux.update_channel_state(true, |_| true, |_| false);
        assert_eq!(mux.channel(ch).unwrap().state(), ChannelState::Connectable);
    }
}
