//! Per-channel state, flow control, and buffer management.
//!
//! Grounded in `htclow_mux_channel_impl.cpp`'s `ChannelImpl`. The original's
//! packets are intrusive-list nodes pulled from a custom allocator; here the
//! send side holds a byte `Vec` plus a queue of pending `MaxData` packets, and
//! the receive side is a plain growable `Vec` (capacity-bounded by
//! `ChannelConfig::receive_buffer_capacity`), both allocated normally.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::task::{new_task, Task, TaskCompleter, TaskIdAllocator, Trigger};
use crate::{HtclowError, Result};

use super::packet::DataPacketType;

/// Data-channel connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// The control link isn't `Ready` yet; the channel can't be connected to.
    Unconnectable,
    /// The control link is ready and this channel is a recognized service
    /// channel, but no `ConnectBegin` has completed yet.
    Connectable,
    Connected,
    /// Terminal; a new channel must be created to reconnect.
    Disconnected,
}

/// Per-channel tunables, supplied by the channel's owner at creation.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    pub max_packet_size: usize,
    pub receive_buffer_capacity: usize,
    pub initial_counter_max_data: u64,
    pub flow_control_enabled: bool,
    pub handshake_enabled: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            max_packet_size: 0x1000,
            receive_buffer_capacity: 0x1000,
            initial_counter_max_data: 0,
            flow_control_enabled: true,
            handshake_enabled: true,
        }
    }
}

struct PendingReceive {
    demanded: usize,
    completer: TaskCompleter,
}

/// One multiplexed data channel's full state.
pub struct ChannelImpl {
    state: ChannelState,
    config: ChannelConfig,
    version: i16,

    send_buffer: Vec<u8>,
    pending_max_data: VecDeque<u64>,

    receive_buffer: Vec<u8>,
    offset: u64,
    share: Option<u64>,
    cur_max_data: u64,
    prev_max_data: u64,

    /// Running count of bytes already handed to the peer as `Data` packets
    /// (distinct from `offset`, which tracks the *receive*-side running
    /// count). The spec's "offset" invariant is per-direction; a channel
    /// runs one in each direction simultaneously.
    send_offset: u64,

    task_ids: TaskIdAllocator,
    pending_connect: Vec<TaskCompleter>,
    pending_flush: Vec<TaskCompleter>,
    pending_receive: Vec<PendingReceive>,
}

impl ChannelImpl {
    pub fn new(config: ChannelConfig) -> Self {
        Self {
            state: ChannelState::Unconnectable,
            config,
            version: 0,
            send_buffer: Vec::new(),
            pending_max_data: VecDeque::new(),
            receive_buffer: Vec::new(),
            offset: 0,
            share: None,
            cur_max_data: 0,
            prev_max_data: 0,
            send_offset: 0,
            task_ids: TaskIdAllocator::new(),
            pending_connect: Vec::new(),
            pending_flush: Vec::new(),
            pending_receive: Vec::new(),
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn set_version(&mut self, version: i16) {
        self.version = version;
    }

    /// Driven by the control state machine: `Unconnectable` <-> `Connectable`
    /// as the link comes up and down, never touching an already-`Connected`
    /// or `Disconnected` channel.
    pub fn update_state(&mut self, control_readied: bool, connectable: bool, shutdown_unsupported: bool) {
        if shutdown_unsupported {
            self.shutdown_force();
            return;
        }
        match self.state {
            ChannelState::Unconnectable if control_readied && connectable => {
                self.set_state(ChannelState::Connectable);
            }
            ChannelState::Connectable if !control_readied || !connectable => {
                self.set_state(ChannelState::Unconnectable);
            }
            _ => {}
        }
    }

    fn set_state(&mut self, state: ChannelState) {
        self.set_state_without_check(state);
    }

    fn set_state_without_check(&mut self, state: ChannelState) {
        self.state = state;
        if state == ChannelState::Disconnected {
            self.notify_disconnect();
        }
    }

    fn notify_disconnect(&mut self) {
        for completer in self.pending_connect.drain(..) {
            completer.complete(Trigger::Disconnect);
        }
        for completer in self.pending_flush.drain(..) {
            completer.complete(Trigger::Disconnect);
        }
        for pending in self.pending_receive.drain(..) {
            pending.completer.complete(Trigger::Disconnect);
        }
    }

    /// Forces the channel to `Disconnected` from any non-terminal state,
    /// clearing the send buffer and completing every pending task.
    pub fn shutdown_force(&mut self) {
        if self.state == ChannelState::Disconnected {
            return;
        }
        self.send_buffer.clear();
        self.pending_max_data.clear();
        self.set_state_without_check(ChannelState::Disconnected);
    }

    // -- receive path ------------------------------------------------------

    /// Handles an inbound `Data` packet body.
    pub fn process_receive_data(&mut self, version: i16, offset: u64, share: u64, body: &[u8]) -> Result<()> {
        self.check_receivable(version)?;
        if offset != self.offset {
            return Err(HtclowError::ProtocolError);
        }
        self.apply_share(share)?;
        self.offset += body.len() as u64;
        self.receive_buffer.extend_from_slice(body);
        self.wake_satisfied_receives();
        Ok(())
    }

    /// Handles an inbound `MaxData` packet (no offset/body, window update only).
    pub fn process_receive_max_data(&mut self, version: i16, share: u64) -> Result<()> {
        self.check_receivable(version)?;
        self.apply_share(share)?;
        Ok(())
    }

    /// Handles an inbound `Error` packet: force-shuts-down if the channel was
    /// actually in use, otherwise it's a no-op (nothing to tear down yet).
    pub fn process_receive_error(&mut self) {
        if matches!(self.state, ChannelState::Connected | ChannelState::Disconnected) {
            self.shutdown_force();
        }
    }

    fn check_receivable(&self, version: i16) -> Result<()> {
        if !matches!(self.state, ChannelState::Connectable | ChannelState::Connected) {
            return Err(HtclowError::NotConnected);
        }
        if version != self.version {
            return Err(HtclowError::ProtocolError);
        }
        Ok(())
    }

    fn apply_share(&mut self, share: u64) -> Result<()> {
        if self.config.flow_control_enabled {
            if share < self.share.unwrap_or(0) {
                return Err(HtclowError::ProtocolError);
            }
            self.share = Some(share);
        }
        Ok(())
    }

    fn wake_satisfied_receives(&mut self) {
        let available = self.receive_buffer.len();
        let mut remaining = Vec::with_capacity(self.pending_receive.len());
        for pending in self.pending_receive.drain(..) {
            if pending.demanded <= available {
                pending.completer.complete(Trigger::ReceiveData);
            } else {
                remaining.push(pending);
            }
        }
        self.pending_receive = remaining;
        self.maybe_advertise_window();
    }

    /// Advertises a fresh `MaxData` window whenever the receiver's remaining
    /// slack drops below one packet, per `DoReceiveEnd`'s replenishment rule.
    fn maybe_advertise_window(&mut self) {
        if !self.config.flow_control_enabled {
            return;
        }
        let header_and_packet = self.config.max_packet_size as u64 + 0x20;
        if self.prev_max_data.saturating_sub(self.offset) < header_and_packet {
            self.cur_max_data += self.config.receive_buffer_capacity as u64;
            self.prev_max_data = self.cur_max_data;
            self.pending_max_data.push_back(self.cur_max_data);
        }
    }

    /// Drains up to `max_len` bytes already received, if at least `min_len`
    /// are available; otherwise registers a pending receive task.
    pub fn do_receive(&mut self, min_len: usize, max_len: usize) -> ReceiveOutcome {
        if self.receive_buffer.len() >= min_len {
            let take = max_len.min(self.receive_buffer.len());
            let data = self.receive_buffer.drain(..take).collect();
            self.maybe_advertise_window();
            return ReceiveOutcome::Ready(data);
        }
        let id = self.task_ids.next();
        let (task, completer) = new_task(id);
        self.pending_receive.push(PendingReceive {
            demanded: min_len,
            completer,
        });
        ReceiveOutcome::Pending(task)
    }

    // -- send path -----------------------------------------------------

    /// Queues bytes for transmission. Completes immediately with
    /// `SendComplete` in this re-architecture's simplified model, since the
    /// byte copy into `send_buffer` always succeeds (no fixed-capacity cap
    /// on the owned `Vec`, unlike the original's ring).
    pub fn do_send(&mut self, data: &[u8]) -> Trigger {
        self.send_buffer.extend_from_slice(data);
        Trigger::SendBufferEmpty
    }

    /// Returns a task that completes once the send buffer has fully drained.
    pub fn do_flush(&mut self) -> Task {
        let id = self.task_ids.next();
        let (task, completer) = new_task(id);
        if self.send_buffer.is_empty() {
            completer.complete(Trigger::SendBufferEmpty);
        } else {
            self.pending_flush.push(completer);
        }
        task
    }

    /// Bytes still permitted onto the wire before the peer's advertised
    /// window (`share`) is exhausted. `None` (flow control disabled, or no
    /// window advertised yet) imposes no cap.
    fn send_window_remaining(&self) -> Option<u64> {
        if !self.config.flow_control_enabled {
            return None;
        }
        Some(self.share.unwrap_or(0).saturating_sub(self.send_offset))
    }

    /// Builds the next outgoing `Data`/`MaxData` packet body, chunked to the
    /// configured max packet size and to the remaining flow-control window,
    /// if anything is pending. Stalls (returns `None`) once the window is
    /// exhausted, even with bytes left in `send_buffer`.
    pub fn query_send_packet(&self) -> Option<DataPacketType> {
        if let Some(&share) = self.pending_max_data.front() {
            return Some(DataPacketType::MaxData { share });
        }
        if self.send_buffer.is_empty() {
            return None;
        }
        let mut take = self.config.max_packet_size.min(self.send_buffer.len());
        if let Some(window) = self.send_window_remaining() {
            take = take.min(window as usize);
        }
        if take == 0 {
            return None;
        }
        Some(DataPacketType::Data {
            offset: self.send_offset,
            body: self.send_buffer[..take].to_vec(),
        })
    }

    /// Removes the packet `query_send_packet` last returned, advancing
    /// internal counters and waking flush tasks if the buffer is now empty.
    pub fn remove_send_packet(&mut self) {
        if self.pending_max_data.pop_front().is_some() {
            return;
        }
        let mut take = self.config.max_packet_size.min(self.send_buffer.len());
        if let Some(window) = self.send_window_remaining() {
            take = take.min(window as usize);
        }
        if take == 0 {
            return;
        }
        self.send_buffer.drain(..take);
        self.send_offset += take as u64;
        if self.send_buffer.is_empty() {
            for completer in self.pending_flush.drain(..) {
                completer.complete(Trigger::SendBufferEmpty);
            }
        }
    }

    // -- connect path -----------------------------------------------------

    /// Requests the channel begin connecting. Completes immediately if
    /// already `Connected`; otherwise it completes the first time the
    /// channel reaches `Connected` via [`Self::do_connect_end`].
    pub fn do_connect_begin(&mut self) -> Task {
        let id = self.task_ids.next();
        let (task, completer) = new_task(id);
        if self.state == ChannelState::Connected {
            completer.complete(Trigger::ConnectReady);
        } else {
            self.pending_connect.push(completer);
        }
        task
    }

    /// Transitions `Connectable -> Connected` and seeds flow control,
    /// completing every pending `do_connect_begin` task.
    pub fn do_connect_end(&mut self) {
        self.set_state_without_check(ChannelState::Connected);
        if self.config.handshake_enabled {
            self.cur_max_data = self.config.receive_buffer_capacity as u64;
            self.prev_max_data = self.cur_max_data;
            self.pending_max_data.push_back(self.cur_max_data);
        } else {
            self.share = Some(self.config.initial_counter_max_data);
        }
        for completer in self.pending_connect.drain(..) {
            completer.complete(Trigger::ConnectReady);
        }
    }

    pub fn do_shutdown(&mut self) {
        self.shutdown_force();
    }

    #[cfg(test)]
    pub fn receive_len(&self) -> usize {
        self.receive_buffer.len()
    }
}

/// The outcome of [`ChannelImpl::do_receive`].
pub enum ReceiveOutcome {
    Ready(Vec<u8>),
    Pending(Task),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_channel() -> ChannelImpl {
        let mut ch = ChannelImpl::new(ChannelConfig::default());
        ch.update_state(true, true, false);
        ch.do_connect_end();
        ch
    }

    #[test]
    fn connect_begin_completes_immediately_once_connected() {
        let mut ch = connected_channel();
        let task = ch.do_connect_begin();
        assert_eq!(task.wait(), Trigger::ConnectReady);
    }

    #[test]
    fn data_packet_out_of_order_offset_is_a_protocol_error() {
        let mut ch = connected_channel();
        assert_eq!(
            ch.process_receive_data(0, 5, 0, b"hello"),
            Err(HtclowError::ProtocolError)
        );
    }

    #[test]
    fn data_packet_accumulates_and_advances_offset() {
        let mut ch = connected_channel();
        ch.process_receive_data(0, 0, 0, b"hi").unwrap();
        assert_eq!(ch.receive_len(), 2);
        ch.process_receive_data(0, 2, 0, b"!").unwrap();
        assert_eq!(ch.receive_len(), 3);
    }

    #[test]
    fn shrinking_share_is_rejected() {
        let mut ch = connected_channel();
        ch.process_receive_max_data(0, 100).unwrap();
        assert_eq!(
            ch.process_receive_max_data(0, 50),
            Err(HtclowError::ProtocolError)
        );
    }

    #[test]
    fn send_then_flush_completes_once_buffer_drains() {
        let mut ch = connected_channel();
        ch.do_send(b"payload");
        let flush = ch.do_flush();
        // Drain the one packet the send put in the buffer.
        while ch.query_send_packet().is_some() {
            ch.remove_send_packet();
        }
        assert_eq!(flush.wait(), Trigger::SendBufferEmpty);
    }

    #[test]
    fn error_packet_force_disconnects_a_connected_channel() {
        let mut ch = connected_channel();
        ch.process_receive_error();
        assert_eq!(ch.state(), ChannelState::Disconnected);
    }

    #[test]
    fn receive_waits_until_enough_bytes_are_buffered() {
        let mut ch = connected_channel();
        let outcome = ch.do_receive(4, 4);
        let task = match outcome {
            ReceiveOutcome::Pending(task) => task,
            ReceiveOutcome::Ready(_) => panic!("expected pending"),
        };
        ch.process_receive_data(0, 0, 0, b"abcd").unwrap();
        assert_eq!(task.wait(), Trigger::ReceiveData);
    }

    /// End-to-end flow-control scenario: a channel with a 0x10000-byte
    /// initial window and 0x1000-byte packets can put out exactly 0x10
    /// packets before stalling, then resumes once a peer `MaxData` raises
    /// the window.
    #[test]
    fn send_stalls_at_window_then_resumes_after_peer_max_data() {
        let config = ChannelConfig {
            max_packet_size: 0x1000,
            receive_buffer_capacity: 0x1000,
            initial_counter_max_data: 0x10000,
            flow_control_enabled: true,
            handshake_enabled: false,
        };
        let mut ch = ChannelImpl::new(config);
        ch.update_state(true, true, false);
        ch.do_connect_end();

        ch.do_send(&alloc::vec![0u8; 0x18000]);

        let mut packets_sent = 0;
        while let Some(pkt) = ch.query_send_packet() {
            match pkt {
                DataPacketType::Data { body, .. } => assert_eq!(body.len(), 0x1000),
                DataPacketType::MaxData { .. } => panic!("unexpected MaxData from sender"),
            }
            ch.remove_send_packet();
            packets_sent += 1;
        }
        assert_eq!(packets_sent, 0x10);

        // Window exhausted: no further packets until the peer advertises more.
        assert!(ch.query_send_packet().is_none());

        ch.process_receive_max_data(0, 0x18000).unwrap();

        let mut remaining = 0usize;
        while let Some(pkt) = ch.query_send_packet() {
            match pkt {
                DataPacketType::Data { body, .. } => remaining += body.len(),
                DataPacketType::MaxData { .. } => panic!("unexpected MaxData from sender"),
            }
            ch.remove_send_packet();
        }
        assert_eq!(remaining, 0x8000);
    }
}
