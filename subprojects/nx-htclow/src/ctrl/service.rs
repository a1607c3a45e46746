//! The control service: owns the state machine, the beacon/information
//! bodies, and the handshake reaction table.
//!
//! Grounded in `htclow_ctrl_service.cpp`'s `HtcctrlService`. The original
//! formats its beacon body with `util::SNPrintf` into a fixed-size buffer;
//! since this crate always has `alloc`, the same JSON template is built with
//! `alloc::format!` into an owned `String` instead.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::driver::DriverType;
use crate::packet::ChannelInternal;
use crate::{HtclowError, Result};

use super::packet::{PacketType, SendBuffer};
use super::state::{State, StateMachine};

/// Protocol version this crate speaks, per `ctrl::ProtocolVersion`.
pub const PROTOCOL_VERSION: i16 = 1;

/// Static identity fields baked into the beacon response. The original reads
/// these from `settings::fwdbg` / the system settings service at runtime;
/// here they're supplied by the embedding binary at construction.
#[derive(Debug, Clone)]
pub struct TargetSettings {
    pub spec: String,
    pub hardware_type: String,
    pub target_name: String,
    pub serial_number: String,
    pub firmware_version: String,
}

/// One entry of a supported-service-channels descriptor, as carried in a
/// `ReadyFromHost`/`ReadyFromTarget` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceChannelDescriptor {
    pub channel: ChannelInternal,
    pub version: i16,
}

fn build_beacon_response(settings: &TargetSettings, connection: &str) -> String {
    format!(
        "{{\r\n  \"Spec\" : \"{}\",\r\n  \"Conn\" : \"{}\",\r\n  \"HW\" : \"{}\",\r\n  \"Name\" : \"{}\",\r\n  \"SN\" : \"{}\",\r\n  \"FW\" : \"{}\",\r\n  \"Prot\" : \"{}\"\r\n}}\r\n",
        settings.spec,
        connection,
        settings.hardware_type,
        settings.target_name,
        settings.serial_number,
        settings.firmware_version,
        PROTOCOL_VERSION,
    )
}

/// Encodes this target's overall protocol version plus its supported service
/// channels as the JSON body sent in `ReadyFromTarget`: an overall `"Version"`
/// field, then one channel object per entry (`{"Module":m,"Channel":c,"Version":v}`).
fn build_ready_body(channels: &[ServiceChannelDescriptor]) -> String {
    let mut out = format!("{{\r\n  \"Version\" : {},\r\n  \"Channels\" : [\r\n", PROTOCOL_VERSION);
    for (i, d) in channels.iter().enumerate() {
        if i > 0 {
            out.push_str(",\r\n");
        }
        out.push_str(&format!(
            "    {{\"Module\" : {}, \"Channel\" : {}, \"Version\" : {}}}",
            d.channel.module_id, d.channel.channel_id, d.version
        ));
    }
    out.push_str("\r\n  ]\r\n}\r\n");
    out
}

/// Parses a `ReadyFromHost` body built the same way `build_ready_body` builds
/// ours: an overall protocol version, then one `"Module" : m, "Channel" : c,
/// "Version" : v` triple per entry, tolerant of the exact JSON punctuation
/// since the original grammar isn't public. Mirrors `ParseServiceChannel`
/// threading a single version in/out alongside the channel array. Malformed
/// input yields the caller's current version and an empty channel set rather
/// than failing the whole handshake -- an empty descriptor set just means no
/// service channel will be considered connectable, which the rest of the
/// state machine already handles safely.
fn parse_ready_body(body: &[u8], current_version: i16) -> (i16, Vec<ServiceChannelDescriptor>) {
    let text = core::str::from_utf8(body).unwrap_or("");
    let mut numbers = text.split(|c: char| !c.is_ascii_digit()).filter(|s| !s.is_empty());

    let version = numbers.next().and_then(|s| s.parse::<i16>().ok()).unwrap_or(current_version);

    let mut out = Vec::new();
    loop {
        let (Some(m), Some(c), Some(v)) = (numbers.next(), numbers.next(), numbers.next()) else {
            break;
        };
        let (Ok(m), Ok(c), Ok(v)) = (m.parse::<u8>(), c.parse::<u8>(), v.parse::<i16>()) else {
            break;
        };
        out.push(ServiceChannelDescriptor {
            channel: ChannelInternal::new(m, c),
            version: v,
        });
    }
    (version, out)
}

/// The control-protocol service proper.
pub struct HtcctrlService {
    state_machine: StateMachine,
    send_buffer: SendBuffer,
    settings: TargetSettings,
    beacon_response: String,
    information_body: String,
    driver_type: DriverType,
    version: i16,
}

impl HtcctrlService {
    pub fn new(settings: TargetSettings) -> Self {
        let beacon_response = build_beacon_response(&settings, DriverType::Unknown.connection_name());
        Self {
            state_machine: StateMachine::new(),
            send_buffer: SendBuffer::new(),
            settings,
            beacon_response,
            information_body: String::new(),
            driver_type: DriverType::Unknown,
            version: PROTOCOL_VERSION,
        }
    }

    pub fn state(&self) -> State {
        self.state_machine.state()
    }

    pub fn send_buffer_mut(&mut self) -> &mut SendBuffer {
        &mut self.send_buffer
    }

    /// The protocol version negotiated with the host, to be propagated to
    /// [`crate::mux::Mux::set_version`] by the caller whenever it changes.
    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn information_body(&self) -> &str {
        &self.information_body
    }

    pub fn driver_type(&self) -> DriverType {
        self.driver_type
    }

    pub fn notify_supported_service_channels(&mut self, channels: &[ChannelInternal]) {
        self.state_machine.notify_supported_service_channels(channels);
    }

    pub fn set_driver_type(&mut self, driver_type: DriverType) {
        self.driver_type = driver_type;
        self.beacon_response = build_beacon_response(&self.settings, driver_type.connection_name());
    }

    pub fn update_information_body(&mut self, status: &str) {
        self.information_body = format!("{{\r\n  \"Status\" : \"{}\"\r\n}}\r\n", status);
    }

    fn set_state(&mut self, state: State) -> core::result::Result<(), ()> {
        self.state_machine.set_state(state).map(|_| ()).map_err(|_| ())
    }

    /// Dispatches one received control packet body. Mirrors
    /// `ProcessReceivePacket`.
    pub fn process_receive_packet(&mut self, packet_type: super::packet::PacketType, body: &[u8]) -> Result<()> {
        use super::packet::PacketType::*;
        match packet_type {
            ConnectFromHost => self.process_receive_connect(),
            ReadyFromHost => self.process_receive_ready(body),
            SuspendFromHost => self.process_receive_suspend(),
            ResumeFromHost => self.process_receive_resume(),
            DisconnectFromHost => self.process_receive_disconnect(),
            BeaconQuery => self.process_receive_beacon_query(),
            _ => self.process_receive_unexpected(),
        }
    }

    fn process_receive_connect(&mut self) -> Result<()> {
        if self.set_state(State::SentConnectFromHost).is_err() {
            return self.process_receive_unexpected();
        }
        let body = self.beacon_response.clone().into_bytes();
        self.send_buffer.add_packet(PacketType::ConnectFromTarget, body);
        Ok(())
    }

    fn process_receive_ready(&mut self, body: &[u8]) -> Result<()> {
        let (host_version, channels) = parse_ready_body(body, self.version);
        let descriptors: Vec<ChannelInternal> = channels.iter().map(|c| c.channel).collect();

        // Mirrors `ProcessReceiveReadyPacket`'s `m_version < ProtocolVersion`
        // check: a host advertising an older protocol than we speak is
        // rejected outright rather than negotiated down to.
        if host_version < PROTOCOL_VERSION {
            return self.process_receive_unexpected();
        }
        self.version = PROTOCOL_VERSION;

        if self.set_state(State::SentReadyFromHost).is_err() {
            return self.process_receive_unexpected();
        }

        for channel in &descriptors {
            self.state_machine.set_connecting(*channel);
        }

        self.try_ready_internal(&channels);
        Ok(())
    }

    /// Sends `ReadyFromTarget` once every service channel has reached the
    /// `Connecting` phase, then marks them all `ConnectingChecked`. Mirrors
    /// `TryReadyInternal`'s check-then-mark ordering.
    fn try_ready_internal(&mut self, channels: &[ServiceChannelDescriptor]) {
        if self.state_machine.state() == State::SentReadyFromHost
            && self.state_machine.are_service_channels_connecting()
        {
            let body = build_ready_body(channels).into_bytes();
            self.send_buffer.add_packet(PacketType::ReadyFromTarget, body);
            self.state_machine.set_connecting_checked();
        }
    }

    fn process_receive_suspend(&mut self) -> Result<()> {
        if self.set_state(State::EnterSleep).is_err() {
            return self.process_receive_unexpected();
        }
        Ok(())
    }

    fn process_receive_resume(&mut self) -> Result<()> {
        if self.state_machine.state() != State::SentResumeFromTarget
            || self.set_state(State::Ready).is_err()
        {
            return self.process_receive_unexpected();
        }
        Ok(())
    }

    fn process_receive_disconnect(&mut self) -> Result<()> {
        self.set_state(State::Disconnected)
            .map_err(|_| HtclowError::ProtocolError)
    }

    fn process_receive_beacon_query(&mut self) -> Result<()> {
        let body = self.beacon_response.clone().into_bytes();
        self.send_buffer.add_packet(PacketType::BeaconResponse, body);
        Ok(())
    }

    fn process_receive_unexpected(&mut self) -> Result<()> {
        let _ = self.set_state(State::Error);
        self.send_buffer.add_packet(PacketType::DisconnectFromTarget, Vec::new());
        Err(HtclowError::ProtocolError)
    }

    /// Called once the corresponding packet has actually gone out over the
    /// wire, to advance the state machine on the send side.
    pub fn process_send_packet(&mut self, packet_type: PacketType) {
        match packet_type {
            PacketType::ConnectFromTarget => {
                let _ = self.set_state(State::Connected);
            }
            PacketType::ReadyFromTarget => {
                if self.state_machine.state() == State::SentReadyFromHost {
                    let _ = self.set_state(State::Ready);
                }
            }
            PacketType::SuspendFromTarget => {
                let _ = self.set_state(State::SentSuspendFromTarget);
            }
            PacketType::ResumeFromTarget => {
                let _ = self.set_state(State::SentResumeFromTarget);
            }
            _ => {}
        }
    }

    /// Requests a disconnect, if the link is in a state where one is needed
    /// (mirrors `DisconnectInternal`'s guard; the original additionally
    /// blocks the caller until `IsDisconnected()`, which this crate leaves to
    /// the embedding binary since there's no thread to block here).
    pub fn disconnect(&mut self) {
        if self.state_machine.is_disconnection_needed() {
            self.send_buffer.add_packet(PacketType::DisconnectFromTarget, Vec::new());
        }
    }

    /// Requests a resume, if currently sleeping.
    pub fn resume(&mut self) {
        if matches!(self.state_machine.state(), State::Sleep | State::ExitSleep) {
            self.send_buffer.add_packet(PacketType::ResumeFromTarget, Vec::new());
        }
    }

    /// Requests a suspend if ready, else falls back to a plain disconnect.
    pub fn suspend(&mut self) {
        if self.state_machine.state() == State::Ready {
            self.send_buffer.add_packet(PacketType::SuspendFromTarget, Vec::new());
        } else {
            self.disconnect();
        }
    }

    pub fn notify_awake(&mut self) {
        self.update_information_body("Awake");
        self.send_information();
    }

    pub fn notify_asleep(&mut self) {
        self.update_information_body("Asleep");
        self.send_information();
    }

    fn send_information(&mut self) {
        if self.state_machine.is_information_needed() {
            let body = self.information_body.clone().into_bytes();
            self.send_buffer.add_packet(PacketType::InformationFromTarget, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TargetSettings {
        TargetSettings {
            spec: String::from("NX"),
            hardware_type: String::from("icosa"),
            target_name: String::from("switch"),
            serial_number: String::from("XAW00000000000"),
            firmware_version: String::from("17.0.0"),
        }
    }

    #[test]
    fn connect_from_host_queues_connect_from_target_and_advances_state() {
        let mut svc = HtcctrlService::new(settings());
        svc.process_receive_packet(PacketType::ConnectFromHost, &[]).unwrap();
        assert_eq!(svc.state(), State::SentConnectFromHost);
        let pkt = svc.send_buffer_mut().remove_packet().unwrap();
        assert_eq!(pkt.header.packet_type, PacketType::ConnectFromTarget as u16);
        assert!(core::str::from_utf8(&pkt.body).unwrap().contains("\"Spec\""));
    }

    #[test]
    fn send_of_connect_from_target_advances_to_connected() {
        let mut svc = HtcctrlService::new(settings());
        svc.process_receive_packet(PacketType::ConnectFromHost, &[]).unwrap();
        svc.process_send_packet(PacketType::ConnectFromTarget);
        assert_eq!(svc.state(), State::Connected);
    }

    #[test]
    fn unexpected_packet_in_initial_state_errors_and_schedules_disconnect() {
        let mut svc = HtcctrlService::new(settings());
        let err = svc.process_receive_packet(PacketType::ResumeFromHost, &[]);
        assert_eq!(err, Err(HtclowError::ProtocolError));
        assert_eq!(svc.state(), State::Error);
        let pkt = svc.send_buffer_mut().remove_packet().unwrap();
        assert_eq!(pkt.header.packet_type, PacketType::DisconnectFromTarget as u16);
    }

    #[test]
    fn beacon_query_responds_without_changing_state() {
        let mut svc = HtcctrlService::new(settings());
        svc.process_receive_packet(PacketType::BeaconQuery, &[]).unwrap();
        assert_eq!(svc.state(), State::DriverConnected);
        let pkt = svc.send_buffer_mut().remove_packet().unwrap();
        assert_eq!(pkt.header.packet_type, PacketType::BeaconResponse as u16);
    }

    #[test]
    fn ready_from_host_with_matching_channel_sends_ready_from_target() {
        let mut svc = HtcctrlService::new(settings());
        svc.process_receive_packet(PacketType::ConnectFromHost, &[]).unwrap();
        svc.process_send_packet(PacketType::ConnectFromTarget);
        svc.notify_supported_service_channels(&[ChannelInternal::new(5, 0)]);

        let body = build_ready_body(&[ServiceChannelDescriptor {
            channel: ChannelInternal::new(5, 0),
            version: 1,
        }])
        .into_bytes();
        svc.process_receive_packet(PacketType::ReadyFromHost, &body).unwrap();
        assert_eq!(svc.state(), State::SentReadyFromHost);
        let pkt = svc.send_buffer_mut().remove_packet().unwrap();
        assert_eq!(pkt.header.packet_type, PacketType::ReadyFromTarget as u16);
    }

    #[test]
    fn ready_from_host_with_lower_version_is_rejected() {
        let mut svc = HtcctrlService::new(settings());
        svc.process_receive_packet(PacketType::ConnectFromHost, &[]).unwrap();
        svc.process_send_packet(PacketType::ConnectFromTarget);
        svc.notify_supported_service_channels(&[ChannelInternal::new(5, 0)]);

        let body = format!(
            "{{\r\n  \"Version\" : {},\r\n  \"Channels\" : [\r\n    {{\"Module\" : 5, \"Channel\" : 0, \"Version\" : 1}}\r\n  ]\r\n}}\r\n",
            PROTOCOL_VERSION - 1
        )
        .into_bytes();
        let err = svc.process_receive_packet(PacketType::ReadyFromHost, &body);
        assert_eq!(err, Err(HtclowError::ProtocolError));
        assert_eq!(svc.state(), State::Error);
    }

    #[test]
    fn suspend_when_not_ready_falls_back_to_disconnect() {
        let mut svc = HtcctrlService::new(settings());
        svc.suspend();
        // DriverConnected doesn't need a disconnect (IsDisconnectionNeeded is
        // false there), so no packet should be queued.
        assert!(svc.send_buffer_mut().remove_packet().is_none());
    }

    #[test]
    fn notify_asleep_queues_information_once_past_driver_connected() {
        let mut svc = HtcctrlService::new(settings());
        svc.process_receive_packet(PacketType::ConnectFromHost, &[]).unwrap();
        svc.send_buffer_mut().remove_packet();
        svc.notify_asleep();
        let pkt = svc.send_buffer_mut().remove_packet().unwrap();
        assert_eq!(pkt.header.packet_type, PacketType::InformationFromTarget as u16);
        assert!(svc.information_body().contains("Asleep"));
    }
}
