//! The control-protocol link state machine.
//!
//! Directly grounded in `htclow_ctrl_state.hpp`'s `HtcctrlState` enum and
//! `IsStateTransitionAllowed` table, plus the per-service-channel bookkeeping
//! from `htclow_ctrl_state_machine.hpp`.

use alloc::vec::Vec;

use crate::packet::ChannelInternal;

/// One of the thirteen control-link states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    DriverConnected,
    SentConnectFromHost,
    Connected,
    SentReadyFromHost,
    Ready,
    SentSuspendFromTarget,
    EnterSleep,
    Sleep,
    ExitSleep,
    SentResumeFromTarget,
    Disconnected,
    DriverDisconnected,
    Error,
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("control state transition not allowed")]
    TransitionNotAllowed,
}

pub type Result<T> = core::result::Result<T, StateError>;

/// Mirrors `IsStateTransitionAllowed`: a fixed partial function over pairs of
/// states, independent of any other control-service state.
pub fn is_transition_allowed(from: State, to: State) -> bool {
    use State::*;
    match from {
        DriverDisconnected => matches!(to, DriverConnected),
        DriverConnected => matches!(
            to,
            SentConnectFromHost | Disconnected | DriverDisconnected | Error
        ),
        SentConnectFromHost => matches!(
            to,
            Connected | Disconnected | DriverDisconnected | Error
        ),
        Connected => matches!(
            to,
            SentReadyFromHost | Disconnected | DriverDisconnected | Error
        ),
        SentReadyFromHost => matches!(
            to,
            Ready | Disconnected | DriverDisconnected | Error
        ),
        Ready => matches!(
            to,
            SentSuspendFromTarget | Disconnected | DriverDisconnected | Error
        ),
        SentSuspendFromTarget => matches!(
            to,
            EnterSleep | Disconnected | DriverDisconnected | Error
        ),
        EnterSleep => matches!(
            to,
            Sleep | Disconnected | DriverDisconnected | Error
        ),
        Sleep => matches!(to, ExitSleep),
        ExitSleep => matches!(
            to,
            SentResumeFromTarget | Disconnected | DriverDisconnected | Error
        ),
        SentResumeFromTarget => matches!(
            to,
            Ready | Disconnected | DriverDisconnected | Error
        ),
        Disconnected => matches!(
            to,
            SentConnectFromHost | Disconnected | DriverDisconnected | Error
        ),
        Error => matches!(to, Disconnected | DriverDisconnected | Error),
    }
}

pub fn is_disconnected(state: State) -> bool {
    matches!(state, State::Disconnected | State::DriverDisconnected)
}

pub fn is_connecting(state: State) -> bool {
    matches!(state, State::SentConnectFromHost)
}

/// "Anything from Connected through SentResumeFromTarget", per the distilled
/// spec's description of `IsConnected`.
pub fn is_connected(state: State) -> bool {
    use State::*;
    matches!(
        state,
        Connected
            | SentReadyFromHost
            | Ready
            | SentSuspendFromTarget
            | EnterSleep
            | Sleep
            | ExitSleep
            | SentResumeFromTarget
    )
}

pub fn is_readied(state: State) -> bool {
    use State::*;
    matches!(
        state,
        Ready | SentSuspendFromTarget | EnterSleep | Sleep | ExitSleep | SentResumeFromTarget
    )
}

pub fn is_sleeping(state: State) -> bool {
    use State::*;
    matches!(
        state,
        SentSuspendFromTarget | EnterSleep | Sleep | ExitSleep | SentResumeFromTarget
    )
}

/// Whether a service channel (named in the Ready handshake body, ahead of any
/// data-channel object) is a build this target actually supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceChannelSupport {
    Unknown,
    Supported,
    Unsupported,
}

/// Where a service channel's own connect handshake currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceChannelConnect {
    NotConnecting,
    Connecting,
    ConnectingChecked,
}

struct ServiceChannelState {
    channel: ChannelInternal,
    support: ServiceChannelSupport,
    connect: ServiceChannelConnect,
}

/// The full control-link state plus per-service-channel bookkeeping, guarded
/// by a single lock in the original source (here, by the caller holding a
/// `Mutex<StateMachine>` — see [`crate::ctrl::service::HtcctrlService`]).
pub struct StateMachine {
    state: State,
    prev_state: State,
    channels: Vec<ServiceChannelState>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: State::DriverDisconnected,
            prev_state: State::DriverDisconnected,
            channels: Vec::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_information_needed(&self) -> bool {
        !is_disconnected(self.state) && self.state != State::DriverConnected
    }

    pub fn is_disconnection_needed(&self) -> bool {
        !is_disconnected(self.state) && self.state != State::Sleep && self.state != State::DriverConnected
    }

    pub fn is_connected_status_changed(&self) -> bool {
        is_connected(self.state) != is_connected(self.prev_state)
    }

    pub fn is_sleeping_status_changed(&self) -> bool {
        is_sleeping(self.state) != is_sleeping(self.prev_state)
    }

    /// Attempts the transition, failing if the table forbids it. Mirrors
    /// `SetHtcctrlState`.
    pub fn set_state(&mut self, state: State) -> Result<bool> {
        if !is_transition_allowed(self.state, state) {
            return Err(StateError::TransitionNotAllowed);
        }
        let transitioned = state != self.state;
        self.prev_state = self.state;
        self.state = state;
        Ok(transitioned)
    }

    /// Bypasses the table, used only for forced error/shutdown paths that the
    /// original marks `SetStateWithoutCheckInternal`.
    pub fn set_state_without_check(&mut self, state: State) {
        self.prev_state = self.state;
        self.state = state;
    }

    /// Seeds per-channel support at startup, before any packet is exchanged.
    /// Channels never named here stay at `Unknown` (treated as unsupported).
    pub fn notify_supported_service_channels(&mut self, channels: &[ChannelInternal]) {
        self.channels.clear();
        for &channel in channels {
            self.channels.push(ServiceChannelState {
                channel,
                support: ServiceChannelSupport::Supported,
                connect: ServiceChannelConnect::NotConnecting,
            });
        }
    }

    fn find(&self, channel: ChannelInternal) -> Option<&ServiceChannelState> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    fn find_mut(&mut self, channel: ChannelInternal) -> Option<&mut ServiceChannelState> {
        self.channels.iter_mut().find(|c| c.channel == channel)
    }

    pub fn is_connectable(&self, channel: ChannelInternal) -> bool {
        matches!(
            self.find(channel).map(|c| c.support),
            Some(ServiceChannelSupport::Supported)
        )
    }

    pub fn is_unsupported_service_channel_to_shutdown(&self, channel: ChannelInternal) -> bool {
        match self.find(channel) {
            Some(c) => {
                c.support == ServiceChannelSupport::Unsupported
                    && c.connect != ServiceChannelConnect::NotConnecting
            }
            None => false,
        }
    }

    pub fn set_connecting(&mut self, channel: ChannelInternal) {
        if let Some(c) = self.find_mut(channel) {
            c.connect = ServiceChannelConnect::Connecting;
        }
    }

    pub fn set_not_connecting(&mut self, channel: ChannelInternal) {
        if let Some(c) = self.find_mut(channel) {
            c.connect = ServiceChannelConnect::NotConnecting;
        }
    }

    /// Marks every currently-`Connecting` channel as `ConnectingChecked`.
    pub fn set_connecting_checked(&mut self) {
        for c in self.channels.iter_mut() {
            if c.connect == ServiceChannelConnect::Connecting {
                c.connect = ServiceChannelConnect::ConnectingChecked;
            }
        }
    }

    /// Precondition for sending `ReadyFromTarget`: every known channel is
    /// currently in the `Connecting` phase. Checked *before*
    /// [`Self::set_connecting_checked`] is called, mirroring
    /// `TryReadyInternal`'s check-then-mark-checked ordering.
    pub fn are_service_channels_connecting(&self) -> bool {
        !self.channels.is_empty()
            && self
                .channels
                .iter()
                .all(|c| c.connect == ServiceChannelConnect::Connecting)
    }

    pub fn clear_service_channel_states(&mut self) {
        for c in self.channels.iter_mut() {
            c.connect = ServiceChannelConnect::NotConnecting;
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_can_only_go_to_driver_connected() {
        assert!(is_transition_allowed(
            State::DriverDisconnected,
            State::DriverConnected
        ));
        assert!(!is_transition_allowed(
            State::DriverDisconnected,
            State::Connected
        ));
    }

    #[test]
    fn sleep_can_only_exit_sleep() {
        assert!(is_transition_allowed(State::Sleep, State::ExitSleep));
        assert!(!is_transition_allowed(State::Sleep, State::Error));
        assert!(!is_transition_allowed(State::Sleep, State::Disconnected));
    }

    #[test]
    fn full_happy_path_sequence_is_allowed() {
        let mut sm = StateMachine::new();
        for target in [
            State::DriverConnected,
            State::SentConnectFromHost,
            State::Connected,
            State::SentReadyFromHost,
            State::Ready,
        ] {
            sm.set_state(target).unwrap();
        }
        assert_eq!(sm.state(), State::Ready);
        assert!(is_readied(sm.state()));
    }

    #[test]
    fn illegal_transition_is_rejected() {
        let mut sm = StateMachine::new();
        assert_eq!(
            sm.set_state(State::Ready),
            Err(StateError::TransitionNotAllowed)
        );
    }

    #[test]
    fn unsupported_channel_with_pending_connect_is_flagged_for_shutdown() {
        let mut sm = StateMachine::new();
        let ch = ChannelInternal::new(1, 0);
        // Not named in notify_supported_service_channels -> stays Unknown, not
        // Unsupported, so it's simply unconnectable rather than shutdown-flagged.
        assert!(!sm.is_connectable(ch));
        assert!(!sm.is_unsupported_service_channel_to_shutdown(ch));
    }

    #[test]
    fn service_channels_all_checked_unlocks_ready_precondition() {
        let mut sm = StateMachine::new();
        let ch = ChannelInternal::new(1, 0);
        sm.notify_supported_service_channels(&[ch]);
        assert!(sm.is_connectable(ch));
        assert!(!sm.are_service_channels_connecting());
        sm.set_connecting(ch);
        assert!(sm.are_service_channels_connecting());
        sm.set_connecting_checked();
        // Once checked, it's no longer "bare Connecting" so the precondition
        // (meant to be read before marking checked) reports false again.
        assert!(!sm.are_service_channels_connecting());
    }
}
