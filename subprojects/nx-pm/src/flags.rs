use bitflags::bitflags;

bitflags! {
    /// Per-process latch bits updated by the track thread and cleared by the
    /// client-facing event drain.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct Flags: u32 {
        /// Move the process to the exiting list on `Terminated` instead of
        /// freeing it immediately, so a client can observe the exit.
        const SIGNAL_ON_EXIT          = 1 << 0;
        /// Set when the process crashed and hasn't been attached to yet.
        const EXCEPTION_OCCURRED      = 1 << 1;
        /// Set alongside `EXCEPTION_OCCURRED` the first time; distinguishes a
        /// fresh crash from one a debugger has already seen.
        const EXCEPTION_WAITING_ATTACH = 1 << 2;
        /// Client asked to be notified of debug (suspend/resume) events.
        const SIGNAL_ON_DEBUG_EVENT   = 1 << 3;
        /// Latched whenever the process's suspended/running status flips.
        const SUSPENDED_STATE_CHANGED = 1 << 4;
        /// Current suspended status (as opposed to running).
        const SUSPENDED               = 1 << 5;
        /// The process is an application (affects resource-limit group).
        const APPLICATION              = 1 << 6;
        /// Client asked to be notified the first time the process starts running.
        const SIGNAL_ON_START          = 1 << 7;
        /// Latched once after the process's first `Running` transition.
        const STARTED_STATE_CHANGED    = 1 << 8;
        /// Set once the process has taken an unhandled exception, to avoid
        /// re-latching `EXCEPTION_OCCURRED` on every subsequent crash signal.
        const UNHANDLED_EXCEPTION      = 1 << 9;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}
