//! Per-service-type command routing.
//!
//! The original `ServiceDispatchTable<N>` is a CRTP template that lays out an
//! array of `{hosver_low, hosver_high, cmd_id, handler}` entries at compile
//! time. Without codegen this collapses to a plain `&'static [DispatchEntry]`
//! built with a `const fn` builder, scanned linearly at dispatch time -- the
//! table sizes in practice (a handful to a few dozen commands) make a linear
//! scan immaterial next to the IPC round-trip it's servicing.

use crate::command::CommandMeta;
use crate::context::DispatchContext;
use crate::error::{DispatchError, Result};

/// Result of invoking a handler: `Ok(())` on success (the handler has already
/// written the reply into the context), `Err` propagates to an error reply.
pub type HandlerFn = fn(&mut DispatchContext) -> Result<()>;

/// One `(shape, handler)` routing entry. The command ID and host-version
/// range a request must match live on `meta` itself -- a single source of
/// truth for "which requests route here" and "what shape must they have".
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    pub meta: CommandMeta,
    pub handler: HandlerFn,
}

impl DispatchEntry {
    pub const fn new(meta: CommandMeta, handler: HandlerFn) -> Self {
        Self { meta, handler }
    }

    /// A entry applicable at every host version with an empty shape --
    /// handy in tests where the handler body and request shape don't matter.
    pub const fn always(cmd_id: u32) -> Self {
        fn noop(_ctx: &mut DispatchContext) -> Result<()> {
            Ok(())
        }
        Self::new(CommandMeta::new(cmd_id), noop)
    }

    fn matches(&self, cmd_id: u32, host_version: u32) -> bool {
        self.meta.cmd_id == cmd_id && self.meta.matches_host_version(host_version)
    }
}

/// An immutable, ordered set of [`DispatchEntry`] values for one service
/// type. At most one entry matches a given `(cmd_id, host_version)` pair;
/// when a service type declares overlapping version ranges for the same
/// `cmd_id` (a version-migration shim), the first matching entry in
/// declaration order wins, matching the original's "ties broken by
/// declaration order" rule.
pub struct DispatchTable {
    entries: &'static [DispatchEntry],
}

impl DispatchTable {
    pub const fn new(entries: &'static [DispatchEntry]) -> Self {
        Self { entries }
    }

    /// Finds the handler and its shape metadata for `cmd_id` applicable at
    /// `host_version`. Callers must run [`CommandMeta::validate`] against the
    /// returned metadata before invoking the handler.
    pub fn lookup(&self, cmd_id: u32, host_version: u32) -> Result<(HandlerFn, CommandMeta)> {
        self.entries
            .iter()
            .find(|e| e.matches(cmd_id, host_version))
            .map(|e| (e.handler, e.meta))
            .ok_or(DispatchError::UnknownCommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_handler(_ctx: &mut DispatchContext) -> Result<()> {
        Ok(())
    }

    #[test]
    fn lookup_finds_matching_version_range() {
        static TABLE: DispatchTable = DispatchTable::new(&[
            DispatchEntry::new(CommandMeta::new(1).version_range(0, 3), ok_handler),
            DispatchEntry::new(CommandMeta::new(1).version_range(4, u32::MAX), ok_handler),
        ]);
        assert!(TABLE.lookup(1, 2).is_ok());
        assert!(TABLE.lookup(1, 5).is_ok());
    }

    #[test]
    fn lookup_is_a_function_at_most_one_match_wins_first_declared() {
        // Two overlapping entries for the same cmd_id: declaration order
        // decides, not "most specific range" or any other tiebreak.
        fn handler_a(ctx: &mut DispatchContext) -> Result<()> {
            ctx.mark_tag(1);
            Ok(())
        }
        fn handler_b(ctx: &mut DispatchContext) -> Result<()> {
            ctx.mark_tag(2);
            Ok(())
        }
        static TABLE: DispatchTable = DispatchTable::new(&[
            DispatchEntry::new(CommandMeta::new(9), handler_a),
            DispatchEntry::new(CommandMeta::new(9), handler_b),
        ]);
        let (handler, _meta) = TABLE.lookup(9, 0).unwrap();
        let mut ctx = DispatchContext::for_test();
        handler(&mut ctx).unwrap();
        assert_eq!(ctx.tag(), Some(1));
    }

    #[test]
    fn unknown_command_rejected() {
        static TABLE: DispatchTable = DispatchTable::new(&[DispatchEntry::new(CommandMeta::new(1), ok_handler)]);
        assert_eq!(TABLE.lookup(2, 0).err(), Some(DispatchError::UnknownCommand));
    }
}
