//! Per-command request-shape metadata, consulted by [`crate::dispatch_table`]
//! before a handler ever sees a request.
//!
//! The original dispatch interpreter (`sf_cmif_service_dispatch.hpp`) walks a
//! compile-time-generated `CommandMeta` template per argument to marshal
//! buffers, handles and raw fields one at a time. Without derive-macro
//! codegen that shape doesn't translate idiomatically; instead each command
//! carries a small, data-driven [`CommandMeta`] used only to validate the
//! request's *shape* (counts and sizes), and the handler itself pulls typed
//! values out of a [`crate::context::DispatchContext`] directly -- the same
//! split nx-sf's client-side [`nx_sf::cmif::RequestFormat`] makes between
//! layout description and the actual field writers.

use nx_sf::hipc::Metadata;

use crate::error::{DispatchError, Result};

/// The request shape a single command ID expects, independent of host
/// version. Built once per handler and stored in a [`crate::dispatch_table::DispatchTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMeta {
    pub cmd_id: u32,
    /// Host (client) version range this entry applies to, inclusive.
    /// `max_host_version == u32::MAX` means unbounded.
    pub min_host_version: u32,
    pub max_host_version: u32,
    /// Exact size in bytes of the fixed in-data following the CMIF in-header.
    pub in_data_size: usize,
    /// Exact size in bytes of the fixed out-data following the CMIF out-header.
    pub out_data_size: usize,
    pub num_send_statics: u8,
    pub num_send_buffers: u8,
    pub num_recv_buffers: u8,
    pub num_exch_buffers: u8,
    /// Type-C receive list entries this command writes into (out pointers).
    pub num_out_pointers: u8,
    /// In-objects this command expects as domain object IDs.
    pub num_in_objects: u8,
    /// Out-objects the handler produces (new domain entries or sessions).
    pub num_out_objects: u8,
    pub send_pid: bool,
    pub num_copy_handles: u8,
    pub num_move_handles: u8,
}

impl CommandMeta {
    pub const fn new(cmd_id: u32) -> Self {
        Self {
            cmd_id,
            min_host_version: 0,
            max_host_version: u32::MAX,
            in_data_size: 0,
            out_data_size: 0,
            num_send_statics: 0,
            num_send_buffers: 0,
            num_recv_buffers: 0,
            num_exch_buffers: 0,
            num_out_pointers: 0,
            num_in_objects: 0,
            num_out_objects: 0,
            send_pid: false,
            num_copy_handles: 0,
            num_move_handles: 0,
        }
    }

    pub const fn version_range(mut self, min: u32, max: u32) -> Self {
        self.min_host_version = min;
        self.max_host_version = max;
        self
    }

    pub const fn in_data_size(mut self, size: usize) -> Self {
        self.in_data_size = size;
        self
    }

    pub const fn out_data_size(mut self, size: usize) -> Self {
        self.out_data_size = size;
        self
    }

    pub const fn buffers(mut self, send: u8, recv: u8, exch: u8) -> Self {
        self.num_send_buffers = send;
        self.num_recv_buffers = recv;
        self.num_exch_buffers = exch;
        self
    }

    pub const fn in_pointers(mut self, count: u8) -> Self {
        self.num_send_statics = count;
        self
    }

    pub const fn out_pointers(mut self, count: u8) -> Self {
        self.num_out_pointers = count;
        self
    }

    pub const fn objects(mut self, in_objects: u8, out_objects: u8) -> Self {
        self.num_in_objects = in_objects;
        self.num_out_objects = out_objects;
        self
    }

    pub const fn send_pid(mut self) -> Self {
        self.send_pid = true;
        self
    }

    pub const fn handles(mut self, copy: u8, move_: u8) -> Self {
        self.num_copy_handles = copy;
        self.num_move_handles = move_;
        self
    }

    pub fn matches_host_version(&self, host_version: u32) -> bool {
        host_version >= self.min_host_version && host_version <= self.max_host_version
    }

    /// Validates the request's shape as reported by the parsed HIPC metadata,
    /// the CMIF payload size, and the context's resolved in-objects/handles,
    /// short of reading any of the actual data. Every count here must match
    /// the compile-time shape exactly; a request offering more or fewer
    /// buffers/handles/objects than the command declares is rejected either
    /// way.
    pub fn validate(
        &self,
        meta: &Metadata,
        in_data_len: usize,
        in_objects_len: usize,
        copy_handles_len: usize,
        move_handles_len: usize,
    ) -> Result<()> {
        if in_data_len < self.in_data_size {
            return Err(DispatchError::InvalidRequest);
        }
        if meta.num_send_statics != self.num_send_statics as usize
            || meta.num_send_buffers != self.num_send_buffers as usize
            || meta.num_recv_buffers != self.num_recv_buffers as usize
            || meta.num_exch_buffers != self.num_exch_buffers as usize
        {
            return Err(DispatchError::InvalidRequest);
        }
        if in_objects_len != self.num_in_objects as usize {
            return Err(DispatchError::InvalidRequest);
        }
        if copy_handles_len != self.num_copy_handles as usize || move_handles_len != self.num_move_handles as usize {
            return Err(DispatchError::InvalidRequest);
        }
        if self.send_pid && !meta.send_pid {
            return Err(DispatchError::InvalidRequest);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_sets_every_field() {
        let meta = CommandMeta::new(7)
            .version_range(1, 3)
            .in_data_size(8)
            .out_data_size(4)
            .buffers(1, 1, 0)
            .in_pointers(1)
            .out_pointers(1)
            .objects(1, 2)
            .send_pid();
        assert_eq!(meta.cmd_id, 7);
        assert!(meta.matches_host_version(2));
        assert!(!meta.matches_host_version(4));
        assert_eq!(meta.num_out_objects, 2);
        assert!(meta.send_pid);
    }

    #[test]
    fn short_in_data_is_rejected() {
        let meta = CommandMeta::new(1).in_data_size(16);
        let hipc_meta = Metadata::default();
        assert_eq!(
            meta.validate(&hipc_meta, 8, 0, 0, 0),
            Err(DispatchError::InvalidRequest)
        );
    }

    #[test]
    fn wrong_in_object_count_is_rejected() {
        let meta = CommandMeta::new(1).objects(1, 0);
        let hipc_meta = Metadata::default();
        assert_eq!(
            meta.validate(&hipc_meta, 0, 0, 0, 0),
            Err(DispatchError::InvalidRequest)
        );
        assert!(meta.validate(&hipc_meta, 0, 1, 0, 0).is_ok());
    }

    #[test]
    fn mismatched_buffer_count_is_rejected_either_direction() {
        let meta = CommandMeta::new(1).buffers(1, 0, 0);
        let mut hipc_meta = Metadata::default();
        assert_eq!(
            meta.validate(&hipc_meta, 0, 0, 0, 0),
            Err(DispatchError::InvalidRequest)
        );
        hipc_meta.num_send_buffers = 2;
        assert_eq!(
            meta.validate(&hipc_meta, 0, 0, 0, 0),
            Err(DispatchError::InvalidRequest)
        );
        hipc_meta.num_send_buffers = 1;
        assert!(meta.validate(&hipc_meta, 0, 0, 0, 0).is_ok());
    }

    #[test]
    fn handle_count_mismatch_is_rejected() {
        let meta = CommandMeta::new(1).handles(1, 2);
        let hipc_meta = Metadata::default();
        assert_eq!(
            meta.validate(&hipc_meta, 0, 0, 0, 2),
            Err(DispatchError::InvalidRequest)
        );
        assert_eq!(
            meta.validate(&hipc_meta, 0, 0, 1, 1),
            Err(DispatchError::InvalidRequest)
        );
        assert!(meta.validate(&hipc_meta, 0, 0, 1, 2).is_ok());
    }
}
