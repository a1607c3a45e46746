//! IPC dispatch core: converts a reception on a server session into a
//! dispatched method call (direct, or domain-resolved) or a domain-control
//! operation, and assembles the reply.
//!
//! This crate deliberately stops short of raw HIPC/CMIF wire marshaling --
//! that lives in [`nx_sf::hipc`] and [`nx_sf::cmif`], which already parse a
//! reception into a [`nx_sf::hipc::ParsedRequest`] / CMIF in-header and
//! resolve buffer descriptors into flat pointers. What starts here is
//! everything downstream of that: routing a `(cmd_id, host_version)` pair to
//! a handler through a [`DispatchTable`], resolving the acting object
//! through a [`Session`] (directly, or via a [`Domain`]), and turning the
//! handler's output into domain-object ids or freshly minted session handles
//! for the reply.
//!
//! Per the Design Notes' suggested re-architecture, command marshaling is a
//! runtime data-driven affair ([`command::CommandMeta`] plus
//! [`context::DispatchContext`]) rather than per-signature generated code --
//! the hot path is bounded by at most 32 arguments, so a single interpreter
//! costs nothing measurable and is far less code to keep correct.

#![no_std]

extern crate alloc;
extern crate nx_panic_handler;

pub mod command;
pub mod context;
pub mod dispatch_table;
pub mod domain;
pub mod error;
pub mod holder;
pub mod session;

pub use command::CommandMeta;
pub use context::{DispatchContext, InHeaderInfo, PointerBufferArena, ResolvedBuffer};
pub use dispatch_table::{DispatchEntry, DispatchTable, HandlerFn};
pub use domain::{Domain, DomainObjectId};
pub use error::{DispatchError, Result};
pub use holder::{ServiceObject, ServiceObjectHolder};
pub use session::{ServerSessionManager, Session};

use alloc::vec::Vec;

use nx_sf::cmif::DomainRequestType;
use nx_sf::hipc::Metadata;
use nx_svc::ipc::Handle;

/// Hard limit on combined out-handles (out-objects + plain out-handles) a
/// single reply may carry.
const MAX_OUT_HANDLES: usize = 8;

/// A decoded domain-header request, naming which [`DomainObjectId`] it
/// targets and what to do with it.
///
/// Decoded against the raw values [`nx_sf::cmif::DomainRequestType`] assigns
/// on the client side (`SendMessage = 1`, `Close = 2`) rather than the `0`/
/// `1` the domain-control narrative alone might suggest -- the client-side
/// enum, which real requests are built from, is the ground truth for what a
/// server actually receives on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRequest {
    /// Dispatch a method call against the named domain object.
    Method(DomainObjectId),
    /// Unregister the named domain object; no further dispatch.
    Close(DomainObjectId),
}

/// Decodes a domain header's `request_type` byte and `object_id` field into
/// a [`DomainRequest`]. Any value other than `SendMessage`/`Close` --
/// including `Invalid` (`0`) -- is an unrecognized domain-control opcode:
/// callers must reply `UnknownCommand` rather than fail-fatal.
pub fn decode_domain_request(request_type: u8, object_id: u32) -> Result<DomainRequest> {
    let id = DomainObjectId::from_raw(object_id);
    if request_type == DomainRequestType::SendMessage as u8 {
        Ok(DomainRequest::Method(id))
    } else if request_type == DomainRequestType::Close as u8 {
        Ok(DomainRequest::Close(id))
    } else {
        Err(DispatchError::UnknownCommand)
    }
}

/// The HIPC `Control`-type sub-commands a session-manager recognizes.
/// `ConvertToDomain` is implemented at full fidelity; the rest are
/// recognized only -- a client probing for them gets a clean
/// `UnknownCommand` rather than a protocol violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    ConvertToDomain,
    CopyFromDomain,
    CloneObject,
    QueryPointerBufferSize,
    CloneObjectEx,
}

/// Decodes a `Control`-type message's sub-command word, per libnx's
/// `hipcMakeRequestInline`/domain-conversion numbering.
pub fn decode_control_request(sub_command: u32) -> Result<ControlRequest> {
    match sub_command {
        0 => Ok(ControlRequest::ConvertToDomain),
        1 => Ok(ControlRequest::CopyFromDomain),
        2 => Ok(ControlRequest::CloneObject),
        3 => Ok(ControlRequest::QueryPointerBufferSize),
        4 => Ok(ControlRequest::CloneObjectEx),
        _ => Err(DispatchError::UnknownCommand),
    }
}

/// Runs a decoded [`ControlRequest`] against `session`. Only
/// `ConvertToDomain` has an effect; every other recognized-but-unimplemented
/// control op reports `UnknownCommand`.
pub fn process_control_request(session: &Session, request: ControlRequest) -> Result<DomainObjectId> {
    match request {
        ControlRequest::ConvertToDomain => Ok(session.convert_to_domain()),
        _ => Err(DispatchError::UnknownCommand),
    }
}

/// Handles produced by a request whose handler populated
/// [`DispatchContext::out_objects`].
#[derive(Debug, Default)]
pub struct ReplyObjects {
    /// DomainObjectIds newly bound within the domain -- populated only when
    /// the request was a domain-path method call.
    pub domain_object_ids: Vec<DomainObjectId>,
    /// Client-side session handles minted for the non-domain path, to be
    /// written into reply move-handle slots.
    pub out_object_handles: Vec<Handle>,
}

/// Runs the "select entry" / "validate shape" / "invoke" / "produce reply"
/// steps of the processing algorithm for one request already resolved down
/// to a populated [`DispatchContext`] (buffer and in-object resolution
/// already done by the caller, per this crate's split with [`nx_sf::hipc`]).
/// `meta` is the parsed HIPC metadata for the same request, consulted only
/// for the buffer-count and send-pid checks a [`CommandMeta`] can't derive
/// from the context alone.
///
/// `domain_request` is `Some` for a request that arrived under a domain
/// header; `None` for a plain direct-session request. A `Close` domain
/// request never reaches a handler -- it is fully handled here and returns
/// an empty [`ReplyObjects`].
pub fn process_request(
    sessions: &ServerSessionManager,
    session: &Session,
    host_version: u32,
    meta: &Metadata,
    domain_request: Option<DomainRequest>,
    ctx: &mut DispatchContext,
) -> Result<ReplyObjects> {
    if let Some(DomainRequest::Close(id)) = domain_request {
        session.domain_close(id)?;
        return Ok(ReplyObjects::default());
    }

    let target = match domain_request {
        None => session.object().ok_or(DispatchError::InvalidRequest)?,
        Some(DomainRequest::Method(id)) => session.domain_object(id)?,
        Some(DomainRequest::Close(_)) => unreachable!("handled above"),
    };

    let (handler, cmd_meta) = target.dispatch_table().lookup(ctx.in_header.cmd_id, host_version)?;
    cmd_meta.validate(
        meta,
        ctx.in_data.len(),
        ctx.in_objects.len(),
        ctx.copy_handles_in.len(),
        ctx.move_handles_in.len(),
    )?;
    handler(ctx)?;

    let out_objects = core::mem::take(&mut ctx.out_objects);
    if ctx.move_handles_out.len() + out_objects.len() > MAX_OUT_HANDLES {
        return Err(DispatchError::TooManyOutHandles);
    }

    let mut reply = ReplyObjects::default();
    for holder in out_objects {
        match domain_request {
            Some(DomainRequest::Method(_)) => {
                let id = session
                    .domain_register(holder)
                    .expect("domain-path out-object on a session already confirmed to be a domain");
                reply.domain_object_ids.push(id);
            }
            None => {
                let handle = sessions
                    .create_out_object_session(holder)
                    .map_err(|_| DispatchError::TooManyOutHandles)?;
                reply.out_object_handles.push(handle);
            }
            Some(DomainRequest::Close(_)) => unreachable!("handled above"),
        }
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_table::{DispatchEntry, DispatchTable};
    use crate::holder::ServiceObject;
    use core::any::Any;

    fn echo_handler(ctx: &mut DispatchContext) -> Result<()> {
        let v: u32 = ctx.read_in_data(0)?;
        ctx.write_out_data(0, v)
    }

    static ECHO_TABLE: DispatchTable =
        DispatchTable::new(&[DispatchEntry::new(CommandMeta::new(1).in_data_size(4).out_data_size(4), echo_handler)]);

    struct Echo;
    impl ServiceObject for Echo {
        fn dispatch_table(&self) -> &'static DispatchTable {
            &ECHO_TABLE
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn request_ctx(cmd_id: u32) -> DispatchContext {
        let mut ctx = DispatchContext::new(
            InHeaderInfo {
                version: 1,
                cmd_id,
                token: 0,
            },
            alloc::vec![0u8; 4],
            4,
            PointerBufferArena::empty(),
        );
        ctx.write_out_data::<u32>(0, 0).unwrap();
        ctx
    }

    fn request_meta() -> Metadata {
        Metadata::default()
    }

    #[test]
    fn decode_domain_request_recognizes_client_enum_values() {
        assert_eq!(
            decode_domain_request(DomainRequestType::SendMessage as u8, 3),
            Ok(DomainRequest::Method(DomainObjectId::from_raw(3)))
        );
        assert_eq!(
            decode_domain_request(DomainRequestType::Close as u8, 3),
            Ok(DomainRequest::Close(DomainObjectId::from_raw(3)))
        );
        assert_eq!(
            decode_domain_request(DomainRequestType::Invalid as u8, 0),
            Err(DispatchError::UnknownCommand)
        );
    }

    #[test]
    fn direct_session_dispatches_to_its_object() {
        let sessions = ServerSessionManager::new();
        let session = Session::new(ServiceObjectHolder::new(Echo), None);
        let mut ctx = request_ctx(1);
        let reply = process_request(&sessions, &session, 0, &request_meta(), None, &mut ctx).unwrap();
        assert!(reply.domain_object_ids.is_empty());
        assert!(reply.out_object_handles.is_empty());
    }

    #[test]
    fn unknown_command_is_reported_without_side_effects() {
        let sessions = ServerSessionManager::new();
        let session = Session::new(ServiceObjectHolder::new(Echo), None);
        let mut ctx = request_ctx(99);
        assert_eq!(
            process_request(&sessions, &session, 0, &request_meta(), None, &mut ctx),
            Err(DispatchError::UnknownCommand)
        );
    }

    #[test]
    fn domain_method_request_dispatches_to_named_object() {
        let sessions = ServerSessionManager::new();
        let session = Session::new(ServiceObjectHolder::new(Echo), None);
        let id = session.convert_to_domain();
        let mut ctx = request_ctx(1);
        let result = process_request(&sessions, &session, 0, &request_meta(), Some(DomainRequest::Method(id)), &mut ctx);
        assert!(result.is_ok());
    }

    #[test]
    fn domain_close_unregisters_without_dispatching() {
        let sessions = ServerSessionManager::new();
        let session = Session::new(ServiceObjectHolder::new(Echo), None);
        let id = session.convert_to_domain();
        let mut ctx = request_ctx(1);
        let reply = process_request(&sessions, &session, 0, &request_meta(), Some(DomainRequest::Close(id)), &mut ctx).unwrap();
        assert!(reply.domain_object_ids.is_empty());
        assert!(session.domain_object(id).is_err());
    }

    #[test]
    fn convert_to_domain_control_request_assigns_id_one() {
        let session = Session::new(ServiceObjectHolder::new(Echo), None);
        let id = process_control_request(&session, ControlRequest::ConvertToDomain).unwrap();
        assert_eq!(id, DomainObjectId::from_raw(1));
        assert!(session.is_domain());
    }

    #[test]
    fn unimplemented_control_requests_report_unknown_command() {
        let session = Session::new(ServiceObjectHolder::new(Echo), None);
        assert_eq!(
            process_control_request(&session, ControlRequest::QueryPointerBufferSize),
            Err(DispatchError::UnknownCommand)
        );
    }
}
