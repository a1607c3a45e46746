//! Server-side session storage and the session manager that owns it.
//!
//! Mirrors `sf::hipc::ServerSession`/`ServerSessionManager`
//! (`sf_hipc_server_session_manager.hpp`): a session owns either a single
//! service object or, after the client's "convert to domain" request, a
//! [`Domain`]; the manager is the single place new server handles (accepted
//! from a port, or minted for a freshly produced out-object) get registered
//! so the dispatch loop can look a session back up by its handle.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;

use nx_std_sync::Mutex;
use nx_svc::ipc::{
    self, AcceptSessionError, CloseHandleError, CreateSessionError, Handle, ServerHandle,
};

use crate::domain::Domain;
use crate::holder::ServiceObjectHolder;

/// What a [`Session`] is currently serving requests against.
enum SessionTarget {
    /// The plain (non-domain) case: every request is dispatched straight to
    /// this object.
    Object(ServiceObjectHolder),
    /// After a "convert to domain" control request: requests name a
    /// [`crate::domain::DomainObjectId`] resolved through this domain.
    Domain(Domain),
}

/// One server-side IPC session: the state the dispatch loop needs to
/// process requests arriving on a given [`ServerHandle`].
pub struct Session {
    target: Mutex<SessionTarget>,
    /// Present only for MITM sessions: the upstream handle a dispatcher may
    /// forward an unhandled (or every) request to. The dispatch contract is
    /// unchanged either way -- forwarding is purely an implementation choice
    /// the handler makes.
    forward_service: Option<Handle>,
}

impl Session {
    pub(crate) fn new(holder: ServiceObjectHolder, forward_service: Option<Handle>) -> Self {
        Self {
            target: Mutex::from(SessionTarget::Object(holder)),
            forward_service,
        }
    }

    /// The upstream handle to forward to, for a MITM session.
    pub fn forward_service(&self) -> Option<Handle> {
        self.forward_service
    }

    pub fn is_mitm(&self) -> bool {
        self.forward_service.is_some()
    }

    /// Promotes this session to a domain, per the client's "convert to
    /// domain" control request. The object previously served directly
    /// becomes domain object id 1 -- libnx/libstratosphere's own convention,
    /// since a freshly converted domain always has its original object as
    /// its first (and, until further out-objects arrive, only) member.
    pub fn convert_to_domain(&self) -> crate::domain::DomainObjectId {
        let mut target = self.target.lock();
        let holder = match &*target {
            SessionTarget::Object(holder) => holder.clone(),
            SessionTarget::Domain(_) => {
                // Already a domain: converting twice is a client bug, but
                // since nothing here can reject it mid-flight without a new
                // DispatchError variant not named by this crate's error
                // taxonomy, treat it as a no-op on an existing domain by
                // just returning its first entry.
                return crate::domain::DomainObjectId::from_raw(1);
            }
        };
        let domain = Domain::new();
        let id = domain.register(holder);
        *target = SessionTarget::Domain(domain);
        id
    }

    /// `true` once [`convert_to_domain`](Self::convert_to_domain) has run.
    pub fn is_domain(&self) -> bool {
        matches!(&*self.target.lock(), SessionTarget::Domain(_))
    }

    /// The object to dispatch a non-domain request against.
    pub fn object(&self) -> Option<ServiceObjectHolder> {
        match &*self.target.lock() {
            SessionTarget::Object(holder) => Some(holder.clone()),
            SessionTarget::Domain(_) => None,
        }
    }

    /// Resolves a domain-path request's target object.
    pub fn domain_object(&self, id: crate::domain::DomainObjectId) -> crate::error::Result<ServiceObjectHolder> {
        match &*self.target.lock() {
            SessionTarget::Domain(domain) => domain.get(id),
            SessionTarget::Object(_) => Err(crate::error::DispatchError::InvalidObjectId),
        }
    }

    /// Domain-control "Close": unregisters the object bound to `id`.
    /// `InvalidObjectId` if this session isn't (yet) a domain.
    pub fn domain_close(&self, id: crate::domain::DomainObjectId) -> crate::error::Result<()> {
        match &*self.target.lock() {
            SessionTarget::Domain(domain) => domain.close(id),
            SessionTarget::Object(_) => Err(crate::error::DispatchError::InvalidObjectId),
        }
    }

    /// Registers `holder` as a new domain member, returning its id. Only
    /// meaningful once this session is a domain; a non-domain session has
    /// no domain-object namespace to register into.
    pub fn domain_register(&self, holder: ServiceObjectHolder) -> Option<crate::domain::DomainObjectId> {
        match &*self.target.lock() {
            SessionTarget::Domain(domain) => Some(domain.register(holder)),
            SessionTarget::Object(_) => None,
        }
    }
}

/// Owns every server-side session this process is currently servicing,
/// keyed by the raw server handle value so the dispatch loop (which learns
/// about readiness via a multi-wait over those same handles) can look a
/// [`Session`] back up in O(log n).
pub struct ServerSessionManager {
    sessions: Mutex<BTreeMap<u32, Rc<Session>>>,
}

impl ServerSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::from(BTreeMap::new()),
        }
    }

    /// Registers a freshly accepted or created server handle, attaching
    /// `holder` as the session's initial (non-domain) target.
    pub fn register_session(&self, handle: ServerHandle, holder: ServiceObjectHolder) -> Rc<Session> {
        let session = Rc::new(Session::new(holder, None));
        self.sessions.lock().insert(handle.to_raw(), session.clone());
        session
    }

    /// As [`register_session`](Self::register_session), but additionally
    /// records the upstream handle a MITM dispatcher may forward to.
    pub fn register_mitm_session(&self, handle: ServerHandle, holder: ServiceObjectHolder, forward_service: Handle) -> Rc<Session> {
        let session = Rc::new(Session::new(holder, Some(forward_service)));
        self.sessions.lock().insert(handle.to_raw(), session.clone());
        session
    }

    /// Accepts a pending connection on `port` and registers it with
    /// `holder` as the session's initial object, in one step.
    pub fn accept(&self, port: ServerHandle, holder: ServiceObjectHolder) -> Result<(ServerHandle, Rc<Session>), AcceptSessionError> {
        let handle = ipc::accept_session(port)?;
        let session = self.register_session(handle, holder);
        Ok((handle, session))
    }

    /// Looks up the [`Session`] registered under `handle`, if any.
    pub fn session(&self, handle: ServerHandle) -> Option<Rc<Session>> {
        self.sessions.lock().get(&handle.to_raw()).cloned()
    }

    /// Unregisters and closes a server handle -- the session teardown path
    /// for a client disconnect or an explicit "Close" IPC message type.
    pub fn close(&self, handle: ServerHandle) -> Result<(), CloseHandleError> {
        self.sessions.lock().remove(&handle.to_raw());
        ipc::close_server_handle(handle)
    }

    /// Implements the out-object half of server-side object lifecycle: mints
    /// a fresh session pair, registers the server half under this manager
    /// with `holder` as its object, and returns the client half for the
    /// caller to write into a move-handle slot.
    pub fn create_out_object_session(&self, holder: ServiceObjectHolder) -> Result<Handle, CreateSessionError> {
        let (server, client) = ipc::create_session(false)?;
        self.register_session(server, holder);
        Ok(client)
    }

    /// Number of sessions currently registered.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ServerSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_table::{DispatchEntry, DispatchTable};
    use crate::holder::ServiceObject;
    use core::any::Any;

    static TABLE: DispatchTable = DispatchTable::new(&[DispatchEntry::always(0)]);

    struct Obj(u32);
    impl ServiceObject for Obj {
        fn dispatch_table(&self) -> &'static DispatchTable {
            &TABLE
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn new_session_serves_its_object_directly() {
        let session = Session::new(ServiceObjectHolder::new(Obj(1)), None);
        assert!(!session.is_domain());
        let holder = session.object().unwrap();
        assert_eq!(holder.downcast::<Obj>(&TABLE).unwrap().0, 1);
    }

    #[test]
    fn convert_to_domain_preserves_original_object_as_id_one() {
        let session = Session::new(ServiceObjectHolder::new(Obj(7)), None);
        let id = session.convert_to_domain();
        assert!(session.is_domain());
        assert_eq!(id, crate::domain::DomainObjectId::from_raw(1));
        let holder = session.domain_object(id).unwrap();
        assert_eq!(holder.downcast::<Obj>(&TABLE).unwrap().0, 7);
    }

    #[test]
    fn domain_register_and_close_round_trip() {
        let session = Session::new(ServiceObjectHolder::new(Obj(1)), None);
        session.convert_to_domain();
        let id = session.domain_register(ServiceObjectHolder::new(Obj(2))).unwrap();
        assert_eq!(session.domain_object(id).unwrap().downcast::<Obj>(&TABLE).unwrap().0, 2);
        session.domain_close(id).unwrap();
        assert!(session.domain_object(id).is_err());
    }

    #[test]
    fn domain_operations_rejected_on_non_domain_session() {
        let session = Session::new(ServiceObjectHolder::new(Obj(1)), None);
        assert!(session.domain_register(ServiceObjectHolder::new(Obj(2))).is_none());
        assert!(session.domain_object(crate::domain::DomainObjectId::from_raw(1)).is_err());
    }

    #[test]
    fn mitm_session_carries_forward_handle() {
        // SAFETY: test-only, the handle value is never used for a real syscall.
        let forward = unsafe { Handle::from_raw(0x1234) };
        let session = Session::new(ServiceObjectHolder::new(Obj(1)), Some(forward));
        assert!(session.is_mitm());
        assert_eq!(session.forward_service(), Some(forward));
    }
}
