//! Reference-counted, type-tagged service object handles.
//!
//! The original `ServiceObjectHolder` pairs a `void*`-ish intrusive-refcounted
//! pointer with the dispatch table it was constructed against, so a caller
//! that expects a specific service type can downcast safely by comparing
//! table pointers. Rust gives us `dyn Any` for the downcast and `Rc` for the
//! refcounting, so the tag collapses to "the `&'static DispatchTable` this
//! object was registered with" -- still a pointer comparison, just one we
//! never have to trust blindly because `Any::downcast_ref` re-checks the
//! concrete type too.

use alloc::rc::Rc;
use core::any::Any;

use crate::dispatch_table::DispatchTable;

/// A polymorphic service object exposing a fixed, compile-time-known set of
/// commands (its [`DispatchTable`]).
///
/// Implementors are ordinary structs; the trait exists only so a
/// [`ServiceObjectHolder`] can store one behind `dyn ServiceObject` and so
/// `downcast` has something to call `Any::downcast_ref` through.
pub trait ServiceObject: Any {
    /// The dispatch table routing commands to this object's methods.
    fn dispatch_table(&self) -> &'static DispatchTable;

    fn as_any(&self) -> &dyn Any;
}

/// A reference-counted handle to a [`ServiceObject`], tagged with the
/// dispatch table it was constructed against.
///
/// The tag is what the original calls the object's "type"; two holders with
/// the same `&'static DispatchTable` pointer are guaranteed to wrap the same
/// concrete Rust type, since each service type owns exactly one static table.
#[derive(Clone)]
pub struct ServiceObjectHolder {
    object: Rc<dyn ServiceObject>,
}

impl ServiceObjectHolder {
    pub fn new<T: ServiceObject + 'static>(object: T) -> Self {
        Self {
            object: Rc::new(object),
        }
    }

    /// The dispatch table identifying this holder's runtime type.
    pub fn dispatch_table(&self) -> &'static DispatchTable {
        self.object.dispatch_table()
    }

    /// Borrows the held object.
    pub fn object(&self) -> &Rc<dyn ServiceObject> {
        &self.object
    }

    /// Downcasts to a concrete service type, comparing dispatch tables
    /// first (cheap pointer compare) before falling back to `Any`'s runtime
    /// type check, which catches the (disallowed, but not `unsafe`-reachable)
    /// case of two distinct types sharing a table by mistake.
    pub fn downcast<T: ServiceObject + 'static>(&self, expected: &'static DispatchTable) -> Option<&T> {
        if !core::ptr::eq(self.dispatch_table(), expected) {
            return None;
        }
        self.object.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_table::{DispatchEntry, DispatchTable};

    static TABLE_A: DispatchTable = DispatchTable::new(&[DispatchEntry::always(0)]);
    static TABLE_B: DispatchTable = DispatchTable::new(&[DispatchEntry::always(0)]);

    struct ObjA(u32);
    impl ServiceObject for ObjA {
        fn dispatch_table(&self) -> &'static DispatchTable {
            &TABLE_A
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct ObjB;
    impl ServiceObject for ObjB {
        fn dispatch_table(&self) -> &'static DispatchTable {
            &TABLE_B
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn downcast_succeeds_for_matching_table() {
        let holder = ServiceObjectHolder::new(ObjA(42));
        let got = holder.downcast::<ObjA>(&TABLE_A).unwrap();
        assert_eq!(got.0, 42);
    }

    #[test]
    fn downcast_fails_for_mismatched_table() {
        let holder = ServiceObjectHolder::new(ObjB);
        assert!(holder.downcast::<ObjA>(&TABLE_A).is_none());
    }

    #[test]
    fn clone_shares_the_same_object() {
        let holder = ServiceObjectHolder::new(ObjA(7));
        let cloned = holder.clone();
        assert!(Rc::ptr_eq(holder.object(), cloned.object()));
    }
}
