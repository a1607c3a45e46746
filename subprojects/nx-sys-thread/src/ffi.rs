//! FFI bindings for the `nx-sys-thread` crate

mod sleep;
mod thread_activity;
mod thread_context;
mod thread_info;
mod thread_slots;
mod tls;
