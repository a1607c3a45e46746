//! Horizon OS kernel error codes and the modules that raise them.
//!
//! Ref: <https://switchbrew.org/wiki/Error_codes>

pub use crate::result::{Error, ResultCode};

/// Converts a value into a raw 13-bit description for use with [`ResultCode::from_parts`].
pub trait IntoDescription {
    fn into_value(self) -> u32;
}

impl IntoDescription for u32 {
    #[inline]
    fn into_value(self) -> u32 {
        self
    }
}

impl IntoDescription for KernelError {
    #[inline]
    fn into_value(self) -> u32 {
        self as u32
    }
}

/// Converts a typed error back into a raw result code, for implementers that need to hand a
/// result back across an FFI boundary.
pub trait ToRawResultCode {
    fn to_rc(self) -> ResultCode;
}

/// Identifies the subsystem that produced a [`Error`].
///
/// Unlike the kernel's own module IDs (a 9-bit field with no guarantee every value is in use),
/// this is kept open-ended via [`Module::Unknown`] rather than an exhaustive enum, so decoding an
/// error from a module this crate doesn't know about is never undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Kernel,
    Fs,
    Os,
    Htcs,
    Ncm,
    Dd,
    Dmnt,
    Loader,
    Cmif,
    Hipc,
    Pm,
    Ldr,
    Sf,
    Spl,
    /// A module ID this crate has no name for.
    Unknown(u32),
}

impl Module {
    pub const fn from_raw(value: u32) -> Self {
        match value {
            1 => Module::Kernel,
            2 => Module::Fs,
            3 => Module::Os,
            9 => Module::Htcs,
            15 => Module::Ncm,
            23 => Module::Dd,
            27 => Module::Dmnt,
            28 => Module::Loader,
            47 => Module::Cmif,
            // Hipc/Sf/Pm/Ldr/Spl do not have stable kernel-assigned module numbers; values here
            // match the ones this workspace's services actually construct locally.
            200 => Module::Hipc,
            201 => Module::Pm,
            202 => Module::Ldr,
            203 => Module::Sf,
            204 => Module::Spl,
            other => Module::Unknown(other),
        }
    }

    pub const fn to_raw(self) -> u32 {
        match self {
            Module::Kernel => 1,
            Module::Fs => 2,
            Module::Os => 3,
            Module::Htcs => 9,
            Module::Ncm => 15,
            Module::Dd => 23,
            Module::Dmnt => 27,
            Module::Loader => 28,
            Module::Cmif => 47,
            Module::Hipc => 200,
            Module::Pm => 201,
            Module::Ldr => 202,
            Module::Sf => 203,
            Module::Spl => 204,
            Module::Unknown(value) => value,
        }
    }
}

/// Kernel (module 1) result descriptions, as returned by SVCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum KernelError {
    OutOfSessions = 7,
    InvalidArgument = 14,
    NotImplemented = 33,
    StopProcessingException = 54,
    NoSynchronizationObject = 57,
    TerminationRequested = 59,
    NoEvent = 70,
    InvalidSize = 101,
    InvalidAddress = 102,
    OutOfResource = 103,
    OutOfMemory = 104,
    OutOfHandles = 105,
    InvalidCurrentMemory = 106,
    InvalidNewMemoryPermission = 108,
    InvalidMemoryRegion = 110,
    InvalidPriority = 112,
    InvalidCoreId = 113,
    InvalidHandle = 114,
    InvalidPointer = 115,
    InvalidCombination = 116,
    TimedOut = 117,
    Cancelled = 118,
    OutOfRange = 119,
    InvalidEnumValue = 120,
    NotFound = 121,
    Busy = 122,
    SessionClosed = 123,
    NotHandled = 124,
    InvalidState = 125,
    ReservedUsed = 126,
    NotSupported = 127,
    LimitReached = 132,
    ReceiveListBroken = 258,
    OutOfAddressSpace = 259,
    MessageTooLarge = 260,
}

impl ToRawResultCode for KernelError {
    fn to_rc(self) -> ResultCode {
        crate::result::raw::ResultCode::from_parts(Module::Kernel, self).to_raw()
    }
}

impl PartialEq<u32> for KernelError {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        *self as u32 == *other
    }
}

impl PartialEq<KernelError> for u32 {
    #[inline]
    fn eq(&self, other: &KernelError) -> bool {
        *self == *other as u32
    }
}
