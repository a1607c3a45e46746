//! Thread Implementation

#[allow(dead_code)] // TODO: Remove this once the module is used
mod list;

mod activity;
mod context;
mod info;
mod sleep;
mod slots;
mod wait;

pub use activity::*;
pub use context::*;
pub use info::*;
pub use sleep::*;
pub use slots::*;
pub use wait::*;
