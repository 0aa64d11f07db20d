//! Mode registry
//!
//! Maps mode names (`ios`, `md`, `wp`, or anything a caller registers) to the
//! default settings that mode contributes during resolution.

mod builtins;
mod store;

pub use builtins::{BUILTIN_MODE_COUNT, builtin_modes};
pub use store::ModeRegistry;
