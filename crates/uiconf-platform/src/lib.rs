//! Platform providers for uiconf.
//!
//! Platform *detection* lives outside this workspace. This crate supplies a
//! [`StaticPlatform`] that is told which platforms are active, what defaults
//! each one carries and what the page URL looked like, plus the built-in
//! platform default table.

pub mod builtins;
pub mod error;
pub mod query;
pub mod static_platform;

pub use builtins::{BUILTIN_PLATFORM_COUNT, builtin_platform_configs};
pub use error::{Error, Result};
pub use query::QueryParams;
pub use static_platform::{StaticPlatform, StaticPlatformBuilder};
