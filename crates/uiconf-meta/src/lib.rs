//! Settings model and mode registry for uiconf.
//!
//! This crate holds the data every other uiconf crate builds on:
//!
//! - [`SettingValue`]: a literal JSON value or a [`Computed`] callable that is
//!   evaluated against the active platform each time it is read.
//! - [`Settings`] and [`UserConfig`]: flat key/value bundles, and the user
//!   override object with its per-platform sections.
//! - [`Platform`] and [`PlatformConfig`]: the contract a platform provider
//!   fulfils so the configuration store can query it.
//! - [`ModeRegistry`]: named visual modes (`ios`, `md`, `wp`) and their
//!   default settings.

pub mod error;
pub mod keys;
pub mod platform;
pub mod registry;
pub mod settings;
pub mod value;

pub use error::{Error, Result};
pub use platform::{Platform, PlatformConfig};
pub use registry::{BUILTIN_MODE_COUNT, ModeRegistry, builtin_modes};
pub use settings::{MODE_KEY, PLATFORMS_FIELD, Settings, UserConfig};
pub use value::{Computed, SettingValue};
