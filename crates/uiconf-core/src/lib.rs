//! Layered runtime configuration for a platform-aware UI toolkit
//!
//! The [`Config`] store answers "what is the value of `key` right now?" by
//! checking a URL override and then six configured tiers, caching the winner
//! per key:
//!
//! 1. **URL override** - `?vm<key>=...` on the page URL, absolute priority
//! 2. **User platform value** - `platforms.<id>.<key>` in the user config
//! 3. **User default value** - top-level `<key>` in the user config
//! 4. **User platform mode** - the mode named by `platforms.<id>.mode`
//! 5. **User default mode** - the mode named by the top-level `mode`
//! 6. **Platform value** - the platform provider's defaults for `<id>`
//! 7. **Platform mode** - the mode named in those platform defaults
//!
//! For sources iterated per active platform, the most specific platform wins.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use uiconf_core::{build_config, Platform};
//! use uiconf_core::meta::UserConfig;
//! # use uiconf_core::meta::PlatformConfig;
//! # struct Ios;
//! # impl Platform for Ios {
//! #     fn platforms(&self) -> Vec<String> { vec!["mobile".into(), "ios".into()] }
//! #     fn platform_config(&self, _: &str) -> Option<PlatformConfig> { None }
//! #     fn query_param(&self, _: &str) -> Option<String> { None }
//! # }
//!
//! let user = UserConfig::new()
//!     .with("tabsPlacement", "bottom")
//!     .with_platform_value("ios", "tabsPlacement", "top");
//!
//! let mut config = build_config(user, Some(Arc::new(Ios)));
//! assert_eq!(config.get("tabsPlacement").unwrap(), "top");
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;

pub use uiconf_meta as meta;

pub use bootstrap::{AppContext, build_config, global_config, setup_config};
pub use config::{Config, ConfigHandle, URL_CONFIG_PREFIX};
pub use error::{Error, Result};
pub use uiconf_meta::{Computed, ModeRegistry, Platform, SettingValue, Settings, UserConfig};
