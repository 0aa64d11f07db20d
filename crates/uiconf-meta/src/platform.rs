//! Platform provider contract
//!
//! The configuration store never detects platforms itself. It asks a
//! [`Platform`] implementation which platforms are active, what defaults each
//! of them carries, and whether the page URL holds an override.

use crate::settings::Settings;

/// Default configuration attached to a single platform identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformConfig {
    /// Platform default settings. The `mode` key names the platform's mode.
    pub settings: Settings,
}

impl PlatformConfig {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The mode this platform defaults to, if any.
    pub fn mode(&self) -> Option<&str> {
        self.settings.mode()
    }
}

impl From<Settings> for PlatformConfig {
    fn from(settings: Settings) -> Self {
        Self::new(settings)
    }
}

/// A source of platform information for configuration resolution.
///
/// Implementations must be cheap to query; the store calls into them on every
/// cache miss.
pub trait Platform: Send + Sync {
    /// Active platform identifiers, most general first.
    ///
    /// For example `["mobile", "ios"]`: later entries are more specific and
    /// win over earlier ones during resolution.
    fn platforms(&self) -> Vec<String>;

    /// Default configuration registered for `id`, if any.
    fn platform_config(&self, id: &str) -> Option<PlatformConfig>;

    /// Look up a URL query parameter by name.
    fn query_param(&self, name: &str) -> Option<String>;

    /// The most specific active platform.
    fn name(&self) -> Option<String> {
        self.platforms().pop()
    }

    /// Whether `id` is among the active platforms.
    fn is(&self, id: &str) -> bool {
        self.platforms().iter().any(|p| p == id)
    }
}
