//! Store construction and the process-wide access point
//!
//! Applications call [`setup_config`] (or [`AppContext::bootstrap`]) once at
//! startup. The first call builds the store, registers the built-in modes and
//! installs it globally; every later call gets that same store back.

use std::fmt;
use std::sync::{Arc, OnceLock};

use uiconf_meta::{ModeRegistry, Platform, UserConfig};

use crate::config::{Config, ConfigHandle};

static GLOBAL_CONFIG: OnceLock<ConfigHandle> = OnceLock::new();

/// Build a standalone store with the built-in modes registered.
///
/// Nothing global is touched; useful for tests and embedding.
pub fn build_config(user: UserConfig, platform: Option<Arc<dyn Platform>>) -> Config {
    let mut config = Config::with_modes(ModeRegistry::with_builtins());
    config.init(user, platform);
    config
}

/// Build and install the process-wide store, or return the installed one.
///
/// Once a store is installed, `user` and `platform` are ignored.
pub fn setup_config(user: UserConfig, platform: Option<Arc<dyn Platform>>) -> ConfigHandle {
    let mut created = false;
    let handle = GLOBAL_CONFIG.get_or_init(|| {
        created = true;
        ConfigHandle::new(build_config(user, platform))
    });

    if created {
        tracing::debug!("Installed global config");
    } else {
        tracing::debug!("Global config already installed, reusing it");
    }
    handle.clone()
}

/// The process-wide store, if [`setup_config`] has run.
pub fn global_config() -> Option<ConfigHandle> {
    GLOBAL_CONFIG.get().cloned()
}

/// Everything a UI consumer needs from the configuration layer.
///
/// Pass this explicitly instead of reaching for [`global_config`].
#[derive(Clone)]
pub struct AppContext {
    platform: Option<Arc<dyn Platform>>,
    config: ConfigHandle,
}

impl AppContext {
    /// Context over the process-wide store, installing it if needed.
    ///
    /// The platform is taken from the installed store, which may differ from
    /// `platform` if another caller bootstrapped first.
    pub fn bootstrap(user: UserConfig, platform: Option<Arc<dyn Platform>>) -> Self {
        Self::from_handle(setup_config(user, platform))
    }

    /// Context over a fresh store that is not installed globally.
    pub fn isolated(user: UserConfig, platform: Option<Arc<dyn Platform>>) -> Self {
        Self::from_handle(ConfigHandle::new(build_config(user, platform)))
    }

    fn from_handle(config: ConfigHandle) -> Self {
        let platform = config.with(|c| c.platform().cloned());
        Self { platform, config }
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    pub fn platform(&self) -> Option<&Arc<dyn Platform>> {
        self.platform.as_ref()
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field(
                "platforms",
                &self.platform.as_ref().map(|p| p.platforms()),
            )
            .field("config", &self.config)
            .finish()
    }
}
