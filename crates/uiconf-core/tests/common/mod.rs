//! Shared fixtures for uiconf-core integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uiconf_core::meta::{Platform, PlatformConfig, Settings};
use uiconf_platform::StaticPlatform;

/// `["mobile", "ios"]` with no defaults and no URL.
pub fn mobile_ios() -> Arc<dyn Platform> {
    Arc::new(StaticPlatform::new(["mobile", "ios"]))
}

/// `["mobile", "ios"]` with the built-in platform defaults.
pub fn mobile_ios_with_builtins() -> Arc<dyn Platform> {
    Arc::new(
        StaticPlatform::builder()
            .platforms(["mobile", "ios"])
            .with_builtin_configs()
            .build(),
    )
}

/// A provider whose defaults can change after the store has read them.
#[derive(Default)]
pub struct MutablePlatform {
    platforms: Vec<String>,
    configs: RwLock<HashMap<String, PlatformConfig>>,
}

impl MutablePlatform {
    pub fn new(platforms: &[&str]) -> Self {
        Self {
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            configs: RwLock::default(),
        }
    }

    pub fn set_defaults(&self, id: &str, settings: Settings) {
        self.configs
            .write()
            .unwrap()
            .insert(id.to_string(), PlatformConfig::new(settings));
    }
}

impl Platform for MutablePlatform {
    fn platforms(&self) -> Vec<String> {
        self.platforms.clone()
    }

    fn platform_config(&self, id: &str) -> Option<PlatformConfig> {
        self.configs.read().unwrap().get(id).cloned()
    }

    fn query_param(&self, _name: &str) -> Option<String> {
        None
    }
}
