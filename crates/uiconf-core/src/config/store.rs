//! The configuration store
//!
//! Resolution is lazy and memoized per key: the first `get` of a key merges
//! every source, later reads hit the cache until a setter invalidates it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use uiconf_meta::{ModeRegistry, Platform, SettingValue, Settings, UserConfig};

use super::coerce;
use crate::{Error, Result};

/// Prefix of URL query parameters that override configuration keys.
///
/// `?vmTabsPlacement=top` overrides `tabsPlacement`.
pub const URL_CONFIG_PREFIX: &str = "vm";

/// Layered configuration store.
///
/// Holds the user overrides, the mode registry, the platform reference and a
/// per-key resolution cache. Reads take `&mut self` because a miss populates
/// the cache; use [`ConfigHandle`](super::ConfigHandle) to share a store.
#[derive(Default)]
pub struct Config {
    /// User overrides, the highest non-URL tier
    user: UserConfig,

    /// Winning source value per key. Computed values are cached as callables.
    cache: HashMap<String, SettingValue>,

    modes: ModeRegistry,

    platform: Option<Arc<dyn Platform>>,
}

impl Config {
    /// Create an empty store: no modes, no overrides, no platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that resolves modes from `modes`.
    pub fn with_modes(modes: ModeRegistry) -> Self {
        Self {
            modes,
            ..Self::default()
        }
    }

    /// Install the user overrides and the platform reference.
    ///
    /// The cache is left untouched; call this once, before the first read.
    pub fn init(&mut self, user: UserConfig, platform: Option<Arc<dyn Platform>>) {
        self.user = user;
        self.platform = platform;
    }

    /// Resolve `key`, returning `null` if no source defines it.
    pub fn get(&mut self, key: &str) -> Result<Value> {
        self.get_or(key, Value::Null)
    }

    /// Resolve `key`, returning `fallback` if the result is `null`.
    ///
    /// Fails only when `key` is empty.
    pub fn get_or(&mut self, key: &str, fallback: Value) -> Result<Value> {
        let value = self.lookup(key)?.resolve(self.platform.as_deref());
        Ok(if value.is_null() { fallback } else { value })
    }

    /// The cached winner for `key`, resolving and caching it on a miss.
    ///
    /// Computed values come back unevaluated.
    pub fn lookup(&mut self, key: &str) -> Result<SettingValue> {
        if let Some(cached) = self.cache.get(key) {
            tracing::trace!(key, "Config cache hit");
            return Ok(cached.clone());
        }

        let resolved = self.resolve(key)?;
        self.cache.insert(key.to_string(), resolved.clone());
        Ok(resolved)
    }

    /// Resolve `key` as a boolean, `false` if undefined.
    pub fn get_boolean(&mut self, key: &str) -> Result<bool> {
        self.get_boolean_or(key, false)
    }

    /// Resolve `key` as a boolean.
    ///
    /// `null` gives `fallback`; a string is true only if it is exactly
    /// `"true"`; anything else uses its truthiness.
    pub fn get_boolean_or(&mut self, key: &str, fallback: bool) -> Result<bool> {
        Ok(coerce::boolean_or(&self.get(key)?, fallback))
    }

    /// Resolve `key` as a number, NaN if it has no numeric reading.
    pub fn get_number(&mut self, key: &str) -> Result<f64> {
        self.get_number_or(key, f64::NAN)
    }

    /// Resolve `key` as a number, `fallback` if it has no numeric reading.
    ///
    /// Strings are read by their leading number, so `"12px"` gives 12.
    pub fn get_number_or(&mut self, key: &str, fallback: f64) -> Result<f64> {
        Ok(coerce::number_or(&self.get(key)?, fallback))
    }

    /// Set a top-level user override and invalidate that key.
    pub fn set_global(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> &mut Self {
        let key = key.into();
        self.cache.remove(&key);
        self.user.settings.insert(key, value);
        self
    }

    /// Set a user override for one platform and invalidate that key.
    pub fn set_for_platform(
        &mut self,
        platform: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> &mut Self {
        let key = key.into();
        self.cache.remove(&key);
        self.user.platform_entry(platform).insert(key, value);
        self
    }

    /// The whole user override object.
    pub fn get_all(&self) -> &UserConfig {
        &self.user
    }

    /// Replace the user overrides wholesale and clear the cache.
    pub fn replace_all(&mut self, user: UserConfig) -> &mut Self {
        self.user = user;
        self.clear_cache();
        self
    }

    /// Replace one platform's user overrides and clear the cache.
    pub fn replace_for_platform(
        &mut self,
        platform: impl Into<String>,
        settings: Settings,
    ) -> &mut Self {
        self.user.platforms.insert(platform.into(), settings);
        self.clear_cache();
        self
    }

    /// Register or overwrite a mode. Cached values are not invalidated.
    pub fn set_mode_config(&mut self, name: impl Into<String>, settings: Settings) -> &mut Self {
        self.modes.set_mode_config(name, settings);
        self
    }

    pub fn get_mode_config(&self, name: &str) -> Option<&Settings> {
        self.modes.get_mode_config(Some(name))
    }

    pub fn modes(&self) -> &ModeRegistry {
        &self.modes
    }

    pub fn platform(&self) -> Option<&Arc<dyn Platform>> {
        self.platform.as_ref()
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    /// Cached keys (sorted).
    pub fn cached_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.cache.keys().map(String::as_str).collect();
        keys.sort();
        keys
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Merge every source for `key` and return the winner.
    fn resolve(&self, key: &str) -> Result<SettingValue> {
        if key.is_empty() {
            return Err(Error::KeyNotDefined);
        }

        let mut user_platform_value = None;
        let mut user_platform_mode_value = None;
        let mut platform_value = None;
        let mut platform_mode_value = None;

        if let Some(platform) = self.platform.as_deref() {
            let param = format!("{URL_CONFIG_PREFIX}{key}");
            if let Some(raw) = platform.query_param(&param) {
                tracing::debug!(key, %param, value = %raw, "Config resolved from URL");
                return Ok(SettingValue::Literal(coerce::url_literal(raw)));
            }

            // Later platforms are more specific and overwrite earlier ones
            for id in platform.platforms() {
                if let Some(section) = self.user.platform(&id) {
                    if let Some(value) = section.get(key) {
                        user_platform_value = Some(value.clone());
                    }
                    if let Some(value) = self.mode_value(section.mode(), key) {
                        user_platform_mode_value = Some(value.clone());
                    }
                }

                if let Some(defaults) = platform.platform_config(&id) {
                    if let Some(value) = defaults.settings.get(key) {
                        platform_value = Some(value.clone());
                    }
                    if let Some(value) = self.mode_value(defaults.mode(), key) {
                        platform_mode_value = Some(value.clone());
                    }
                }
            }
        }

        let user_default_value = self.user.settings.get(key).cloned();
        let user_default_mode_value = self.mode_value(self.user.mode(), key).cloned();

        let winner = [
            ("user platform", user_platform_value),
            ("user default", user_default_value),
            ("user platform mode", user_platform_mode_value),
            ("user default mode", user_default_mode_value),
            ("platform", platform_value),
            ("platform mode", platform_mode_value),
        ]
        .into_iter()
        .find_map(|(source, value)| value.map(|v| (source, v)));

        match winner {
            Some((source, value)) => {
                tracing::debug!(key, source, "Config resolved");
                Ok(value)
            }
            None => {
                tracing::debug!(key, "Config key has no source");
                Ok(SettingValue::default())
            }
        }
    }

    fn mode_value(&self, mode: Option<&str>, key: &str) -> Option<&SettingValue> {
        self.modes.get_mode_config(mode).and_then(|m| m.get(key))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user", &self.user)
            .field("cached", &self.cached_keys())
            .field("modes", &self.modes.list())
            .field(
                "platform",
                &self.platform.as_ref().map(|p| p.platforms()),
            )
            .finish()
    }
}
