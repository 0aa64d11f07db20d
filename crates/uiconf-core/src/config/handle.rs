//! Shared, thread-safe access to a configuration store

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use uiconf_meta::{SettingValue, Settings, UserConfig};

use super::{Config, coerce};
use crate::Result;

/// A cloneable handle to one [`Config`].
///
/// Cache population and invalidation happen under the lock, so a read that
/// fills the cache can never interleave with a setter's invalidation.
/// Computed values are evaluated after the lock is released; they may read
/// other keys through a clone of this handle.
#[derive(Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<Mutex<Config>>,
}

impl ConfigHandle {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(Mutex::new(config)),
        }
    }

    // A panic inside a caller's closure cannot leave the store half-updated
    // in a way later reads depend on, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Config> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&Config) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with exclusive access to the store.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Config) -> R) -> R {
        f(&mut self.lock())
    }

    /// Whether both handles point at the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Look `key` up under the lock, then evaluate it without holding it.
    fn evaluate(&self, key: &str) -> Result<Value> {
        let (cached, platform) = {
            let mut config = self.lock();
            (config.lookup(key)?, config.platform().cloned())
        };
        Ok(cached.resolve(platform.as_deref()))
    }

    pub fn get(&self, key: &str) -> Result<Value> {
        self.evaluate(key)
    }

    pub fn get_or(&self, key: &str, fallback: Value) -> Result<Value> {
        let value = self.evaluate(key)?;
        Ok(if value.is_null() { fallback } else { value })
    }

    pub fn get_boolean(&self, key: &str) -> Result<bool> {
        self.get_boolean_or(key, false)
    }

    pub fn get_boolean_or(&self, key: &str, fallback: bool) -> Result<bool> {
        Ok(coerce::boolean_or(&self.evaluate(key)?, fallback))
    }

    pub fn get_number(&self, key: &str) -> Result<f64> {
        self.get_number_or(key, f64::NAN)
    }

    pub fn get_number_or(&self, key: &str, fallback: f64) -> Result<f64> {
        Ok(coerce::number_or(&self.evaluate(key)?, fallback))
    }

    pub fn set_global(&self, key: impl Into<String>, value: impl Into<SettingValue>) -> &Self {
        self.lock().set_global(key, value);
        self
    }

    pub fn set_for_platform(
        &self,
        platform: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> &Self {
        self.lock().set_for_platform(platform, key, value);
        self
    }

    /// A snapshot of the user override object.
    pub fn get_all(&self) -> UserConfig {
        self.lock().get_all().clone()
    }

    pub fn replace_all(&self, user: UserConfig) -> &Self {
        self.lock().replace_all(user);
        self
    }

    pub fn replace_for_platform(&self, platform: impl Into<String>, settings: Settings) -> &Self {
        self.lock().replace_for_platform(platform, settings);
        self
    }

    pub fn set_mode_config(&self, name: impl Into<String>, settings: Settings) -> &Self {
        self.lock().set_mode_config(name, settings);
        self
    }
}

impl From<Config> for ConfigHandle {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl fmt::Debug for ConfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigHandle").field(&*self.lock()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clones_share_one_store() {
        let a = ConfigHandle::default();
        let b = a.clone();

        a.set_global("tabsPlacement", "top");
        assert_eq!(b.get("tabsPlacement").unwrap(), json!("top"));
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&ConfigHandle::default()));
    }

    #[test]
    fn with_mut_exposes_store() {
        let handle = ConfigHandle::default();
        handle.with_mut(|c| {
            c.set_global("x", 1);
        });
        assert!(handle.with(|c| c.get_all().settings.contains_key("x")));
    }

    #[test]
    fn computed_value_reads_other_keys_through_handle() {
        let handle = ConfigHandle::default();
        let inner = handle.clone();
        handle
            .set_global("base", 40)
            .set_global(
                "derived",
                SettingValue::computed(move |_| {
                    let base = inner.get_number("base").unwrap_or(f64::NAN);
                    json!(base + 2.0)
                }),
            );

        let worker = handle.clone();
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(worker.get("derived").map_err(|e| e.to_string()));
        });

        let value = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("computed read through the handle should not block");
        assert_eq!(value.unwrap(), json!(42.0));
        assert_eq!(handle.get_number("derived").unwrap(), 42.0);
        assert!(handle.with(|c| c.is_cached("base") && c.is_cached("derived")));
    }

    #[test]
    fn survives_poisoned_lock() {
        let handle = ConfigHandle::default();
        let clone = handle.clone();
        let result = std::thread::spawn(move || {
            clone.with_mut(|_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        handle.set_global("spinner", "dots");
        assert_eq!(handle.get("spinner").unwrap(), json!("dots"));
    }
}
