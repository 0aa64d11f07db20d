//! Mode registry storage

use std::collections::HashMap;

use crate::settings::Settings;

/// Named modes and their default settings.
///
/// A plain data store: registering overwrites, lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct ModeRegistry {
    modes: HashMap<String, Settings>,
}

impl ModeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in modes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, settings) in super::builtins::builtin_modes() {
            registry.set_mode_config(name, settings);
        }
        registry
    }

    /// Register or overwrite the settings for a mode. Last write wins.
    pub fn set_mode_config(&mut self, name: impl Into<String>, settings: Settings) {
        self.modes.insert(name.into(), settings);
    }

    /// Settings for `name`, or `None` if the name is absent or unregistered.
    pub fn get_mode_config(&self, name: Option<&str>) -> Option<&Settings> {
        name.and_then(|n| self.modes.get(n))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Registered mode names (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.modes.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}
