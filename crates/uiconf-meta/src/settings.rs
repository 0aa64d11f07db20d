//! Settings objects and the user override object
//!
//! A [`Settings`] object is a flat map from key to [`SettingValue`]. The same
//! shape is used for user overrides, mode defaults and platform defaults.
//!
//! [`UserConfig`] is the highest tier: top-level settings plus per-platform
//! sections, e.g.
//!
//! ```json
//! {
//!   "tabsPlacement": "bottom",
//!   "platforms": { "ios": { "tabsPlacement": "top" } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::Result;
use crate::value::SettingValue;

/// Key that names the mode of a settings object.
pub const MODE_KEY: &str = "mode";

/// Member of a user configuration object holding per-platform sections.
pub const PLATFORMS_FIELD: &str = "platforms";

/// A flat key/value settings bundle.
///
/// A key that is present counts as defined even when its value is `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: BTreeMap<String, SettingValue>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Option<SettingValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The mode named by this object's `mode` key.
    ///
    /// Only a string literal names a mode; computed or non-string values do not.
    pub fn mode(&self) -> Option<&str> {
        self.get(MODE_KEY).and_then(SettingValue::as_str)
    }

    /// Build settings from a JSON object. Anything else yields empty settings.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            values: map
                .into_iter()
                .map(|(k, v)| (k, SettingValue::Literal(v)))
                .collect(),
        }
    }

    /// Render literal entries as a JSON object. Computed entries are omitted.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .filter_map(|(k, v)| v.as_literal().map(|lit| (k.clone(), lit.clone())))
            .collect();
        Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The user override object: top-level settings plus per-platform sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserConfig {
    /// Settings that apply regardless of platform. `mode` names the user's mode.
    pub settings: Settings,

    /// Settings keyed by platform identifier.
    pub platforms: BTreeMap<String, Settings>,
}

impl UserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style top-level insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key, value);
        self
    }

    /// Builder-style insert into a platform section.
    pub fn with_platform_value(
        mut self,
        platform: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Self {
        self.platform_entry(platform).insert(key, value);
        self
    }

    /// Builder-style replacement of a whole platform section.
    pub fn with_platform(mut self, platform: impl Into<String>, settings: Settings) -> Self {
        self.platforms.insert(platform.into(), settings);
        self
    }

    /// The user's top-level mode.
    pub fn mode(&self) -> Option<&str> {
        self.settings.mode()
    }

    pub fn platform(&self, id: &str) -> Option<&Settings> {
        self.platforms.get(id)
    }

    /// The settings section for `platform`, created empty if missing.
    pub fn platform_entry(&mut self, platform: impl Into<String>) -> &mut Settings {
        self.platforms.entry(platform.into()).or_default()
    }

    /// Build a user configuration from JSON.
    ///
    /// An object becomes top-level settings, except for its `platforms` member,
    /// which must be an object of objects. Any other input is treated as an
    /// empty configuration.
    pub fn from_json(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                tracing::debug!(
                    kind = json_kind(&other),
                    "User config is not an object, using empty config"
                );
                return Self::default();
            }
        };

        let mut platforms = BTreeMap::new();
        match map.remove(PLATFORMS_FIELD) {
            Some(Value::Object(sections)) => {
                for (id, section) in sections {
                    if section.is_object() {
                        platforms.insert(id, Settings::from_json(section));
                    } else {
                        tracing::debug!(platform = %id, "Ignoring non-object platform section");
                    }
                }
            }
            Some(other) => {
                tracing::debug!(kind = json_kind(&other), "Ignoring non-object platforms field");
            }
            None => {}
        }

        Self {
            settings: Settings::from_map(map),
            platforms,
        }
    }

    /// Parse JSON text into a user configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_json(value))
    }

    /// Parse TOML text into a user configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let value: Value = toml::from_str(content)?;
        Ok(Self::from_json(value))
    }

    /// Render literal entries back to JSON.
    pub fn to_json(&self) -> Value {
        let mut out = self.settings.to_json();
        if !self.platforms.is_empty() {
            let sections: Map<String, Value> = self
                .platforms
                .iter()
                .map(|(id, s)| (id.clone(), s.to_json()))
                .collect();
            if let Value::Object(map) = &mut out {
                map.insert(PLATFORMS_FIELD.to_string(), Value::Object(sections));
            }
        }
        out
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Serialize for UserConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn present_null_counts_as_defined() {
        let settings = Settings::new().with("spinner", Value::Null);
        assert!(settings.contains_key("spinner"));
        assert!(settings.get("spinner").is_some_and(SettingValue::is_null));
    }

    #[test]
    fn mode_requires_string_literal() {
        assert_eq!(Settings::new().with("mode", "ios").mode(), Some("ios"));
        assert_eq!(Settings::new().with("mode", 3).mode(), None);
        let computed = Settings::new().with("mode", SettingValue::computed(|_| json!("ios")));
        assert_eq!(computed.mode(), None);
    }

    #[test]
    fn to_json_skips_computed_entries() {
        let settings = Settings::new()
            .with("a", 1)
            .with("b", SettingValue::computed(|_| json!(2)));
        assert_eq!(settings.to_json(), json!({ "a": 1 }));
    }

    #[test]
    fn platform_entry_creates_section() {
        let mut user = UserConfig::new();
        user.platform_entry("ios").insert("tabsPlacement", "top");
        assert_eq!(
            user.platform("ios").and_then(|s| s.get("tabsPlacement")),
            Some(&SettingValue::from("top"))
        );
    }
}
