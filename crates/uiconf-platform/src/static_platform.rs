//! A platform provider with fixed answers

use std::collections::HashMap;

use uiconf_meta::{Platform, PlatformConfig};

use crate::Result;
use crate::builtins::builtin_platform_configs;
use crate::query::QueryParams;

/// A [`Platform`] whose active platforms, defaults and URL are set up front.
///
/// # Example
///
/// ```
/// use uiconf_meta::Platform;
/// use uiconf_platform::StaticPlatform;
///
/// let platform = StaticPlatform::builder()
///     .platforms(["mobile", "ios"])
///     .with_builtin_configs()
///     .query_string("vmTabsPlacement=top")
///     .build();
///
/// assert_eq!(platform.name().as_deref(), Some("ios"));
/// assert_eq!(platform.platform_config("ios").unwrap().mode(), Some("ios"));
/// assert_eq!(platform.query_param("vmtabsplacement").as_deref(), Some("top"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticPlatform {
    platforms: Vec<String>,
    configs: HashMap<String, PlatformConfig>,
    query: QueryParams,
}

impl StaticPlatform {
    /// A provider with the given active platforms and nothing else.
    pub fn new<I, S>(platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().platforms(platforms).build()
    }

    pub fn builder() -> StaticPlatformBuilder {
        StaticPlatformBuilder::default()
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Identifiers with registered defaults (sorted).
    pub fn configured_platforms(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.configs.keys().map(String::as_str).collect();
        ids.sort();
        ids
    }
}

impl Platform for StaticPlatform {
    fn platforms(&self) -> Vec<String> {
        self.platforms.clone()
    }

    fn platform_config(&self, id: &str) -> Option<PlatformConfig> {
        self.configs.get(id).cloned()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).map(str::to_owned)
    }
}

/// Builder for [`StaticPlatform`].
#[derive(Debug, Default)]
pub struct StaticPlatformBuilder {
    inner: StaticPlatform,
}

impl StaticPlatformBuilder {
    /// Set the active platforms, most general first.
    pub fn platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// Append one active platform, more specific than those already set.
    pub fn platform(mut self, id: impl Into<String>) -> Self {
        self.inner.platforms.push(id.into());
        self
    }

    /// Register (or replace) the defaults for one platform.
    pub fn platform_config(mut self, id: impl Into<String>, config: impl Into<PlatformConfig>) -> Self {
        self.inner.configs.insert(id.into(), config.into());
        self
    }

    /// Register the built-in platform defaults, keeping any already set.
    pub fn with_builtin_configs(mut self) -> Self {
        for (id, config) in builtin_platform_configs() {
            self.inner.configs.entry(id.to_string()).or_insert(config);
        }
        self
    }

    /// Use a raw query string as the page URL's parameters.
    pub fn query_string(mut self, query: &str) -> Self {
        self.inner.query = QueryParams::parse(query);
        self
    }

    /// Use the query of a full page URL.
    pub fn url(mut self, url: &str) -> Result<Self> {
        self.inner.query = QueryParams::from_url(url)?;
        tracing::debug!(url, params = self.inner.query.len(), "Parsed page URL");
        Ok(self)
    }

    /// Set a single query parameter.
    pub fn query_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.inner.query.insert(name, value);
        self
    }

    pub fn build(self) -> StaticPlatform {
        self.inner
    }
}
