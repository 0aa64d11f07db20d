//! URL query parameters
//!
//! Names are case-insensitive: `vmTabsPlacement` and `vmtabsplacement` refer
//! to the same parameter. When a name repeats, the last value wins. Only
//! `name=value` pairs count: a bare `?vmSpinner` sets nothing.

use std::collections::HashMap;

use url::{Url, form_urlencoded};

use crate::error::{Error, Result};

/// Decoded query parameters of the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut values = HashMap::new();
        for pair in query.split('&').filter(|pair| pair.contains('=')) {
            for (name, value) in form_urlencoded::parse(pair.as_bytes()) {
                if name.is_empty() {
                    continue;
                }
                values.insert(name.to_lowercase(), value.into_owned());
            }
        }
        Self { values }
    }

    /// Parse the query of a full URL.
    ///
    /// Hash-routed pages put their query after the fragment marker
    /// (`/#/page?vmMode=ios`); that query is used when the URL has no
    /// regular one.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let query = match parsed.query() {
            Some(q) => Some(q),
            None => parsed
                .fragment()
                .and_then(|f| f.split_once('?'))
                .map(|(_, q)| q),
        };

        Ok(query.map(Self::parse).unwrap_or_default())
    }

    /// Look up a parameter by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_lowercase(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
