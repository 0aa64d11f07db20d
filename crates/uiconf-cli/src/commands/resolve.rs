//! Multi-key resolution

use colored::Colorize;
use serde_json::{Map, Value};
use uiconf_core::AppContext;

use super::{display_value, print_json};
use crate::error::Result;

/// Resolve each of `keys`, or every well-known key when empty.
pub fn run_resolve(context: &AppContext, keys: &[String], json: bool) -> Result<()> {
    let keys: Vec<&str> = if keys.is_empty() {
        uiconf_meta::keys::ALL.to_vec()
    } else {
        keys.iter().map(String::as_str).collect()
    };

    let mut resolved = Vec::with_capacity(keys.len());
    for key in keys {
        resolved.push((key, context.config().get(key)?));
    }

    if json {
        let map: Map<String, Value> = resolved
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        print_json(&Value::Object(map));
        return Ok(());
    }

    let platforms = context
        .platform()
        .map(|p| p.platforms().join(" > "))
        .unwrap_or_default();
    println!("{} {}", "Resolved configuration for".bold(), platforms.cyan());
    println!();
    let width = resolved.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;
    for (key, value) in &resolved {
        println!("  {:<width$} {}", format!("{key}:").dimmed(), display_value(value));
    }
    Ok(())
}
