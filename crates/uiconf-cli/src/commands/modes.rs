//! Mode registry inspection

use colored::Colorize;
use serde_json::{Map, Value};
use uiconf_core::AppContext;

use super::{display_value, print_json};
use crate::error::{CliError, Result};

/// List the registered modes, or print one mode's settings.
pub fn run_modes(context: &AppContext, name: Option<&str>, json: bool) -> Result<()> {
    match name {
        Some(name) => show_mode(context, name, json),
        None => list_modes(context, json),
    }
}

fn list_modes(context: &AppContext, json: bool) -> Result<()> {
    let modes: Vec<(String, Value)> = context.config().with(|config| {
        config
            .modes()
            .list()
            .into_iter()
            .filter_map(|name| {
                config
                    .get_mode_config(name)
                    .map(|settings| (name.to_string(), settings.to_json()))
            })
            .collect()
    });

    if json {
        let map: Map<String, Value> = modes.into_iter().collect();
        print_json(&Value::Object(map));
        return Ok(());
    }

    println!("{}", "Registered modes".bold());
    println!();
    for (name, settings) in &modes {
        let count = settings.as_object().map_or(0, Map::len);
        println!("  {} {:<6} {}", "+".green(), name, format!("({count} settings)").dimmed());
    }
    Ok(())
}

fn show_mode(context: &AppContext, name: &str, json: bool) -> Result<()> {
    let settings = context
        .config()
        .with(|config| config.get_mode_config(name).map(|s| s.to_json()))
        .ok_or_else(|| {
            CliError::user(format!(
                "Unknown mode '{name}'. Use 'uiconf modes' to see available modes."
            ))
        })?;

    if json {
        print_json(&settings);
        return Ok(());
    }

    println!("{} {}", "Mode".bold(), name.cyan());
    println!();
    if let Value::Object(map) = &settings {
        let width = map.keys().map(String::len).max().unwrap_or(0) + 1;
        for (key, value) in map {
            println!("  {:<width$} {}", format!("{key}:").dimmed(), display_value(value));
        }
    }
    Ok(())
}
