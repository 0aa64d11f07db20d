//! Platform defaults inspection

use colored::Colorize;
use serde_json::{Value, json};
use uiconf_core::AppContext;
use uiconf_platform::builtin_platform_configs;

use super::{display_value, print_json};
use crate::error::Result;

/// List the built-in platform defaults, marking the active ones.
pub fn run_platforms(context: &AppContext, json: bool) -> Result<()> {
    let active = context
        .platform()
        .map(|p| p.platforms())
        .unwrap_or_default();
    let mode = context.config().get("mode")?;
    let builtins = builtin_platform_configs();

    // Active platforms without built-in defaults still take part in resolution
    let custom: Vec<&String> = active
        .iter()
        .filter(|id| !builtins.iter().any(|(builtin, _)| *builtin == id.as_str()))
        .collect();

    if json {
        let platforms: Vec<Value> = builtins
            .iter()
            .map(|(id, config)| {
                json!({
                    "id": id,
                    "mode": config.mode(),
                    "active": active.iter().any(|a| a == id),
                    "settings": config.settings.to_json(),
                })
            })
            .collect();
        print_json(&json!({
            "active": active,
            "mode": mode,
            "platforms": platforms,
            "custom": custom,
        }));
        return Ok(());
    }

    println!("{} {}", "Active:".dimmed(), active.join(" > ").cyan());
    println!("{} {}", "Mode:".dimmed(), display_value(&mode));
    println!();
    println!("{}", "Built-in platforms".bold());
    for (id, config) in &builtins {
        let marker = if active.iter().any(|a| a == id) {
            "*".green()
        } else {
            " ".normal()
        };
        let mode = config.mode().unwrap_or("-");
        println!("  {marker} {id:<8} {}", format!("mode: {mode}").dimmed());
    }
    for id in custom {
        println!("  {} {id:<8} {}", "*".green(), "(no defaults)".dimmed());
    }
    Ok(())
}
