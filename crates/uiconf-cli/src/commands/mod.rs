//! Command implementations for uiconf-cli

pub mod get;
pub mod modes;
pub mod platforms;
pub mod resolve;

pub use get::run_get;
pub use modes::run_modes;
pub use platforms::run_platforms;
pub use resolve::run_resolve;

use colored::{ColoredString, Colorize};
use serde_json::Value;

/// Print a JSON document for scripting.
pub(crate) fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Human-readable rendering of a resolved value.
///
/// Strings print bare, `null` prints as a dimmed placeholder.
pub(crate) fn display_value(value: &Value) -> ColoredString {
    match value {
        Value::Null => "(unset)".dimmed(),
        Value::String(s) => s.as_str().normal(),
        other => other.to_string().cyan(),
    }
}
