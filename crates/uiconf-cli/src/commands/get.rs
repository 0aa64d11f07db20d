//! Single-key resolution

use serde_json::{Number, Value, json};
use uiconf_core::AppContext;

use super::print_json;
use crate::cli::ValueKind;
use crate::error::{CliError, Result};

/// Resolve `key` and print it in the requested reading.
pub fn run_get(
    context: &AppContext,
    key: &str,
    fallback: Option<&str>,
    kind: ValueKind,
    json: bool,
) -> Result<()> {
    let config = context.config();

    let value = match kind {
        ValueKind::Raw => {
            let fallback = fallback.map(parse_literal).unwrap_or(Value::Null);
            config.get_or(key, fallback)?
        }
        ValueKind::Bool => {
            let fallback = fallback
                .map(|raw| {
                    raw.parse::<bool>().map_err(|_| {
                        CliError::user(format!("Invalid boolean fallback '{raw}'. Use 'true' or 'false'."))
                    })
                })
                .transpose()?
                .unwrap_or(false);
            Value::Bool(config.get_boolean_or(key, fallback)?)
        }
        ValueKind::Number => {
            let fallback = fallback
                .map(|raw| {
                    raw.parse::<f64>()
                        .map_err(|_| CliError::user(format!("Invalid numeric fallback '{raw}'.")))
                })
                .transpose()?
                .unwrap_or(f64::NAN);
            let number = config.get_number_or(key, fallback)?;
            if !json {
                println!("{number}");
                return Ok(());
            }
            // NaN and infinities have no JSON form
            Number::from_f64(number).map_or(Value::Null, Value::Number)
        }
    };

    if json {
        print_json(&json!({ "key": key, "value": value }));
    } else {
        match &value {
            Value::String(s) => println!("{s}"),
            other => println!("{other}"),
        }
    }
    Ok(())
}

/// Read a fallback as JSON when it parses, otherwise as a plain string.
fn parse_literal(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
