//! Value coercions used by the typed getters

use serde_json::Value;

/// Turn a raw URL parameter into a value: `"true"`/`"false"` become booleans,
/// everything else stays a string.
pub(crate) fn url_literal(raw: String) -> Value {
    match raw.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw),
    }
}

/// Boolean reading of a resolved value. `null` is handled by the caller.
///
/// Strings are true only when exactly `"true"`; other values use truthiness.
pub(crate) fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => s == "true",
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Boolean reading with `null` mapped to `fallback`.
pub(crate) fn boolean_or(value: &Value, fallback: bool) -> bool {
    if value.is_null() {
        fallback
    } else {
        to_bool(value)
    }
}

/// Numeric reading with NaN mapped to `fallback`.
pub(crate) fn number_or(value: &Value, fallback: f64) -> f64 {
    let number = to_number(value);
    if number.is_nan() { fallback } else { number }
}

/// Numeric reading of a resolved value; NaN when it has none.
///
/// Arrays are read through their comma-joined text, so `[12]` and `["12px"]`
/// give 12 and `[]` gives NaN.
pub(crate) fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_leading_float(s),
        Value::Array(_) => parse_leading_float(&joined_text(value)),
        _ => f64::NAN,
    }
}

/// Text form of a value as the toolkit's string conversion renders it.
fn joined_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(joined_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Parse the longest leading decimal number of `s`, after leading whitespace.
///
/// `"12px"` gives 12, `"-Infinity"` gives negative infinity, `"px"` gives NaN.
fn parse_leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
