//! Setting values
//!
//! A setting is either a literal JSON value or a [`Computed`] callable. The
//! callable receives the platform reference (if any) and produces the literal
//! on demand, so the same key can answer differently per platform without
//! being re-registered.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::platform::Platform;

type ComputeFn = dyn Fn(Option<&dyn Platform>) -> Value + Send + Sync;

/// A lazily evaluated setting.
///
/// Cloning is cheap: clones share the same callable.
#[derive(Clone)]
pub struct Computed(Arc<ComputeFn>);

impl Computed {
    /// Wrap a closure as a computed setting.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&dyn Platform>) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callable against the given platform.
    pub fn evaluate(&self, platform: Option<&dyn Platform>) -> Value {
        (self.0)(platform)
    }
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Computed(<fn>)")
    }
}

impl PartialEq for Computed {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A configuration value as stored in a [`Settings`](crate::Settings) object.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// A plain value: string, number, boolean, null or nested JSON.
    Literal(Value),

    /// A callable evaluated against the platform on every read.
    Computed(Computed),
}

impl SettingValue {
    /// Shorthand for [`SettingValue::Computed`].
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(Option<&dyn Platform>) -> Value + Send + Sync + 'static,
    {
        SettingValue::Computed(Computed::new(f))
    }

    /// Produce the literal value, invoking the callable if needed.
    pub fn resolve(&self, platform: Option<&dyn Platform>) -> Value {
        match self {
            SettingValue::Literal(value) => value.clone(),
            SettingValue::Computed(computed) => computed.evaluate(platform),
        }
    }

    /// Borrow the literal, if this is one.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            SettingValue::Literal(value) => Some(value),
            SettingValue::Computed(_) => None,
        }
    }

    /// The literal string, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Value::as_str)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, SettingValue::Computed(_))
    }

    /// Whether this is a `null` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Literal(Value::Null))
    }
}

impl Default for SettingValue {
    fn default() -> Self {
        SettingValue::Literal(Value::Null)
    }
}

impl From<Computed> for SettingValue {
    fn from(computed: Computed) -> Self {
        SettingValue::Computed(computed)
    }
}

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        SettingValue::Literal(value)
    }
}

macro_rules! literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SettingValue {
                fn from(value: $ty) -> Self {
                    SettingValue::Literal(Value::from(value))
                }
            }
        )*
    };
}

literal_from!(&str, String, bool, i32, i64, u32, u64, f64);
