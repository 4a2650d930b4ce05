//! Conversions into and out of [`Value`].
//!
//! Besides the `From` impls for Rust primitives, this module bridges
//! `serde_json::Value`: decoded JSON is the most common source of values that
//! need checking. JSON arrays become sequential arrays, JSON objects become
//! associative string-keyed arrays - the decoded-configuration shape the
//! checkers consume.

use crate::collections::{Array, Object};
use crate::core::key::Key;
use crate::core::value::Value;
use crate::error::{CheckError, CheckResult};

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(Array::from_vec(values))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Array(
                map.into_iter()
                    .map(|(key, value)| (Key::Str(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Parse a JSON document into a value.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::TypeMismatch` when `input` is not syntactically
    /// valid JSON.
    pub fn from_json_str(input: &str) -> CheckResult<Self> {
        serde_json::from_str::<serde_json::Value>(input)
            .map(Self::from)
            .map_err(|_| CheckError::type_mismatch("json-string", "non-json-string"))
    }
}

/// Extension trait for `&Value` providing conversion to `serde_json::Value`.
pub trait ValueRefExt {
    /// Convert a reference to [`Value`] into `serde_json::Value`.
    ///
    /// Sequential arrays render as JSON arrays, associative arrays as JSON
    /// objects with stringified keys. Objects render their fields as a JSON
    /// object; the class identity is not carried over.
    fn to_json(&self) -> serde_json::Value;
}

impl ValueRefExt for Value {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(fl) => serde_json::Number::from_f64(*fl)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(t) => serde_json::Value::String(t.clone()),
            Value::Array(arr) => {
                if arr.is_sequential() {
                    serde_json::Value::Array(arr.values().map(ValueRefExt::to_json).collect())
                } else {
                    let mut map = serde_json::Map::with_capacity(arr.len());
                    map.extend(arr.iter().map(|(key, value)| (key.to_string(), value.to_json())));
                    serde_json::Value::Object(map)
                }
            }
            Value::Object(obj) => {
                let mut map = serde_json::Map::with_capacity(obj.len());
                map.extend(
                    obj.fields()
                        .map(|(name, value)| (name.to_string(), value.to_json())),
                );
                serde_json::Value::Object(map)
            }
        }
    }
}
