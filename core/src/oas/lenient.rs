//! # Lenient Scalar Text
//!
//! Serde helpers for document fields that are rendered as text but are not always
//! written as strings in the wild (`version: 1.0`, `type: ["string", "null"]`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional scalar into its textual form.
///
/// - strings are kept verbatim
/// - numbers and booleans use their JSON spelling
/// - sequences of scalars are joined with `", "`
/// - `null` (or a missing field, via `#[serde(default)]`) is `None`
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let parts = items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| D::Error::custom("expected a sequence of scalar values"))?;
            Ok(Some(parts.join(", ")))
        }
        Some(other) => scalar_text(&other)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected a scalar value, found an object")),
    }
}

/// Deserializes an optional sequence of scalars into their textual forms.
///
/// Elements follow the same rules as [`opt_string`]; anything but a sequence (or
/// `null`) is rejected.
pub fn opt_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(scalar_text)
            .collect::<Option<Vec<_>>>()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected a sequence of scalar values")),
        Some(_) => Err(D::Error::custom("expected a sequence")),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
