//! Field extraction from generic JSON response bodies.
//!
//! The Events API answers with small JSON objects whose fields may or may
//! not be present. These helpers read a named field without ever failing.

use serde_json::Value;

/// Returns the text form of `key` in `json`, if the field exists.
///
/// Strings are returned verbatim, numbers and booleans in their display
/// form and `null` as `"null"`. Arrays and objects have no scalar text and
/// yield an empty string. Returns `None` when `json` is not an object or
/// has no such field.
#[must_use]
pub fn property_value(json: &Value, key: &str) -> Option<String> {
    json.get(key).map(|value| match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Returns `key` in `json` serialized as compact JSON, if it is an array.
#[must_use]
pub fn array_value(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .filter(|value| value.is_array())
        .map(Value::to_string)
}
