//! Raw (uncoerced) values as they appear in a parsed style document.
//!
//! Raw values are plain `serde_json` values. Objects keep their key order
//! (`preserve_order`), so a function document is an ordered key/value map.

use serde_json::Value;

/// A raw value taken from a parsed style document or a feature attribute.
pub type RawValue = serde_json::Value;

/// A feature's attributes, keyed by property name.
pub type Properties = serde_json::Map<String, RawValue>;

/// Short, lowercase name of the JSON type of `raw`, used in diagnostics.
pub fn type_name(raw: &RawValue) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The numeric value of a number literal, or `None` for any other value.
///
/// Strings are deliberately not parsed here; see [`crate::casting`].
pub fn as_number(raw: &RawValue) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Structural equality: both values have the same JSON type and the same value.
///
/// Numbers compare by numeric value, so `2` and `2.0` are equal, but the
/// string `"2"` is not equal to the number `2`.
pub fn structurally_equal(a: &RawValue, b: &RawValue) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| structurally_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| structurally_equal(x, y)))
        }
        _ => false,
    }
}

/// Canonical textual form of a raw value.
///
/// Strings are returned without quotes; every other value uses its compact
/// JSON text.
pub fn canonical_text(raw: &RawValue) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
