//! Coercion of raw values into typed values.
//!
//! Coercion is strict and never substitutes a default: a value either
//! converts to the requested [`TargetKind`] or a [`CoercionError`] explains
//! why it did not. Callers decide what to do on failure.
//!
//! | Target  | Accepts |
//! |---------|---------|
//! | Number  | number literals, numeric strings, percentages (`"50%"` is 0.5) |
//! | Color   | hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, CSS color names |
//! | Boolean | boolean literals, `"true"`/`"false"` in any case |
//! | String  | anything (canonical text form) |
//! | Enum    | strings naming an enumerant, in any case |

use crate::errors::CoercionError;
use crate::values::{Color, RawValue, TargetKind, TypedValue, raw};
use serde_json::Value;

/// Convert `raw` into a value of kind `target`.
pub fn coerce(raw: &RawValue, target: &TargetKind) -> Result<TypedValue, CoercionError> {
    match target {
        TargetKind::Number => to_number(raw).map(TypedValue::Number),
        TargetKind::Color => to_color(raw).map(TypedValue::Color),
        TargetKind::String => Ok(TypedValue::String(raw::canonical_text(raw))),
        TargetKind::Boolean => to_bool(raw).map(TypedValue::Boolean),
        TargetKind::Enum(kind) => {
            let value = match raw {
                Value::String(s) => kind.lookup(s),
                _ => None,
            };
            value
                .map(TypedValue::Enum)
                .ok_or_else(|| CoercionError::UnknownEnumerant {
                    kind: kind.name,
                    found: raw::canonical_text(raw),
                })
        }
    }
}

/// Convert `raw` into a number.
pub fn to_number(raw: &RawValue) -> Result<f64, CoercionError> {
    let number = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    };
    number.ok_or_else(|| CoercionError::NotANumber {
        found: raw::canonical_text(raw),
    })
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = match text.strip_suffix('%') {
        Some(pct) => pct.trim_end().parse::<f64>().ok()? / 100.0,
        None => text.parse::<f64>().ok()?,
    };
    // "NaN" and "inf" parse as f64 but are not numbers in a style document.
    value.is_finite().then_some(value)
}

/// Convert `raw` into a color.
pub fn to_color(raw: &RawValue) -> Result<Color, CoercionError> {
    let color = match raw {
        Value::String(s) => Color::parse(s),
        _ => None,
    };
    color.ok_or_else(|| CoercionError::NotAColor {
        found: raw::canonical_text(raw),
    })
}

/// Convert `raw` into a boolean.
pub fn to_bool(raw: &RawValue) -> Result<bool, CoercionError> {
    let value = match raw {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    };
    value.ok_or_else(|| CoercionError::NotABoolean {
        found: raw::canonical_text(raw),
    })
}
