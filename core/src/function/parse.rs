//! Reading function documents from, and writing them back to, JSON.

use super::{FunctionSpec, FunctionType, Stop, validate_base};
use crate::errors::SpecError;
use crate::values::RawValue;
use crate::values::raw::type_name;
use serde_json::{Map, Value};

impl FunctionSpec {
    /// Validate a function document.
    ///
    /// Recognized keys are `type`, `base`, `property`, `stops` and `default`;
    /// other keys are ignored. A key whose value is `null` is treated as
    /// absent.
    pub fn from_json(document: &RawValue) -> Result<Self, SpecError> {
        let Value::Object(fields) = document else {
            return Err(SpecError::NotAnObject {
                found: type_name(document),
            });
        };

        let function_type = match field(fields, "type") {
            None => None,
            Some(Value::String(name)) => Some(
                FunctionType::from_name(name)
                    .ok_or_else(|| SpecError::UnknownFunctionType { found: name.clone() })?,
            ),
            Some(other) => return Err(invalid("type", "a string", other)),
        };

        let base = match field(fields, "base") {
            None => Self::DEFAULT_BASE,
            Some(Value::Number(n)) => validate_base(n.as_f64().unwrap_or(f64::NAN))?,
            Some(other) => return Err(invalid("base", "a number", other)),
        };

        let property = match field(fields, "property") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(other) => return Err(invalid("property", "a string", other)),
        };

        let stops = match field(fields, "stops") {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| parse_stop(index, entry))
                .collect::<Result<_, _>>()?,
            Some(other) => return Err(invalid("stops", "an array", other)),
        };

        Ok(Self {
            function_type,
            base,
            property,
            stops,
            default: field(fields, "default").cloned(),
        })
    }

    /// The document form of this function.
    pub fn to_json(&self) -> RawValue {
        let mut fields = Map::new();
        if let Some(property) = &self.property {
            fields.insert("property".into(), Value::String(property.clone()));
        }
        if let Some(function_type) = self.function_type {
            fields.insert("type".into(), Value::String(function_type.name().into()));
        }
        if self.base != Self::DEFAULT_BASE {
            fields.insert("base".into(), Value::from(self.base));
        }
        let stops = self
            .stops
            .iter()
            .map(|stop| Value::Array(vec![stop.input.clone(), stop.output.clone()]))
            .collect();
        fields.insert("stops".into(), Value::Array(stops));
        if let Some(default) = &self.default {
            fields.insert("default".into(), default.clone());
        }
        Value::Object(fields)
    }
}

impl TryFrom<&RawValue> for FunctionSpec {
    type Error = SpecError;

    fn try_from(document: &RawValue) -> Result<Self, Self::Error> {
        FunctionSpec::from_json(document)
    }
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

fn invalid(field: &'static str, expected: &'static str, found: &Value) -> SpecError {
    SpecError::InvalidField {
        field,
        expected,
        found: type_name(found),
    }
}

fn parse_stop(index: usize, entry: &Value) -> Result<Stop, SpecError> {
    match entry.as_array().map(Vec::as_slice) {
        Some([input, output]) => Ok(Stop {
            input: input.clone(),
            output: output.clone(),
        }),
        _ => Err(SpecError::StopNotPair { index }),
    }
}
