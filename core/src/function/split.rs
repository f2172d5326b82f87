//! Splitting vector-valued functions into scalar components.

use super::{FunctionSpec, Stop};
use crate::errors::SpecError;
use serde_json::Value;

impl FunctionSpec {
    /// Split a function whose outputs are arrays of N components into N
    /// functions, one per component.
    ///
    /// N is the length of the default when it is an array, otherwise the
    /// length of the first stop's output. Component `i` keeps the type, base
    /// and property of `self`, takes element `i` of every stop output, and
    /// takes element `i` of an array default (a scalar default is kept as
    /// is). Components beyond N are ignored.
    ///
    /// A function without stops splits into a single copy of itself.
    pub fn split(&self) -> Result<Vec<FunctionSpec>, SpecError> {
        let Some(first) = self.stops.first() else {
            return Ok(vec![self.clone()]);
        };

        let dimension = match (&self.default, &first.output) {
            (Some(Value::Array(items)), _) => items.len(),
            (_, Value::Array(items)) => items.len(),
            _ => return Err(SpecError::SplitNonArrayOutput { index: 0 }),
        };

        let mut columns = Vec::with_capacity(self.stops.len());
        for (index, stop) in self.stops.iter().enumerate() {
            match &stop.output {
                Value::Array(items) if items.len() >= dimension => columns.push(items),
                Value::Array(items) => {
                    return Err(SpecError::SplitDimensionMismatch {
                        index,
                        expected: dimension,
                        found: items.len(),
                    });
                }
                _ => return Err(SpecError::SplitNonArrayOutput { index }),
            }
        }

        let components = (0..dimension)
            .map(|i| FunctionSpec {
                function_type: self.function_type,
                base: self.base,
                property: self.property.clone(),
                stops: self
                    .stops
                    .iter()
                    .zip(&columns)
                    .map(|(stop, items)| Stop {
                        input: stop.input.clone(),
                        output: items[i].clone(),
                    })
                    .collect(),
                default: match &self.default {
                    Some(Value::Array(items)) => Some(items[i].clone()),
                    other => other.clone(),
                },
            })
            .collect();
        Ok(components)
    }
}
