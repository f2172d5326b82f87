//! Style function definitions.
//!
//! A [`FunctionSpec`] is the validated, immutable form of a function document
//! such as
//!
//! ```json
//! { "property": "class", "type": "categorical", "default": -1,
//!   "stops": [["trail", 1], ["road", 3]] }
//! ```
//!
//! It is created with [`FunctionSpec::from_json`] (or programmatically with
//! [`FunctionSpec::new`] and the `with_*` methods) and never changes
//! afterwards.

mod parse;
mod split;


use crate::errors::SpecError;
use crate::values::{RawValue, TargetKind};
use bitflags::bitflags;
use core::fmt;
use serde_json::Value;

/// The lookup strategy of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionType {
    /// The input itself, coerced to the target kind.
    Identity,
    /// Interpolation between the stops surrounding the input.
    Exponential,
    /// The output of the greatest stop at or below the input.
    Interval,
    /// The output of the stop whose key equals the input.
    Categorical,
}

impl FunctionType {
    pub const ALL: [FunctionType; 4] = [
        FunctionType::Identity,
        FunctionType::Exponential,
        FunctionType::Interval,
        FunctionType::Categorical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FunctionType::Identity => "identity",
            FunctionType::Exponential => "exponential",
            FunctionType::Interval => "interval",
            FunctionType::Categorical => "categorical",
        }
    }

    /// Parse a type name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
    }

    /// The type used when a document does not name one: continuous kinds
    /// interpolate, discrete kinds step.
    pub fn default_for(target: &TargetKind) -> Self {
        if target.is_continuous() {
            FunctionType::Exponential
        } else {
            FunctionType::Interval
        }
    }

    /// Whether stop keys of this type must be numbers.
    pub fn has_numeric_stops(&self) -> bool {
        matches!(self, FunctionType::Exponential | FunctionType::Interval)
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// What a function reads its input from.
    ///
    /// A function with both flags set is keyed on zoom and a property at the
    /// same time (stop keys of the form `{"zoom": z, "value": v}`).
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct FunctionCategory: u8 {
        const ZOOM = 1;
        const PROPERTY = 1 << 1;
    }
}

/// One `[input, output]` entry of a function's stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub input: RawValue,
    pub output: RawValue,
}

impl Stop {
    pub fn new(input: impl Into<RawValue>, output: impl Into<RawValue>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// A validated style function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    function_type: Option<FunctionType>,
    base: f64,
    property: Option<String>,
    stops: Vec<Stop>,
    default: Option<RawValue>,
}

impl FunctionSpec {
    pub const DEFAULT_BASE: f64 = 1.0;

    /// A zoom function over `stops`, with no explicit type or default.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self {
            function_type: None,
            base: Self::DEFAULT_BASE,
            property: None,
            stops,
            default: None,
        }
    }

    pub fn with_type(mut self, function_type: FunctionType) -> Self {
        self.function_type = Some(function_type);
        self
    }

    pub fn with_base(mut self, base: f64) -> Result<Self, SpecError> {
        self.base = validate_base(base)?;
        Ok(self)
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<RawValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The type named by the document, if any.
    pub fn function_type(&self) -> Option<FunctionType> {
        self.function_type
    }

    /// The type named by the document, or the default type for `target`.
    pub fn type_with_default(&self, target: &TargetKind) -> FunctionType {
        self.function_type
            .unwrap_or_else(|| FunctionType::default_for(target))
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn default_value(&self) -> Option<&RawValue> {
        self.default.as_ref()
    }

    pub fn category(&self) -> FunctionCategory {
        if self.property.is_none() {
            return FunctionCategory::ZOOM;
        }
        match self.stops.first() {
            Some(Stop {
                input: Value::Object(_),
                ..
            }) => FunctionCategory::ZOOM | FunctionCategory::PROPERTY,
            _ => FunctionCategory::PROPERTY,
        }
    }

    /// Whether every stop output is an array, meaning the function must be
    /// [split](FunctionSpec::split) before it can be evaluated.
    pub fn is_array_function(&self) -> bool {
        !self.stops.is_empty() && self.stops.iter().all(|stop| stop.output.is_array())
    }
}

pub(crate) fn validate_base(base: f64) -> Result<f64, SpecError> {
    if base.is_finite() && base > 0.0 {
        Ok(base)
    } else {
        Err(SpecError::InvalidBase { base })
    }
}
