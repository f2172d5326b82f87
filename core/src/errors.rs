//! Error types.
//!
//! Two families, matching when they can happen:
//!
//! - [`SpecError`]: a function document is malformed. Raised while building a
//!   [`FunctionSpec`](crate::FunctionSpec) or an
//!   [`Expression`](crate::Expression) and always returned to the caller.
//! - [`CoercionError`]: a raw value does not convert to the requested kind.
//!   During evaluation these are absorbed and replaced by the function's
//!   default; they surface only from [`coerce`](crate::coerce) itself.

use crate::function::FunctionType;
use crate::values::TargetKind;
use thiserror::Error;

/// A raw value could not be converted to the requested target kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("`{found}` is not a number")]
    NotANumber { found: String },

    #[error("`{found}` is not a color")]
    NotAColor { found: String },

    #[error("`{found}` is not a boolean")]
    NotABoolean { found: String },

    #[error("`{found}` is not a valid {kind} value")]
    UnknownEnumerant { kind: &'static str, found: String },
}

/// A function document is structurally invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("function definition must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("`{field}` must be {expected}, found {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error(
        "function type \"{found}\" invalid - expected identity, exponential, interval or categorical"
    )]
    UnknownFunctionType { found: String },

    #[error("base must be a positive finite number, found {base}")]
    InvalidBase { base: f64 },

    #[error("stop {index} must be an [input, output] pair")]
    StopNotPair { index: usize },

    #[error("stop {index} input must be numeric for {function_type} functions, found {found}")]
    NonNumericStopInput {
        index: usize,
        function_type: FunctionType,
        found: String,
    },

    #[error("{function_type} functions require at least one stop")]
    MissingStops { function_type: FunctionType },

    #[error("{function_type} functions cannot produce {target} values")]
    UnsupportedCombination {
        function_type: FunctionType,
        target: TargetKind,
    },

    #[error("stop {index} output cannot be used as a {target}: {source}")]
    InvalidStopOutput {
        index: usize,
        target: TargetKind,
        source: CoercionError,
    },

    #[error("stop {index} output is an array; split the function before evaluating it")]
    UnsplitArrayOutput { index: usize },

    #[error("default value cannot be used as a {target}: {source}")]
    InvalidDefault {
        target: TargetKind,
        source: CoercionError,
    },

    #[error("stop {index} output must be a non-empty array of font names")]
    InvalidFontStack { index: usize },

    #[error("zoom-and-property functions must be reduced to a single input before use")]
    ZoomAndProperty,

    #[error("cannot split function: stop {index} output is not an array")]
    SplitNonArrayOutput { index: usize },

    #[error("cannot split function: stop {index} output has {found} components, expected {expected}")]
    SplitDimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl SpecError {
    /// A stable identifier for the error, for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::NotAnObject { .. } => "stylefn::not_an_object",
            SpecError::InvalidField { .. } => "stylefn::invalid_field",
            SpecError::UnknownFunctionType { .. } => "stylefn::unknown_type",
            SpecError::InvalidBase { .. } => "stylefn::invalid_base",
            SpecError::StopNotPair { .. } => "stylefn::stop_not_pair",
            SpecError::NonNumericStopInput { .. } => "stylefn::non_numeric_stop",
            SpecError::MissingStops { .. } => "stylefn::missing_stops",
            SpecError::UnsupportedCombination { .. } => "stylefn::unsupported",
            SpecError::InvalidStopOutput { .. } => "stylefn::invalid_stop_output",
            SpecError::UnsplitArrayOutput { .. } => "stylefn::unsplit_array",
            SpecError::InvalidDefault { .. } => "stylefn::invalid_default",
            SpecError::InvalidFontStack { .. } => "stylefn::font_stack",
            SpecError::ZoomAndProperty => "stylefn::zoom_and_property",
            SpecError::SplitNonArrayOutput { .. } | SpecError::SplitDimensionMismatch { .. } => {
                "stylefn::split"
            }
        }
    }

    /// A hint on how to fix the document, when one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SpecError::UnknownFunctionType { .. } => {
                Some("omit `type` to use the default for the property kind")
            }
            SpecError::InvalidBase { .. } => Some("use 1 for linear interpolation"),
            SpecError::StopNotPair { .. } => Some("write stops as [[input, output], ...]"),
            SpecError::NonNumericStopInput { .. } => {
                Some("use a categorical function to match non-numeric inputs")
            }
            SpecError::UnsupportedCombination { .. } => {
                Some("use an interval or categorical function instead")
            }
            SpecError::UnsplitArrayOutput { .. } => {
                Some("build one expression per component with `build_split`")
            }
            SpecError::ZoomAndProperty => {
                Some("evaluate the stops at the current zoom to obtain a property function")
            }
            _ => None,
        }
    }
}
