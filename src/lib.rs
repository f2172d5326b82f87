//! stylefn - Stops-based style function evaluation
//!
//! # Overview
//!
//! Map style documents describe paint and layout properties as *functions*
//! of the current zoom level or of a feature attribute:
//!
//! ```json
//! { "property": "temperature", "type": "interval", "default": "#0F0F0F",
//!   "stops": [[-1000, "#000000"], [-30, "#00FF00"], [0, "#0000FF"]] }
//! ```
//!
//! This crate validates such definitions, compiles them into [`Expression`]s,
//! and evaluates them into typed values (numbers, colors, strings, booleans
//! and enumerants).
//!
//! # Quick Start
//!
//! ```
//! use serde_json::{Map, json};
//! use stylefn::{EvalContext, TargetKind, compile};
//!
//! let fill = compile(
//!     r##"{"property": "temperature", "type": "interval", "default": "#0F0F0F",
//!          "stops": [[-1000, "#000000"], [-30, "#00FF00"], [0, "#0000FF"]]}"##,
//!     TargetKind::Color,
//! )
//! .unwrap();
//!
//! let mut feature = Map::new();
//! feature.insert("temperature".to_string(), json!(-12));
//!
//! let color = fill.evaluate(&EvalContext::for_feature(&feature)).unwrap();
//! assert_eq!(color.to_string(), "#00FF00");
//! ```
//!
//! # Function kinds
//!
//! - **exponential**: interpolates numbers and colors between stops
//! - **interval**: steps to the output of the last stop at or below the input
//! - **categorical**: matches the input exactly against stop keys
//! - **identity**: uses the input itself
//!
//! Vector-valued functions (stop outputs that are arrays) are split into one
//! function per component with [`build_split`].

mod error;
mod error_renderer;

pub use error::{Error, JsonError};
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from stylefn_core
pub use stylefn_core::evaluator::{
    InputSource, build, build_font, build_font_with_options, build_split,
    build_split_with_options, build_with_options,
};
pub use stylefn_core::{
    BuildOptions, CoercionError, Color, EnumKind, EnumValue, EvalContext, Expression,
    FeatureContext, FunctionCategory, FunctionSpec, FunctionType, RawValue, SpecError, Stop,
    StopOrder, TargetKind, TypedValue, coerce,
};
pub use stylefn_core::{casting, function, interpolate, stops, values};

/// Parse and validate a function document.
///
/// `text` is the JSON text of the document; syntax errors are reported
/// against it.
pub fn parse_function(text: &str) -> Result<FunctionSpec, Error> {
    parse_named("<function>", text)
}

/// Like [`parse_function`], naming the source `name` in error reports.
pub fn parse_named(name: &str, text: &str) -> Result<FunctionSpec, Error> {
    let document: RawValue =
        serde_json::from_str(text).map_err(|e| JsonError::new(name, text, &e))?;
    Ok(FunctionSpec::from_json(&document)?)
}

/// Parse a function document and build an expression producing `target`
/// values.
pub fn compile(text: &str, target: TargetKind) -> Result<Expression, Error> {
    let spec = parse_function(text)?;
    Ok(build(&spec, target)?)
}
