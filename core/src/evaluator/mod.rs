//! Building evaluable expressions from function definitions.
//!
//! [`build`] validates a [`FunctionSpec`] against the kind of value it must
//! produce and compiles it into an [`Expression`]. Every structural problem
//! is reported here, as a [`SpecError`]; evaluation itself never fails.
//!
//! ## Example
//!
//! ```
//! use serde_json::{Map, json};
//! use stylefn_core::{EvalContext, FunctionSpec, TargetKind, TypedValue, evaluator};
//!
//! let spec = FunctionSpec::from_json(&json!({
//!     "property": "class",
//!     "type": "categorical",
//!     "stops": [["trail", 1], ["dirtroad", 2], ["road", 3]],
//!     "default": -1
//! }))
//! .unwrap();
//! let rank = evaluator::build(&spec, TargetKind::Number).unwrap();
//!
//! let mut feature = Map::new();
//! feature.insert("class".to_string(), json!("dirtroad"));
//! assert_eq!(
//!     rank.evaluate(&EvalContext::for_feature(&feature)),
//!     Some(TypedValue::Number(2.0))
//! );
//! ```

mod context;
mod expression;


pub use context::{EvalContext, FeatureContext};
pub use expression::{Expression, InputSource};

use crate::casting::coerce;
use crate::errors::SpecError;
use crate::function::{FunctionCategory, FunctionSpec, FunctionType, Stop};
use crate::interpolate::Interpolation;
use crate::options::{BuildOptions, StopOrder};
use crate::stops::{CategoricalTable, StopsTable};
use crate::values::{RawValue, TargetKind, raw};
use expression::Strategy;
use serde_json::Value;
use tracing::{debug, warn};

/// Build an expression producing `target` values, with default options.
pub fn build(spec: &FunctionSpec, target: TargetKind) -> Result<Expression, SpecError> {
    build_with_options(spec, target, &BuildOptions::default())
}

/// Build an expression producing `target` values.
///
/// The function type is the one named by the document, or else
/// [`FunctionType::default_for`] the target. Stop outputs and the default are
/// coerced to `target` once, here.
pub fn build_with_options(
    spec: &FunctionSpec,
    target: TargetKind,
    options: &BuildOptions,
) -> Result<Expression, SpecError> {
    let category = spec.category();
    if category.contains(FunctionCategory::ZOOM | FunctionCategory::PROPERTY) {
        return Err(SpecError::ZoomAndProperty);
    }

    let function_type = spec.type_with_default(&target);
    if function_type == FunctionType::Exponential && !target.is_continuous() {
        return Err(SpecError::UnsupportedCombination {
            function_type,
            target,
        });
    }

    let input = match spec.property() {
        Some(name) => InputSource::Property(name.to_string()),
        None => InputSource::Zoom,
    };

    let default = spec
        .default_value()
        .map(|raw| {
            coerce(raw, &target).map_err(|source| SpecError::InvalidDefault { target, source })
        })
        .transpose()?;

    let stops = spec.stops();
    if function_type != FunctionType::Identity {
        if stops.is_empty() {
            return Err(SpecError::MissingStops { function_type });
        }
        if let Some(index) = stops.iter().position(|stop| stop.output.is_array()) {
            return Err(SpecError::UnsplitArrayOutput { index });
        }
    }

    let strategy = match function_type {
        FunctionType::Identity => Strategy::Identity,
        FunctionType::Exponential => Strategy::Exponential {
            interpolation: Interpolation::with_base(spec.base()),
            table: numeric_table(stops, function_type, options, |index, output| {
                coerce(output, &target).map_err(|source| SpecError::InvalidStopOutput {
                    index,
                    target,
                    source,
                })
            })?,
        },
        FunctionType::Interval => {
            let table = numeric_table(stops, function_type, options, |_, output| {
                Ok(coerce(output, &target).ok())
            })?;
            // Without a default, inputs below the first key take the first output.
            let below = default.clone().or_else(|| table.first().cloned().flatten());
            Strategy::Interval { table, below }
        }
        FunctionType::Categorical => Strategy::Categorical {
            table: CategoricalTable::new(
                stops
                    .iter()
                    .map(|stop| (stop.input.clone(), coerce(&stop.output, &target).ok()))
                    .collect(),
            ),
        },
    };

    debug!(
        %function_type,
        %target,
        inferred = spec.function_type().is_none(),
        category = ?category,
        stops = stops.len(),
        "built expression"
    );

    Ok(Expression {
        function_type,
        input,
        target,
        strategy,
        default,
    })
}

fn numeric_table<T>(
    stops: &[Stop],
    function_type: FunctionType,
    options: &BuildOptions,
    mut output: impl FnMut(usize, &RawValue) -> Result<T, SpecError>,
) -> Result<StopsTable<T>, SpecError> {
    let entries = stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let key =
                raw::as_number(&stop.input).ok_or_else(|| SpecError::NonNumericStopInput {
                    index,
                    function_type,
                    found: raw::canonical_text(&stop.input),
                })?;
            Ok((key, output(index, &stop.output)?))
        })
        .collect::<Result<Vec<_>, SpecError>>()?;

    let mut table = StopsTable::new(entries);
    match options.stop_order {
        StopOrder::Sort => table.sort(),
        StopOrder::Trust if !table.is_sorted() => {
            warn!(%function_type, "stop keys are not in ascending order");
        }
        StopOrder::Trust => {}
    }
    Ok(table)
}

/// Split a vector-valued function and build one expression per component.
pub fn build_split(spec: &FunctionSpec, target: TargetKind) -> Result<Vec<Expression>, SpecError> {
    build_split_with_options(spec, target, &BuildOptions::default())
}

pub fn build_split_with_options(
    spec: &FunctionSpec,
    target: TargetKind,
    options: &BuildOptions,
) -> Result<Vec<Expression>, SpecError> {
    spec.split()?
        .iter()
        .map(|component| build_with_options(component, target, options))
        .collect()
}

/// Build a `text-font` expression.
///
/// Font functions are interval functions whose outputs are font stacks
/// (arrays of font names); the expression yields the first name of the
/// selected stack.
pub fn build_font(spec: &FunctionSpec) -> Result<Expression, SpecError> {
    build_font_with_options(spec, &BuildOptions::default())
}

pub fn build_font_with_options(
    spec: &FunctionSpec,
    options: &BuildOptions,
) -> Result<Expression, SpecError> {
    let target = TargetKind::String;
    match spec.function_type() {
        Some(function_type) if function_type != FunctionType::Interval => {
            return Err(SpecError::UnsupportedCombination {
                function_type,
                target,
            });
        }
        _ => {}
    }

    let stops = spec
        .stops()
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let font = primary_font(&stop.output).ok_or(SpecError::InvalidFontStack { index })?;
            Ok(Stop {
                input: stop.input.clone(),
                output: font,
            })
        })
        .collect::<Result<Vec<_>, SpecError>>()?;

    let mut fonts = FunctionSpec::new(stops).with_type(FunctionType::Interval);
    if let Some(property) = spec.property() {
        fonts = fonts.with_property(property);
    }
    if let Some(default) = spec.default_value() {
        fonts = fonts.with_default(primary_font(default).unwrap_or_else(|| default.clone()));
    }
    build_with_options(&fonts, target, options)
}

fn primary_font(stack: &RawValue) -> Option<RawValue> {
    match stack {
        Value::Array(fonts) => fonts.first().cloned(),
        _ => None,
    }
}
