//! Compiled, evaluable form of a style function.

use super::context::FeatureContext;
use crate::casting::{coerce, to_number};
use crate::errors::CoercionError;
use crate::function::FunctionType;
use crate::interpolate::Interpolation;
use crate::stops::{Bracket, CategoricalTable, StopsTable};
use crate::values::{RawValue, TargetKind, TypedValue};
use std::borrow::Cow;
use tracing::trace;

/// Where an expression takes its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Zoom,
    Property(String),
}

impl InputSource {
    fn read<'c>(&self, context: &'c impl FeatureContext) -> Option<Input<'c>> {
        match self {
            // A NaN or infinite zoom has no JSON form and counts as absent.
            InputSource::Zoom => context
                .zoom()
                .filter(|zoom| zoom.is_finite())
                .map(Input::Zoom),
            InputSource::Property(name) => context.property(name).map(Input::Raw),
        }
    }
}

enum Input<'c> {
    Zoom(f64),
    Raw(&'c RawValue),
}

impl Input<'_> {
    fn number(&self) -> Result<f64, CoercionError> {
        match self {
            Input::Zoom(zoom) => Ok(*zoom),
            Input::Raw(raw) => to_number(raw),
        }
    }

    fn raw(&self) -> Cow<'_, RawValue> {
        match self {
            Input::Zoom(zoom) => Cow::Owned(RawValue::from(*zoom)),
            Input::Raw(raw) => Cow::Borrowed(*raw),
        }
    }
}

/// Lookup tables with their outputs already coerced to the target kind.
///
/// Interval and categorical outputs that failed to coerce are kept as `None`
/// and resolve to the default when selected.
#[derive(Debug, Clone)]
pub(crate) enum Strategy {
    Identity,
    Exponential {
        interpolation: Interpolation,
        table: StopsTable<TypedValue>,
    },
    Interval {
        table: StopsTable<Option<TypedValue>>,
        /// Result for inputs below the first key.
        below: Option<TypedValue>,
    },
    Categorical {
        table: CategoricalTable<Option<TypedValue>>,
    },
}

/// A style function ready to be evaluated.
///
/// Built by [`build`](crate::evaluator::build). Expressions own all their
/// data and never change, so one expression can be shared by any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) function_type: FunctionType,
    pub(crate) input: InputSource,
    pub(crate) target: TargetKind,
    pub(crate) strategy: Strategy,
    pub(crate) default: Option<TypedValue>,
}

impl Expression {
    pub fn function_type(&self) -> FunctionType {
        self.function_type
    }

    pub fn input(&self) -> &InputSource {
        &self.input
    }

    pub fn target(&self) -> TargetKind {
        self.target
    }

    pub fn default_value(&self) -> Option<&TypedValue> {
        self.default.as_ref()
    }

    /// Evaluate against `context`.
    ///
    /// A missing input, an input or output that does not coerce, and a
    /// lookup miss all resolve to the default. Returns `None` only when the
    /// default is needed and the function has none.
    pub fn evaluate(&self, context: &impl FeatureContext) -> Option<TypedValue> {
        let Some(input) = self.input.read(context) else {
            trace!(input = ?self.input, "input absent, using default");
            return self.default.clone();
        };
        match self.lookup(&input) {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                trace!(function_type = %self.function_type, "no stop matched, using default");
                self.default.clone()
            }
            Err(err) => {
                trace!(error = %err, "input not usable, using default");
                self.default.clone()
            }
        }
    }

    /// Evaluate against `context`, substituting `fallback` where
    /// [`evaluate`](Self::evaluate) would return `None`.
    pub fn evaluate_or(&self, context: &impl FeatureContext, fallback: TypedValue) -> TypedValue {
        self.evaluate(context).unwrap_or(fallback)
    }

    fn lookup(&self, input: &Input<'_>) -> Result<Option<TypedValue>, CoercionError> {
        match &self.strategy {
            Strategy::Identity => coerce(&input.raw(), &self.target).map(Some),
            Strategy::Exponential {
                interpolation,
                table,
            } => {
                let x = input.number()?;
                Ok(table.bracket(x).and_then(|bracket| match bracket {
                    Bracket::First(value) | Bracket::Last(value) => Some(value.clone()),
                    Bracket::Between { lower, upper } => blend(interpolation, x, lower, upper),
                }))
            }
            Strategy::Interval { table, below } => {
                let x = input.number()?;
                Ok(match table.step(x) {
                    Some(value) => value.clone(),
                    None => below.clone(),
                })
            }
            Strategy::Categorical { table } => {
                Ok(table.get(&input.raw()).and_then(|value| value.clone()))
            }
        }
    }
}

fn blend(
    interpolation: &Interpolation,
    x: f64,
    (x0, y0): (f64, &TypedValue),
    (x1, y1): (f64, &TypedValue),
) -> Option<TypedValue> {
    match (y0, y1) {
        (TypedValue::Number(a), TypedValue::Number(b)) => Some(TypedValue::Number(
            interpolation.number(x, x0, *a, x1, *b),
        )),
        (TypedValue::Color(a), TypedValue::Color(b)) => Some(TypedValue::Color(
            interpolation.color(x, x0, *a, x1, *b),
        )),
        _ => None,
    }
}
