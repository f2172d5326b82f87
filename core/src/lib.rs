//! Evaluation engine for stops-based style functions.
//!
//! A style function (as found in Mapbox GL style documents) maps either the
//! current zoom level or a feature attribute to a typed output through a
//! table of stops. This crate turns such a definition into an [`Expression`]
//! that can be evaluated many times, from many threads, without locking.
//!
//! ```
//! use serde_json::json;
//! use stylefn_core::{EvalContext, FunctionSpec, TargetKind, evaluator};
//!
//! let spec = FunctionSpec::from_json(&json!({
//!     "base": 1.5,
//!     "stops": [[10, 1.0], [20, 8.0]]
//! }))
//! .unwrap();
//! let width = evaluator::build(&spec, TargetKind::Number).unwrap();
//!
//! let value = width.evaluate(&EvalContext::at_zoom(25.0)).unwrap();
//! assert_eq!(value.as_number(), Some(8.0));
//! ```

pub mod casting;
pub mod errors;
pub mod evaluator;
pub mod function;
pub mod interpolate;
pub mod options;
pub mod stops;
pub mod values;

pub use casting::coerce;
pub use errors::{CoercionError, SpecError};
pub use evaluator::{EvalContext, Expression, FeatureContext};
pub use function::{FunctionCategory, FunctionSpec, FunctionType, Stop};
pub use options::{BuildOptions, StopOrder};
pub use values::{Color, EnumKind, EnumValue, RawValue, TargetKind, TypedValue};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
