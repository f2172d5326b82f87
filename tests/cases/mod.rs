#![allow(dead_code)]

use serde_json::Value;
use stylefn::{Expression, FeatureContext, FunctionSpec, RawValue, SpecError, TargetKind};

/// An owned zoom level and attribute map, for table-driven tests.
#[derive(Debug, Default)]
pub struct Feature {
    pub zoom: Option<f64>,
    pub properties: serde_json::Map<String, Value>,
}

impl Feature {
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }
}

impl FeatureContext for Feature {
    fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    fn property(&self, name: &str) -> Option<&RawValue> {
        self.properties.get(name)
    }
}

pub fn zoom(zoom: f64) -> Feature {
    Feature {
        zoom: Some(zoom),
        ..Feature::default()
    }
}

pub fn property(name: &str, value: Value) -> Feature {
    Feature::default().with(name, value)
}

/// A feature with nothing set.
pub fn empty() -> Feature {
    Feature::default()
}

pub fn build_case(document: Value, kind: TargetKind) -> Expression {
    let spec = FunctionSpec::from_json(&document)
        .unwrap_or_else(|e| panic!("invalid document {document}: {e}"));
    stylefn::build(&spec, kind).unwrap_or_else(|e| panic!("build failed for {document}: {e}"))
}

pub fn build_error(document: Value, kind: TargetKind) -> SpecError {
    match FunctionSpec::from_json(&document) {
        Ok(spec) => match stylefn::build(&spec, kind) {
            Ok(_) => panic!("expected {document} to be rejected"),
            Err(e) => e,
        },
        Err(e) => e,
    }
}

/// Declare a test that builds a function and checks its results.
///
/// Expected values are written in display form (`"#FF0000"`, `"2.5"`,
/// `"round"`), or `None` when the function has no default to fall back on.
///
/// ```ignore
/// function_case! {
///     name: roads,
///     function: { "property": "class", "type": "categorical", "stops": [["road", 3]] },
///     kind: TargetKind::Number,
///     evaluate: [
///         property("class", json!("road")) => Some("3"),
///         property("class", json!("lane")) => None,
///     ],
/// }
/// ```
#[macro_export]
macro_rules! function_case {
    (
        name: $name:ident,
        function: $function:tt,
        kind: $kind:expr,
        evaluate: [ $( $context:expr => $expected:expr ),* $(,)? ] $(,)?
    ) => {
        #[test]
        fn $name() {
            let expr = $crate::cases::build_case(serde_json::json!($function), $kind);
            $(
                let context = $context;
                let actual = expr.evaluate(&context).map(|value| value.to_string());
                let expected: Option<&str> = $expected;
                pretty_assertions::assert_eq!(
                    actual.as_deref(),
                    expected,
                    "evaluating {:?}",
                    context
                );
            )*
        }
    };
    (
        name: $name:ident,
        function: $function:tt,
        kind: $kind:expr,
        error: $code:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let error = $crate::cases::build_error(serde_json::json!($function), $kind);
            pretty_assertions::assert_eq!(error.code(), $code, "unexpected error: {}", error);
        }
    };
}
