/*
 * Exponential functions: interpolation between the stops around the input.
 */

mod cases;

use cases::{empty, property, zoom};
use serde_json::json;
use stylefn::{EvalContext, TargetKind, TypedValue, compile};

function_case! {
    name: linear_colors,
    function: { "stops": [[0, "#000000"], [100, "#FFFFFF"]] },
    kind: TargetKind::Color,
    evaluate: [
        zoom(-5.0) => Some("#000000"),
        zoom(0.0) => Some("#000000"),
        zoom(50.0) => Some("#808080"),
        zoom(100.0) => Some("#FFFFFF"),
        zoom(120.0) => Some("#FFFFFF"),
    ],
}

function_case! {
    name: linear_numbers,
    function: { "property": "level", "stops": [[0, 0], [10, 100]], "default": -1 },
    kind: TargetKind::Number,
    evaluate: [
        property("level", json!(2.5)) => Some("25"),
        property("level", json!("50%")) => Some("5"),
        property("level", json!([1])) => Some("-1"),
        empty() => Some("-1"),
    ],
}

function_case! {
    name: colors_with_alpha,
    function: { "stops": [[0, "rgba(0, 0, 0, 0)"], [10, "rgba(0, 0, 0, 1)"]] },
    kind: TargetKind::Color,
    evaluate: [
        zoom(0.0) => Some("#00000000"),
        zoom(10.0) => Some("#000000"),
    ],
}

fn number_at(text: &str, zoom: f64) -> f64 {
    compile(text, TargetKind::Number)
        .unwrap()
        .evaluate(&EvalContext::at_zoom(zoom))
        .and_then(|value| value.as_number())
        .unwrap()
}

#[test]
fn base_above_one_favors_lower_stop() {
    let value = number_at(r#"{"base": 1.9, "stops": [[0, 12], [6, 24], [12, 48]]}"#, 9.0);
    assert!(value > 24.0 && value < 36.0, "got {value}");
}

#[test]
fn base_below_one_favors_upper_stop() {
    let value = number_at(r#"{"base": 0.1, "stops": [[0, 12], [6, 24], [12, 48]]}"#, 9.0);
    assert!(value > 36.0, "got {value}");
}

#[test]
fn base_one_is_linear() {
    let value = number_at(r#"{"base": 1, "stops": [[0, 12], [6, 24], [12, 48]]}"#, 9.0);
    assert_eq!(value, 36.0);
}

#[test]
fn color_midpoint() {
    let expr = compile(
        r##"{"stops": [[0, "#0000FF"], [100, "#FF0000"]]}"##,
        TargetKind::Color,
    )
    .unwrap();
    let Some(TypedValue::Color(mid)) = expr.evaluate(&EvalContext::at_zoom(50.0)) else {
        panic!("expected a color");
    };
    assert!(mid.r.abs_diff(128) <= 1);
    assert_eq!(mid.g, 0);
    assert!(mid.b.abs_diff(128) <= 1);
}

function_case! {
    name: strings_cannot_be_interpolated,
    function: { "type": "exponential", "stops": [[0, "a"], [1, "b"]] },
    kind: TargetKind::String,
    error: "stylefn::unsupported",
}

function_case! {
    name: outputs_must_coerce,
    function: { "stops": [[0, 1], [1, "wide"]] },
    kind: TargetKind::Number,
    error: "stylefn::invalid_stop_output",
}

function_case! {
    name: stops_are_required,
    function: { "property": "level" },
    kind: TargetKind::Color,
    error: "stylefn::missing_stops",
}
