/*
 * Identity functions: the input itself, coerced to the target kind.
 */

mod cases;

use cases::{empty, property, zoom};
use serde_json::json;
use stylefn::TargetKind;

function_case! {
    name: numbers_pass_through,
    function: { "property": "temperature", "type": "identity", "default": -1 },
    kind: TargetKind::Number,
    evaluate: [
        property("temperature", json!(50.0)) => Some("50"),
        property("temperature", json!("12.5")) => Some("12.5"),
        property("temperature", json!("NOT_A_VALID_NUMBER")) => Some("-1"),
        property("pressure", json!(50.0)) => Some("-1"),
    ],
}

function_case! {
    name: colors_pass_through,
    function: { "property": "fill", "type": "identity" },
    kind: TargetKind::Color,
    evaluate: [
        property("fill", json!("#ABCDEF")) => Some("#ABCDEF"),
        property("fill", json!("rebeccapurple")) => Some("#663399"),
        property("fill", json!("hsl(0, 100%, 50%)")) => Some("#FF0000"),
        property("fill", json!(12)) => None,
    ],
}

function_case! {
    name: strings_take_any_value,
    function: { "property": "name", "type": "identity" },
    kind: TargetKind::String,
    evaluate: [
        property("name", json!("Main Street")) => Some("Main Street"),
        property("name", json!(42)) => Some("42"),
        property("name", json!(true)) => Some("true"),
    ],
}

function_case! {
    name: zoom_identity,
    function: { "type": "identity" },
    kind: TargetKind::Number,
    evaluate: [
        zoom(14.0) => Some("14"),
        empty() => None,
    ],
}

function_case! {
    name: default_must_coerce,
    function: { "property": "fill", "type": "identity", "default": "not-a-color" },
    kind: TargetKind::Color,
    error: "stylefn::invalid_default",
}
