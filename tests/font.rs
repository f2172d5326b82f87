/*
 * text-font functions: interval functions over font stacks.
 */

mod cases;

use cases::zoom;
use pretty_assertions::assert_eq;
use serde_json::json;
use stylefn::{FunctionSpec, SpecError, TypedValue, build_font};

fn font_at(document: serde_json::Value, level: f64) -> Option<TypedValue> {
    let spec = FunctionSpec::from_json(&document).unwrap();
    build_font(&spec).unwrap().evaluate(&zoom(level))
}

fn name(font: &str) -> Option<TypedValue> {
    Some(TypedValue::String(font.to_string()))
}

#[test]
fn first_font_of_selected_stack() {
    let document = json!({
        "stops": [
            [0, ["Open Sans Regular", "Arial Unicode MS Regular"]],
            [8, ["Open Sans Semibold", "Arial Unicode MS Bold"]]
        ]
    });
    assert_eq!(font_at(document.clone(), 4.0), name("Open Sans Regular"));
    assert_eq!(font_at(document, 9.0), name("Open Sans Semibold"));
}

#[test]
fn default_stack_below_range() {
    let document = json!({
        "stops": [[10, ["Noto Sans Bold"]]],
        "default": ["Noto Sans Regular"]
    });
    assert_eq!(font_at(document, 2.0), name("Noto Sans Regular"));
}

#[test]
fn stops_must_be_font_stacks() {
    let spec = FunctionSpec::from_json(&json!({"stops": [[0, "Noto Sans"]]})).unwrap();
    assert_eq!(
        build_font(&spec).unwrap_err(),
        SpecError::InvalidFontStack { index: 0 }
    );
}
