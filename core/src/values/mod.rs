pub mod color;
pub mod named_colors;
pub mod raw;
pub mod typed;

pub use color::Color;
pub use raw::{Properties, RawValue};
pub use typed::{
    BUILTIN_ENUMS, EnumKind, EnumValue, LINE_CAP, LINE_JOIN, SYMBOL_PLACEMENT, TEXT_ANCHOR,
    TEXT_TRANSFORM, TargetKind, TypedValue, VISIBILITY,
};
