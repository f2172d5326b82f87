//! Target kinds and the typed values an expression produces.

use super::color::Color;
use core::fmt;
use serde::Serialize;

/// A closed set of named enumerants, such as the values of `line-cap`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumKind {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl EnumKind {
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    /// Find the enumerant matching `text`, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn lookup(&'static self, text: &str) -> Option<EnumValue> {
        let text = text.trim();
        self.variants
            .iter()
            .position(|variant| variant.eq_ignore_ascii_case(text))
            .map(|index| EnumValue { kind: self, index })
    }
}

pub static LINE_CAP: EnumKind = EnumKind::new("line-cap", &["butt", "round", "square"]);
pub static LINE_JOIN: EnumKind = EnumKind::new("line-join", &["bevel", "round", "miter"]);
pub static TEXT_TRANSFORM: EnumKind =
    EnumKind::new("text-transform", &["none", "uppercase", "lowercase"]);
pub static TEXT_ANCHOR: EnumKind = EnumKind::new(
    "text-anchor",
    &[
        "center",
        "left",
        "right",
        "top",
        "bottom",
        "top-left",
        "top-right",
        "bottom-left",
        "bottom-right",
    ],
);
pub static SYMBOL_PLACEMENT: EnumKind =
    EnumKind::new("symbol-placement", &["point", "line", "line-center"]);
pub static VISIBILITY: EnumKind = EnumKind::new("visibility", &["visible", "none"]);

/// Every built-in enum kind, for lookups by name.
pub static BUILTIN_ENUMS: [&'static EnumKind; 6] = [
    &LINE_CAP,
    &LINE_JOIN,
    &TEXT_TRANSFORM,
    &TEXT_ANCHOR,
    &SYMBOL_PLACEMENT,
    &VISIBILITY,
];

/// One enumerant of an [`EnumKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub kind: &'static EnumKind,
    pub index: usize,
}

impl EnumValue {
    pub fn name(&self) -> &'static str {
        self.kind.variants[self.index]
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of value an expression must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Number,
    Color,
    String,
    Boolean,
    Enum(&'static EnumKind),
}

impl TargetKind {
    /// Whether values of this kind can be interpolated between stops.
    pub fn is_continuous(&self) -> bool {
        matches!(self, TargetKind::Number | TargetKind::Color)
    }

    /// Resolve a kind from its name: `number`, `color`, `string`, `boolean`,
    /// or the name of a built-in enum such as `line-cap`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "number" => Some(TargetKind::Number),
            "color" => Some(TargetKind::Color),
            "string" => Some(TargetKind::String),
            "boolean" => Some(TargetKind::Boolean),
            other => BUILTIN_ENUMS
                .iter()
                .copied()
                .find(|kind| kind.name == other)
                .map(TargetKind::Enum),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Number => write!(f, "number"),
            TargetKind::Color => write!(f, "color"),
            TargetKind::String => write!(f, "string"),
            TargetKind::Boolean => write!(f, "boolean"),
            TargetKind::Enum(kind) => write!(f, "enum {}", kind.name),
        }
    }
}

/// A coerced value of one of the target kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Number(f64),
    Color(Color),
    String(String),
    Boolean(bool),
    Enum(EnumValue),
}

impl TypedValue {
    pub fn kind(&self) -> TargetKind {
        match self {
            TypedValue::Number(_) => TargetKind::Number,
            TypedValue::Color(_) => TargetKind::Color,
            TypedValue::String(_) => TargetKind::String,
            TypedValue::Boolean(_) => TargetKind::Boolean,
            TypedValue::Enum(value) => TargetKind::Enum(value.kind),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            TypedValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            TypedValue::Enum(e) => Some(*e),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Number(n) => write!(f, "{}", n),
            TypedValue::Color(c) => write!(f, "{}", c),
            TypedValue::String(s) => write!(f, "{}", s),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Enum(e) => write!(f, "{}", e),
        }
    }
}

impl Serialize for TypedValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypedValue::Number(n) => serializer.serialize_f64(*n),
            TypedValue::Color(c) => c.serialize(serializer),
            TypedValue::String(s) => serializer.serialize_str(s),
            TypedValue::Boolean(b) => serializer.serialize_bool(*b),
            TypedValue::Enum(e) => serializer.serialize_str(e.name()),
        }
    }
}
