//! What an expression reads its input from.

use crate::values::{Properties, RawValue};

/// The state of the map and the feature an expression is evaluated against.
pub trait FeatureContext {
    /// The current zoom level, if known.
    fn zoom(&self) -> Option<f64>;

    /// The value of the feature attribute `name`, if present.
    fn property(&self, name: &str) -> Option<&RawValue>;
}

impl<T: FeatureContext + ?Sized> FeatureContext for &T {
    fn zoom(&self) -> Option<f64> {
        (**self).zoom()
    }

    fn property(&self, name: &str) -> Option<&RawValue> {
        (**self).property(name)
    }
}

/// A feature's attributes on their own, with no zoom level.
impl FeatureContext for Properties {
    fn zoom(&self) -> Option<f64> {
        None
    }

    fn property(&self, name: &str) -> Option<&RawValue> {
        self.get(name)
    }
}

/// A borrowed zoom level and attribute map.
///
/// ```
/// use serde_json::{Map, json};
/// use stylefn_core::{EvalContext, FeatureContext};
///
/// let mut properties = Map::new();
/// properties.insert("class".to_string(), json!("road"));
///
/// let context = EvalContext::at_zoom(12.0).with_properties(&properties);
/// assert_eq!(context.zoom(), Some(12.0));
/// assert_eq!(context.property("class"), Some(&json!("road")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalContext<'a> {
    zoom: Option<f64>,
    properties: Option<&'a Properties>,
}

impl<'a> EvalContext<'a> {
    /// A context with no zoom level and no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            properties: None,
        }
    }

    pub fn for_feature(properties: &'a Properties) -> Self {
        Self {
            zoom: None,
            properties: Some(properties),
        }
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..self
        }
    }

    pub fn with_properties(self, properties: &'a Properties) -> Self {
        Self {
            properties: Some(properties),
            ..self
        }
    }
}

impl FeatureContext for EvalContext<'_> {
    fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    fn property(&self, name: &str) -> Option<&RawValue> {
        self.properties?.get(name)
    }
}
