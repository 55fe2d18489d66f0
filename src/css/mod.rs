//! Style model: typed styles, property vocabulary, output formatting.

pub mod scalar;
pub mod styles;
pub mod properties;
pub mod serialize;

use serde_json::{Map, Value};

use crate::css::properties::{Property, PropertyError, PropertyValue};
use crate::css::styles::Style;

impl Style {
    /// Build a style from a native style object, `{"flexDirection": "row", "gap": 8}`.
    ///
    /// `null` values are skipped: they mean "no override for that key".
    pub fn from_native_json(object: &Map<String, Value>) -> Result<Style, PropertyError> {
        let mut style = Style::new();
        for (key, value) in object {
            let property = Property::from_name(key)
                .ok_or_else(|| PropertyError::UnknownProperty(key.clone()))?;
            let values = match value {
                Value::Null => continue,
                Value::Number(n) => match n.as_f64() {
                    Some(n) => vec![PropertyValue::Number(n as f32)],
                    None => return Err(invalid_json(key, value)),
                },
                // Colors are opaque (`rgba(0, 0, 0, 0.5)`, `#fff`).
                Value::String(s)
                    if matches!(property, Property::BackgroundColor | Property::Color) =>
                {
                    vec![PropertyValue::String(s.clone())]
                }
                Value::String(s) => properties::parse_values(s, key)?,
                _ => return Err(invalid_json(key, value)),
            };
            properties::apply_property(&mut style, property, &values)?;
        }
        Ok(style)
    }
}

fn invalid_json(key: &str, value: &Value) -> PropertyError {
    PropertyError::InvalidValue {
        property: key.to_string(),
        message: format!("expected a number or string, got: {value}"),
    }
}
