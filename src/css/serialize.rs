//! Output formatting for the two rendering targets.
//!
//! Both targets read the same [`Style`]; they differ only in key vocabulary
//! and units:
//!
//! - [`Target::Web`]: kebab-case CSS, pixel-suffixed lengths,
//!   `flex-direction: row; gap: 16px;`
//! - [`Target::Native`]: a JSON object with camelCase keys and bare numbers,
//!   `{"flexDirection":"row","gap":16}`
//!
//! Padding and margin are stored per side and collapsed into the target's
//! shorthand when the sides agree.

use serde_json::{Map, Number, Value};

use crate::css::properties::Property;
use crate::css::scalar::{format_number, Scalar, Sides, Unit};
use crate::css::styles::{Display, Style};

/// A rendering target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// Browser-style host: CSS declarations with pixel units.
    Web,
    /// Native-style host: style objects with unitless numbers.
    #[default]
    Native,
}

/// One formatted declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedValue {
    Text(String),
    Number(f32),
}

impl FormattedValue {
    fn into_json(self) -> Value {
        match self {
            FormattedValue::Text(s) => Value::String(s),
            // Non-finite numbers have no JSON form.
            FormattedValue::Number(n) => Number::from_f64(f64::from(n))
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

impl std::fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormattedValue::Text(s) => write!(f, "{s}"),
            FormattedValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

impl Target {
    fn key(&self, property: Property) -> &'static str {
        match self {
            Target::Web => property.web_name(),
            Target::Native => property.native_name(),
        }
    }

    fn scalar(&self, scalar: Scalar) -> FormattedValue {
        match (self, scalar.unit) {
            (Target::Native, Unit::Px) => FormattedValue::Number(scalar.value),
            _ => FormattedValue::Text(scalar.to_string()),
        }
    }

    fn keyword(&self, keyword: &'static str) -> FormattedValue {
        FormattedValue::Text(keyword.to_string())
    }

    /// Format `style` into ordered `(key, value)` pairs. Unset properties are
    /// omitted.
    pub fn declarations(&self, style: &Style) -> Vec<(&'static str, FormattedValue)> {
        let mut out = Vec::new();

        match (self, style.display) {
            // Native containers are always flex; only `none` is meaningful.
            (Target::Native, Some(Display::Flex | Display::InlineFlex)) => {}
            (_, Some(display)) => out.push((self.key(Property::Display), self.keyword(display.as_css()))),
            (_, None) => {}
        }
        if let Some(v) = style.flex_direction {
            out.push((self.key(Property::FlexDirection), self.keyword(v.as_css())));
        }
        if let Some(v) = style.flex_wrap {
            out.push((self.key(Property::FlexWrap), self.keyword(v.as_css())));
        }
        if let Some(v) = style.justify_content {
            let v = match self {
                Target::Web => v,
                Target::Native => v.unsafe_keyword(),
            };
            out.push((self.key(Property::JustifyContent), self.keyword(v.as_css())));
        }
        if let Some(v) = style.align_items {
            let v = match self {
                Target::Web => v,
                Target::Native => v.unsafe_keyword(),
            };
            out.push((self.key(Property::AlignItems), self.keyword(v.as_css())));
        }
        if let Some(v) = style.align_content {
            out.push((self.key(Property::AlignContent), self.keyword(v.as_css())));
        }
        if let Some(v) = style.align_self {
            out.push((self.key(Property::AlignSelf), self.keyword(v.as_css())));
        }

        if let Some(flex) = style.flex {
            let value = match self {
                Target::Web => FormattedValue::Text(format!("{} 1 0%", format_number(flex))),
                Target::Native => FormattedValue::Number(flex),
            };
            out.push((self.key(Property::Flex), value));
        }
        if let Some(v) = style.flex_grow {
            out.push((self.key(Property::FlexGrow), FormattedValue::Number(v)));
        }
        if let Some(v) = style.flex_shrink {
            out.push((self.key(Property::FlexShrink), FormattedValue::Number(v)));
        }

        // Shorthand first, so an axis gap set alongside it still wins.
        for (property, value) in [
            (Property::Gap, style.gap),
            (Property::RowGap, style.row_gap),
            (Property::ColumnGap, style.column_gap),
        ] {
            if let Some(v) = value {
                out.push((self.key(property), self.scalar(v)));
            }
        }

        self.sides(&mut out, &style.padding, SidesKeys::PADDING);
        self.sides(&mut out, &style.margin, SidesKeys::MARGIN);

        for (property, value) in [
            (Property::Width, style.width),
            (Property::Height, style.height),
            (Property::MinWidth, style.min_width),
            (Property::MinHeight, style.min_height),
            (Property::MaxWidth, style.max_width),
            (Property::MaxHeight, style.max_height),
        ] {
            if let Some(v) = value {
                out.push((self.key(property), self.scalar(v)));
            }
        }

        if let Some(ref v) = style.background_color {
            out.push((self.key(Property::BackgroundColor), FormattedValue::Text(v.clone())));
        }
        if let Some(ref v) = style.color {
            out.push((self.key(Property::Color), FormattedValue::Text(v.clone())));
        }

        out
    }

    /// Collapse per-side values into the target's shorthand where possible.
    fn sides(
        &self,
        out: &mut Vec<(&'static str, FormattedValue)>,
        sides: &Sides,
        keys: SidesKeys,
    ) {
        if let Some(all) = sides.uniform() {
            out.push((self.key(keys.all), self.scalar(all)));
            return;
        }

        match self {
            Target::Web => {
                if let (Some(v), Some(h)) = (sides.vertical(), sides.horizontal()) {
                    let value = format!("{v} {h}");
                    out.push((self.key(keys.all), FormattedValue::Text(value)));
                    return;
                }
                self.discrete(out, sides, &keys);
            }
            Target::Native => {
                let vertical = sides.vertical();
                let horizontal = sides.horizontal();
                let remaining = Sides {
                    top: if vertical.is_some() { None } else { sides.top },
                    bottom: if vertical.is_some() { None } else { sides.bottom },
                    left: if horizontal.is_some() { None } else { sides.left },
                    right: if horizontal.is_some() { None } else { sides.right },
                };
                if let Some(v) = vertical {
                    out.push((self.key(keys.vertical), self.scalar(v)));
                }
                if let Some(h) = horizontal {
                    out.push((self.key(keys.horizontal), self.scalar(h)));
                }
                self.discrete(out, &remaining, &keys);
            }
        }
    }

    fn discrete(
        &self,
        out: &mut Vec<(&'static str, FormattedValue)>,
        sides: &Sides,
        keys: &SidesKeys,
    ) {
        for (property, value) in [
            (keys.top, sides.top),
            (keys.right, sides.right),
            (keys.bottom, sides.bottom),
            (keys.left, sides.left),
        ] {
            if let Some(v) = value {
                out.push((self.key(property), self.scalar(v)));
            }
        }
    }
}

/// Property names for one four-sided property family.
struct SidesKeys {
    all: Property,
    vertical: Property,
    horizontal: Property,
    top: Property,
    right: Property,
    bottom: Property,
    left: Property,
}

impl SidesKeys {
    const PADDING: SidesKeys = SidesKeys {
        all: Property::Padding,
        vertical: Property::PaddingVertical,
        horizontal: Property::PaddingHorizontal,
        top: Property::PaddingTop,
        right: Property::PaddingRight,
        bottom: Property::PaddingBottom,
        left: Property::PaddingLeft,
    };

    const MARGIN: SidesKeys = SidesKeys {
        all: Property::Margin,
        vertical: Property::MarginVertical,
        horizontal: Property::MarginHorizontal,
        top: Property::MarginTop,
        right: Property::MarginRight,
        bottom: Property::MarginBottom,
        left: Property::MarginLeft,
    };
}

impl Style {
    /// Format as a web `style` attribute: `flex-direction: row; gap: 16px;`.
    pub fn to_css(&self) -> String {
        Target::Web
            .declarations(self)
            .into_iter()
            .map(|(key, value)| format!("{key}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format as a native style object.
    pub fn to_native(&self) -> Map<String, Value> {
        Target::Native
            .declarations(self)
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.into_json()))
            .collect()
    }
}
