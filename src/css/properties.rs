//! Property vocabulary and value parsing: property values → typed [`Style`] fields.
//!
//! Every property has a kebab-case web name and a camelCase native name.
//! Lookups accept either spelling, so native style objects may use the web
//! names as well.

use crate::css::scalar::{Scalar, Sides};
use crate::css::styles::*;

/// Errors from property parsing.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

/// A supported style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Display,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    AlignContent,
    AlignSelf,
    Flex,
    FlexGrow,
    FlexShrink,
    Gap,
    RowGap,
    ColumnGap,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    PaddingVertical,
    PaddingHorizontal,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MarginVertical,
    MarginHorizontal,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    BackgroundColor,
    Color,
}

/// (property, web name, native name)
const PROPERTY_NAMES: &[(Property, &str, &str)] = &[
    (Property::Display, "display", "display"),
    (Property::FlexDirection, "flex-direction", "flexDirection"),
    (Property::FlexWrap, "flex-wrap", "flexWrap"),
    (Property::JustifyContent, "justify-content", "justifyContent"),
    (Property::AlignItems, "align-items", "alignItems"),
    (Property::AlignContent, "align-content", "alignContent"),
    (Property::AlignSelf, "align-self", "alignSelf"),
    (Property::Flex, "flex", "flex"),
    (Property::FlexGrow, "flex-grow", "flexGrow"),
    (Property::FlexShrink, "flex-shrink", "flexShrink"),
    (Property::Gap, "gap", "gap"),
    (Property::RowGap, "row-gap", "rowGap"),
    (Property::ColumnGap, "column-gap", "columnGap"),
    (Property::Padding, "padding", "padding"),
    (Property::PaddingTop, "padding-top", "paddingTop"),
    (Property::PaddingRight, "padding-right", "paddingRight"),
    (Property::PaddingBottom, "padding-bottom", "paddingBottom"),
    (Property::PaddingLeft, "padding-left", "paddingLeft"),
    (Property::PaddingVertical, "padding-block", "paddingVertical"),
    (Property::PaddingHorizontal, "padding-inline", "paddingHorizontal"),
    (Property::Margin, "margin", "margin"),
    (Property::MarginTop, "margin-top", "marginTop"),
    (Property::MarginRight, "margin-right", "marginRight"),
    (Property::MarginBottom, "margin-bottom", "marginBottom"),
    (Property::MarginLeft, "margin-left", "marginLeft"),
    (Property::MarginVertical, "margin-block", "marginVertical"),
    (Property::MarginHorizontal, "margin-inline", "marginHorizontal"),
    (Property::Width, "width", "width"),
    (Property::Height, "height", "height"),
    (Property::MinWidth, "min-width", "minWidth"),
    (Property::MinHeight, "min-height", "minHeight"),
    (Property::MaxWidth, "max-width", "maxWidth"),
    (Property::MaxHeight, "max-height", "maxHeight"),
    (Property::BackgroundColor, "background-color", "backgroundColor"),
    (Property::Color, "color", "color"),
];

impl Property {
    /// Look up a property by its web or native name.
    pub fn from_name(name: &str) -> Option<Property> {
        PROPERTY_NAMES
            .iter()
            .find(|(_, web, native)| *web == name || *native == name)
            .map(|(property, _, _)| *property)
    }

    /// The kebab-case web name.
    pub fn web_name(&self) -> &'static str {
        self.names().0
    }

    /// The camelCase native name.
    pub fn native_name(&self) -> &'static str {
        self.names().1
    }

    fn names(&self) -> (&'static str, &'static str) {
        PROPERTY_NAMES
            .iter()
            .find(|(property, _, _)| property == self)
            .map(|(_, web, native)| (*web, *native))
            .unwrap_or(("", ""))
    }
}

fn invalid(property: &str, message: impl Into<String>) -> PropertyError {
    PropertyError::InvalidValue {
        property: property.into(),
        message: message.into(),
    }
}

/// One whitespace-separated word of a property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A keyword like `row`, `space-between` or `auto`.
    Ident(String),
    /// A bare number, `10` or `0.5`.
    Number(f32),
    /// A number with a unit, `16px` or `50%`.
    Dimension(f32, String),
    /// Opaque text, used for colors.
    String(String),
}

/// Split a native string value into words: `"12px 50%"`, `"safe center"`.
pub fn parse_values(source: &str, property: &str) -> Result<Vec<PropertyValue>, PropertyError> {
    let values = source
        .split_whitespace()
        .map(|word| parse_word(word, property))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(invalid(property, "empty value"));
    }
    Ok(values)
}

fn parse_word(word: &str, property: &str) -> Result<PropertyValue, PropertyError> {
    if let Ok(n) = word.parse::<f32>() {
        return Ok(PropertyValue::Number(n));
    }
    let number_end = word
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(word.len());
    if number_end > 0 {
        let (number, unit) = word.split_at(number_end);
        return match number.parse::<f32>() {
            Ok(n) => Ok(PropertyValue::Dimension(n, unit.to_string())),
            Err(_) => Err(invalid(property, format!("malformed number: {word}"))),
        };
    }
    if word.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Ok(PropertyValue::Ident(word.to_string()));
    }
    Err(invalid(property, format!("unexpected value: {word}")))
}

/// Parse a single property value into a [`Scalar`].
///
/// Bare numbers are pixels, matching the native vocabulary.
pub fn parse_scalar(value: &PropertyValue) -> Result<Scalar, PropertyError> {
    match value {
        PropertyValue::Number(n) => Ok(Scalar::px(*n)),
        PropertyValue::Dimension(n, unit) => match unit.as_str() {
            "px" => Ok(Scalar::px(*n)),
            "%" => Ok(Scalar::percent(*n)),
            other => Err(invalid("scalar", format!("unknown unit: {other}"))),
        },
        PropertyValue::Ident(name) if name.eq_ignore_ascii_case("auto") => Ok(Scalar::auto()),
        other => Err(invalid(
            "scalar",
            format!("expected number, dimension, or 'auto', got: {other:?}"),
        )),
    }
}

/// Parse 1-4 scalar values into [`Sides`] (shorthand expansion).
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_sides(values: &[PropertyValue], property: &str) -> Result<Sides, PropertyError> {
    match values {
        [all] => Ok(Sides::all(parse_scalar(all)?)),
        [vertical, horizontal] => Ok(Sides::symmetric(
            parse_scalar(vertical)?,
            parse_scalar(horizontal)?,
        )),
        [top, horizontal, bottom] => {
            let horizontal = parse_scalar(horizontal)?;
            Ok(Sides::new(
                parse_scalar(top)?,
                horizontal,
                parse_scalar(bottom)?,
                horizontal,
            ))
        }
        [top, right, bottom, left] => Ok(Sides::new(
            parse_scalar(top)?,
            parse_scalar(right)?,
            parse_scalar(bottom)?,
            parse_scalar(left)?,
        )),
        _ => Err(invalid(
            property,
            format!("expected 1-4 values, got {}", values.len()),
        )),
    }
}

fn single<'a>(
    values: &'a [PropertyValue],
    property: &str,
) -> Result<&'a PropertyValue, PropertyError> {
    match values {
        [value] => Ok(value),
        _ => Err(invalid(
            property,
            format!("expected 1 value, got {}", values.len()),
        )),
    }
}

fn single_scalar(values: &[PropertyValue], property: &str) -> Result<Scalar, PropertyError> {
    parse_scalar(single(values, property)?)
}

fn single_number(values: &[PropertyValue], property: &str) -> Result<f32, PropertyError> {
    match single(values, property)? {
        PropertyValue::Number(n) => Ok(*n),
        other => Err(invalid(property, format!("expected a number, got: {other:?}"))),
    }
}

fn ident(value: &PropertyValue, property: &str) -> Result<String, PropertyError> {
    match value {
        PropertyValue::Ident(name) => Ok(name.clone()),
        other => Err(invalid(property, format!("expected identifier, got: {other:?}"))),
    }
}

/// Parse a keyword, optionally preceded by `safe`, e.g. `safe center`.
fn keyword<T>(
    values: &[PropertyValue],
    property: &str,
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<T, PropertyError> {
    let text = values
        .iter()
        .map(|v| ident(v, property))
        .collect::<Result<Vec<_>, _>>()?
        .join(" ");
    lookup(&text).ok_or_else(|| invalid(property, format!("unknown keyword: {text}")))
}

fn color(values: &[PropertyValue], property: &str) -> Result<String, PropertyError> {
    match single(values, property)? {
        PropertyValue::Ident(name) | PropertyValue::String(name) => Ok(name.clone()),
        other => Err(invalid(property, format!("expected a color, got: {other:?}"))),
    }
}

/// `flex: <n>` or the web expansion `flex: <grow> <shrink> <basis>`.
fn flex(values: &[PropertyValue], property: &str) -> Result<f32, PropertyError> {
    match values {
        [PropertyValue::Number(n)] => Ok(*n),
        [PropertyValue::Number(grow), PropertyValue::Number(_), _] => Ok(*grow),
        _ => Err(invalid(
            property,
            "expected <number> or <grow> <shrink> <basis>",
        )),
    }
}

/// Apply one property's values to `style`.
pub fn apply_property(
    style: &mut Style,
    property: Property,
    values: &[PropertyValue],
) -> Result<(), PropertyError> {
    let name = property.web_name();
    match property {
        Property::Display => style.display = Some(keyword(values, name, Display::from_css)?),
        Property::FlexDirection => {
            style.flex_direction = Some(keyword(values, name, FlexDirection::from_css)?)
        }
        Property::FlexWrap => style.flex_wrap = Some(keyword(values, name, FlexWrap::from_css)?),
        Property::JustifyContent => {
            style.justify_content = Some(keyword(values, name, JustifyContent::from_css)?)
        }
        Property::AlignItems => {
            style.align_items = Some(keyword(values, name, AlignItems::from_css)?)
        }
        Property::AlignContent => {
            style.align_content = Some(keyword(values, name, AlignContent::from_css)?)
        }
        Property::AlignSelf => style.align_self = Some(keyword(values, name, AlignSelf::from_css)?),
        Property::Flex => style.flex = Some(flex(values, name)?),
        Property::FlexGrow => style.flex_grow = Some(single_number(values, name)?),
        Property::FlexShrink => style.flex_shrink = Some(single_number(values, name)?),
        Property::Gap => match values {
            [gap] => style.gap = Some(parse_scalar(gap)?),
            [row, column] => {
                style.row_gap = Some(parse_scalar(row)?);
                style.column_gap = Some(parse_scalar(column)?);
            }
            _ => return Err(invalid(name, format!("expected 1-2 values, got {}", values.len()))),
        },
        Property::RowGap => style.row_gap = Some(single_scalar(values, name)?),
        Property::ColumnGap => style.column_gap = Some(single_scalar(values, name)?),
        Property::Padding => style.padding = parse_sides(values, name)?,
        Property::PaddingTop => style.padding.top = Some(single_scalar(values, name)?),
        Property::PaddingRight => style.padding.right = Some(single_scalar(values, name)?),
        Property::PaddingBottom => style.padding.bottom = Some(single_scalar(values, name)?),
        Property::PaddingLeft => style.padding.left = Some(single_scalar(values, name)?),
        Property::PaddingVertical => style.padding.set_vertical(single_scalar(values, name)?),
        Property::PaddingHorizontal => style.padding.set_horizontal(single_scalar(values, name)?),
        Property::Margin => style.margin = parse_sides(values, name)?,
        Property::MarginTop => style.margin.top = Some(single_scalar(values, name)?),
        Property::MarginRight => style.margin.right = Some(single_scalar(values, name)?),
        Property::MarginBottom => style.margin.bottom = Some(single_scalar(values, name)?),
        Property::MarginLeft => style.margin.left = Some(single_scalar(values, name)?),
        Property::MarginVertical => style.margin.set_vertical(single_scalar(values, name)?),
        Property::MarginHorizontal => style.margin.set_horizontal(single_scalar(values, name)?),
        Property::Width => style.width = Some(single_scalar(values, name)?),
        Property::Height => style.height = Some(single_scalar(values, name)?),
        Property::MinWidth => style.min_width = Some(single_scalar(values, name)?),
        Property::MinHeight => style.min_height = Some(single_scalar(values, name)?),
        Property::MaxWidth => style.max_width = Some(single_scalar(values, name)?),
        Property::MaxHeight => style.max_height = Some(single_scalar(values, name)?),
        Property::BackgroundColor => style.background_color = Some(color(values, name)?),
        Property::Color => style.color = Some(color(values, name)?),
    }
    Ok(())
}
