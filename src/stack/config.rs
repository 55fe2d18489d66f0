//! Layout flags recognized by the stack, and the value types they carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::css::styles::{AlignContent, AlignSelf};

/// A spacing input: absent, "use the default gap", or an explicit amount.
///
/// `Value(0.0)` is an explicit zero and is distinct from `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Spacing {
    #[default]
    Unset,
    /// `true`: resolve against the current default gap.
    Default,
    Value(f32),
}

impl Spacing {
    pub fn is_unset(&self) -> bool {
        matches!(self, Spacing::Unset)
    }
}

impl From<bool> for Spacing {
    fn from(flag: bool) -> Self {
        if flag {
            Spacing::Default
        } else {
            Spacing::Unset
        }
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Spacing::Value(value)
    }
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Spacing::Value(value as f32)
    }
}

impl From<i32> for Spacing {
    fn from(value: i32) -> Self {
        Spacing::Value(value as f32)
    }
}

impl From<u16> for Spacing {
    fn from(value: u16) -> Self {
        Spacing::Value(f32::from(value))
    }
}

impl<T: Into<Spacing>> From<Option<T>> for Spacing {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// JSON shape: `true`, `false`, a number, or `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpacing {
    Flag(bool),
    Value(f32),
}

impl Serialize for Spacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Spacing::Unset => serializer.serialize_none(),
            Spacing::Default => serializer.serialize_bool(true),
            Spacing::Value(v) => serializer.serialize_f32(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Spacing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawSpacing>::deserialize(deserializer)? {
            None => Spacing::Unset,
            Some(RawSpacing::Flag(flag)) => flag.into(),
            Some(RawSpacing::Value(v)) => Spacing::Value(v),
        })
    }
}

/// The `content` / `self` alignment vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl Alignment {
    /// Look up a value by name. Unknown names have no alignment.
    pub fn from_name(name: &str) -> Option<Alignment> {
        match name {
            "start" => Some(Alignment::Start),
            "center" => Some(Alignment::Center),
            "end" => Some(Alignment::End),
            "between" => Some(Alignment::Between),
            "around" => Some(Alignment::Around),
            "evenly" => Some(Alignment::Evenly),
            _ => None,
        }
    }

    pub fn align_content(self) -> AlignContent {
        match self {
            Alignment::Start => AlignContent::FlexStart,
            Alignment::Center => AlignContent::Center,
            Alignment::End => AlignContent::FlexEnd,
            Alignment::Between => AlignContent::SpaceBetween,
            Alignment::Around => AlignContent::SpaceAround,
            Alignment::Evenly => AlignContent::SpaceEvenly,
        }
    }

    /// Same table as [`Alignment::align_content`].
    pub fn align_self(self) -> AlignSelf {
        match self {
            Alignment::Start => AlignSelf::FlexStart,
            Alignment::Center => AlignSelf::Center,
            Alignment::End => AlignSelf::FlexEnd,
            Alignment::Between => AlignSelf::SpaceBetween,
            Alignment::Around => AlignSelf::SpaceAround,
            Alignment::Evenly => AlignSelf::SpaceEvenly,
        }
    }
}

fn lenient_alignment<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Alignment>, D::Error> {
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(Alignment::from_name))
}

/// Every layout flag a stack consumes. Nothing in here is forwarded to the
/// rendered element.
///
/// Deserializes from the camelCase prop names, so presets can live in JSON:
///
/// ```
/// use flexstack::stack::config::{LayoutConfig, Spacing};
///
/// let config: LayoutConfig =
///     serde_json::from_str(r#"{"vertical": true, "gap": 16, "padding": true}"#).unwrap();
/// assert!(config.vertical);
/// assert_eq!(config.gap, Spacing::Value(16.0));
/// assert_eq!(config.padding, Spacing::Default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    // Direction
    pub vertical: bool,
    pub reverse: bool,
    pub wrap: bool,
    /// Web only: `inline-flex` instead of `flex`.
    pub inline: bool,
    /// Web only: `safe` overflow keyword on positional alignment.
    pub safe: bool,

    // Justification, first set wins in this order
    pub center: bool,
    pub end: bool,
    pub between: bool,
    pub evenly: bool,
    pub around: bool,

    // Cross-axis alignment, first set wins in this order
    pub align_start: bool,
    pub align_center: bool,
    pub align_end: bool,
    pub baseline: bool,

    #[serde(deserialize_with = "lenient_alignment", skip_serializing_if = "Option::is_none")]
    pub content: Option<Alignment>,
    #[serde(
        rename = "self",
        deserialize_with = "lenient_alignment",
        skip_serializing_if = "Option::is_none"
    )]
    pub self_: Option<Alignment>,

    // Growth
    pub flex1: bool,
    pub stretch: bool,
    pub shrink0: bool,

    // Spacing
    #[serde(skip_serializing_if = "Spacing::is_unset")]
    pub gap: Spacing,
    #[serde(skip_serializing_if = "Spacing::is_unset")]
    pub row_gap: Spacing,
    #[serde(skip_serializing_if = "Spacing::is_unset")]
    pub column_gap: Spacing,
    #[serde(skip_serializing_if = "Spacing::is_unset")]
    pub padding: Spacing,
    #[serde(skip_serializing_if = "Spacing::is_unset")]
    pub vertical_padding: Spacing,
    #[serde(skip_serializing_if = "Spacing::is_unset")]
    pub horizontal_padding: Spacing,
}

impl LayoutConfig {
    /// Prop names that are consumed as layout flags.
    pub const FLAGS: &'static [&'static str] = &[
        "vertical",
        "reverse",
        "wrap",
        "inline",
        "safe",
        "center",
        "end",
        "between",
        "evenly",
        "around",
        "alignStart",
        "alignCenter",
        "alignEnd",
        "baseline",
        "content",
        "self",
        "flex1",
        "stretch",
        "shrink0",
        "gap",
        "rowGap",
        "columnGap",
        "padding",
        "verticalPadding",
        "horizontalPadding",
    ];

    /// Returns `true` if `name` is a layout flag.
    pub fn is_flag(name: &str) -> bool {
        Self::FLAGS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn spacing_from_primitives() {
        assert_eq!(Spacing::from(true), Spacing::Default);
        assert_eq!(Spacing::from(false), Spacing::Unset);
        assert_eq!(Spacing::from(0), Spacing::Value(0.0));
        assert_eq!(Spacing::from(12u16), Spacing::Value(12.0));
        assert_eq!(Spacing::from(None::<i32>), Spacing::Unset);
        assert_eq!(Spacing::from(Some(4)), Spacing::Value(4.0));
    }

    #[test]
    fn spacing_deserializes_bool_number_or_null() {
        let parse = |v| serde_json::from_value::<Spacing>(v).unwrap();
        assert_eq!(parse(json!(true)), Spacing::Default);
        assert_eq!(parse(json!(false)), Spacing::Unset);
        assert_eq!(parse(json!(null)), Spacing::Unset);
        assert_eq!(parse(json!(0)), Spacing::Value(0.0));
        assert_eq!(parse(json!(2.5)), Spacing::Value(2.5));
        assert!(serde_json::from_value::<Spacing>(json!("8px")).is_err());
    }

    #[test]
    fn config_deserializes_camel_case_props() {
        let config: LayoutConfig = serde_json::from_value(json!({
            "alignCenter": true,
            "rowGap": 12,
            "horizontalPadding": 32,
            "verticalPadding": true,
            "self": "center",
            "content": "between",
        }))
        .unwrap();

        assert_eq!(
            config,
            LayoutConfig {
                align_center: true,
                row_gap: Spacing::Value(12.0),
                horizontal_padding: Spacing::Value(32.0),
                vertical_padding: Spacing::Default,
                self_: Some(Alignment::Center),
                content: Some(Alignment::Between),
                ..LayoutConfig::default()
            }
        );
    }

    #[test]
    fn unknown_alignment_name_is_unset() {
        let config: LayoutConfig = serde_json::from_value(json!({"content": "middle"})).unwrap();
        assert_eq!(config.content, None);
    }

    #[test]
    fn config_serializes_only_what_is_set() {
        let config = LayoutConfig {
            vertical: true,
            gap: Spacing::Value(16.0),
            ..LayoutConfig::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["vertical"], json!(true));
        assert_eq!(value["gap"], json!(16.0));
        assert!(value.get("rowGap").is_none());
        assert!(value.get("self").is_none());
    }

    #[test]
    fn every_serialized_key_is_a_flag() {
        let config = LayoutConfig {
            content: Some(Alignment::Start),
            self_: Some(Alignment::End),
            gap: Spacing::Default,
            row_gap: Spacing::Default,
            column_gap: Spacing::Default,
            padding: Spacing::Default,
            vertical_padding: Spacing::Default,
            horizontal_padding: Spacing::Default,
            ..LayoutConfig::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), LayoutConfig::FLAGS.len());
        for key in keys {
            assert!(LayoutConfig::is_flag(key), "{key} missing from FLAGS");
        }
    }

    #[test]
    fn self_and_content_share_one_table() {
        for alignment in [
            Alignment::Start,
            Alignment::Center,
            Alignment::End,
            Alignment::Between,
            Alignment::Around,
            Alignment::Evenly,
        ] {
            assert_eq!(alignment.align_self().as_css(), alignment.align_content().as_css());
        }
        assert_eq!(Alignment::Between.align_self(), AlignSelf::SpaceBetween);
    }
}
