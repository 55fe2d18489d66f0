//! Style struct with typed Option<T> fields for every supported property.
//!
//! This is the central style representation shared by the composer, the
//! caller-supplied override, the class-name interop and the output formatters.
//! `None` means "not set": the key is omitted from the rendered declaration
//! rather than emitted with an empty value.

use crate::css::scalar::{Scalar, Sides};

/// Declares a keyword enum with its CSS spelling and a lookup by name.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $css:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// The CSS keyword for this value.
            pub fn as_css(&self) -> &'static str {
                match self {
                    $($name::$variant => $css),+
                }
            }

            /// Look up a value by its CSS keyword.
            pub fn from_css(keyword: &str) -> Option<Self> {
                match keyword {
                    $($css => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

keyword_enum! {
    /// Display mode of the container.
    pub enum Display {
        Flex => "flex",
        InlineFlex => "inline-flex",
        None => "none",
    }
}

keyword_enum! {
    /// Main axis direction.
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_enum! {
    /// Line wrapping.
    pub enum FlexWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// Main-axis distribution of children.
    pub enum JustifyContent {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        /// `center` with the `safe` overflow keyword.
        SafeCenter => "safe center",
        /// `flex-end` with the `safe` overflow keyword.
        SafeFlexEnd => "safe flex-end",
    }
}

keyword_enum! {
    /// Cross-axis positioning of children.
    pub enum AlignItems {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        Baseline => "baseline",
        Stretch => "stretch",
        SafeCenter => "safe center",
        SafeFlexEnd => "safe flex-end",
    }
}

keyword_enum! {
    /// Cross-axis distribution of wrapped lines.
    pub enum AlignContent {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// Cross-axis positioning of the container inside its own parent.
    pub enum AlignSelf {
        Auto => "auto",
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        Baseline => "baseline",
        Stretch => "stretch",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

impl JustifyContent {
    /// Add the `safe` overflow keyword to positional values.
    pub fn safe(self) -> Self {
        match self {
            JustifyContent::Center => JustifyContent::SafeCenter,
            JustifyContent::FlexEnd => JustifyContent::SafeFlexEnd,
            other => other,
        }
    }

    /// The value without the `safe` overflow keyword.
    pub fn unsafe_keyword(self) -> Self {
        match self {
            JustifyContent::SafeCenter => JustifyContent::Center,
            JustifyContent::SafeFlexEnd => JustifyContent::FlexEnd,
            other => other,
        }
    }
}

impl AlignItems {
    /// Add the `safe` overflow keyword to positional values.
    pub fn safe(self) -> Self {
        match self {
            AlignItems::Center => AlignItems::SafeCenter,
            AlignItems::FlexEnd => AlignItems::SafeFlexEnd,
            other => other,
        }
    }

    /// The value without the `safe` overflow keyword.
    pub fn unsafe_keyword(self) -> Self {
        match self {
            AlignItems::SafeCenter => AlignItems::Center,
            AlignItems::SafeFlexEnd => AlignItems::FlexEnd,
            other => other,
        }
    }
}

/// All style properties for one element. Each field is `Option<T>`; `None`
/// means the property is omitted.
///
/// Field order is the output order of the formatters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    // Container
    pub display: Option<Display>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_wrap: Option<FlexWrap>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub align_content: Option<AlignContent>,
    pub align_self: Option<AlignSelf>,

    // Growth
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,

    // Spacing
    pub gap: Option<Scalar>,
    pub row_gap: Option<Scalar>,
    pub column_gap: Option<Scalar>,
    pub padding: Sides,
    pub margin: Sides,

    // Sizing
    pub width: Option<Scalar>,
    pub height: Option<Scalar>,
    pub min_width: Option<Scalar>,
    pub min_height: Option<Scalar>,
    pub max_width: Option<Scalar>,
    pub max_height: Option<Scalar>,

    // Colors
    pub background_color: Option<String>,
    pub color: Option<String>,
}

impl Style {
    /// Create a new `Style` with every property unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` on top of `self`. For each field, if `other` has a value
    /// (`Some`), use it; otherwise keep `self`'s value. Padding and margin merge
    /// side by side.
    pub fn merge(&self, other: &Style) -> Style {
        /// Helper: pick `other` if set, otherwise keep `base`.
        fn merge_opt<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
            if other.is_some() {
                other.clone()
            } else {
                base.clone()
            }
        }

        Style {
            display: merge_opt(&self.display, &other.display),
            flex_direction: merge_opt(&self.flex_direction, &other.flex_direction),
            flex_wrap: merge_opt(&self.flex_wrap, &other.flex_wrap),
            justify_content: merge_opt(&self.justify_content, &other.justify_content),
            align_items: merge_opt(&self.align_items, &other.align_items),
            align_content: merge_opt(&self.align_content, &other.align_content),
            align_self: merge_opt(&self.align_self, &other.align_self),

            flex: merge_opt(&self.flex, &other.flex),
            flex_grow: merge_opt(&self.flex_grow, &other.flex_grow),
            flex_shrink: merge_opt(&self.flex_shrink, &other.flex_shrink),

            row_gap: merge_opt(&self.row_gap, &other.row_gap),
            column_gap: merge_opt(&self.column_gap, &other.column_gap),
            gap: merge_opt(&self.gap, &other.gap),
            padding: self.padding.merge(&other.padding),
            margin: self.margin.merge(&other.margin),

            width: merge_opt(&self.width, &other.width),
            height: merge_opt(&self.height, &other.height),
            min_width: merge_opt(&self.min_width, &other.min_width),
            min_height: merge_opt(&self.min_height, &other.min_height),
            max_width: merge_opt(&self.max_width, &other.max_width),
            max_height: merge_opt(&self.max_height, &other.max_height),

            background_color: merge_opt(&self.background_color, &other.background_color),
            color: merge_opt(&self.color, &other.color),
        }
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.display.is_none()
            && self.flex_direction.is_none()
            && self.flex_wrap.is_none()
            && self.justify_content.is_none()
            && self.align_items.is_none()
            && self.align_content.is_none()
            && self.align_self.is_none()
            && self.flex.is_none()
            && self.flex_grow.is_none()
            && self.flex_shrink.is_none()
            && self.row_gap.is_none()
            && self.column_gap.is_none()
            && self.gap.is_none()
            && self.padding.is_empty()
            && self.margin.is_empty()
            && self.width.is_none()
            && self.height.is_none()
            && self.min_width.is_none()
            && self.min_height.is_none()
            && self.max_width.is_none()
            && self.max_height.is_none()
            && self.background_color.is_none()
            && self.color.is_none()
    }

    // -- Chainable setters, mostly for building override styles -------------

    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn gap(mut self, gap: impl Into<Scalar>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn row_gap(mut self, gap: impl Into<Scalar>) -> Self {
        self.row_gap = Some(gap.into());
        self
    }

    pub fn column_gap(mut self, gap: impl Into<Scalar>) -> Self {
        self.column_gap = Some(gap.into());
        self
    }

    /// Uniform padding on all four sides.
    pub fn padding(mut self, padding: impl Into<Scalar>) -> Self {
        self.padding = Sides::all(padding.into());
        self
    }

    /// Uniform margin on all four sides.
    pub fn margin(mut self, margin: impl Into<Scalar>) -> Self {
        self.margin = Sides::all(margin.into());
        self
    }

    pub fn width(mut self, width: impl Into<Scalar>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Scalar>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::scalar::{Scalar, Sides};

    #[test]
    fn new_is_empty() {
        assert!(Style::new().is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn not_empty_when_field_set() {
        let s = Style::new().color("red");
        assert!(!s.is_empty());
    }

    #[test]
    fn not_empty_when_one_side_set() {
        let mut s = Style::new();
        s.padding.left = Some(Scalar::px(1.0));
        assert!(!s.is_empty());
    }

    #[test]
    fn merge_keeps_base_when_other_empty() {
        let base = Style::new()
            .flex_direction(FlexDirection::Row)
            .background_color("red");
        let merged = base.merge(&Style::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn merge_other_overrides_base() {
        let base = Style::new()
            .flex_direction(FlexDirection::Row)
            .background_color("white");
        let other = Style::new().flex_direction(FlexDirection::Column);

        let merged = base.merge(&other);
        assert_eq!(merged.flex_direction, Some(FlexDirection::Column));
        assert_eq!(merged.background_color, Some("white".into()));
    }

    #[test]
    fn merge_padding_per_side() {
        let mut base = Style::new();
        base.padding = Sides::symmetric(Scalar::px(12.0), Scalar::px(32.0));
        let mut other = Style::new();
        other.padding.left = Some(Scalar::px(0.0));

        let merged = base.merge(&other);
        assert_eq!(merged.padding.top, Some(Scalar::px(12.0)));
        assert_eq!(merged.padding.right, Some(Scalar::px(32.0)));
        assert_eq!(merged.padding.left, Some(Scalar::px(0.0)));
    }

    #[test]
    fn merge_is_not_commutative() {
        let a = Style::new().color("red");
        let b = Style::new().color("blue");
        assert_eq!(a.merge(&b).color, Some("blue".into()));
        assert_eq!(b.merge(&a).color, Some("red".into()));
    }

    #[test]
    fn merge_chained_layers() {
        // base -> class style -> explicit override
        let base = Style::new()
            .flex_direction(FlexDirection::Row)
            .justify_content(JustifyContent::FlexStart);
        let class = Style::new().background_color("gray").padding(4);
        let explicit = Style::new().background_color("red");

        let result = base.merge(&class).merge(&explicit);
        assert_eq!(result.flex_direction, Some(FlexDirection::Row));
        assert_eq!(result.background_color, Some("red".into()));
        assert_eq!(result.padding, Sides::all(Scalar::px(4.0)));
    }

    #[test]
    fn keywords_round_trip_through_css_names() {
        assert_eq!(FlexDirection::from_css("row-reverse"), Some(FlexDirection::RowReverse));
        assert_eq!(FlexDirection::ColumnReverse.as_css(), "column-reverse");
        assert_eq!(JustifyContent::from_css("space-evenly"), Some(JustifyContent::SpaceEvenly));
        assert_eq!(AlignItems::from_css("middle"), None);
        assert_eq!(Display::InlineFlex.as_css(), "inline-flex");
    }

    #[test]
    fn safe_only_applies_to_positional_values() {
        assert_eq!(JustifyContent::Center.safe(), JustifyContent::SafeCenter);
        assert_eq!(JustifyContent::SpaceBetween.safe(), JustifyContent::SpaceBetween);
        assert_eq!(JustifyContent::FlexStart.safe(), JustifyContent::FlexStart);
        assert_eq!(AlignItems::FlexEnd.safe().as_css(), "safe flex-end");
        assert_eq!(AlignItems::SafeCenter.unsafe_keyword(), AlignItems::Center);
        assert_eq!(AlignItems::Baseline.safe(), AlignItems::Baseline);
    }
}
