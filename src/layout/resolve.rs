//! [`Style`](css::Style) → [`taffy::Style`] conversion.
//!
//! Maps the typed style model onto taffy's flexbox inputs. Both output
//! targets resolve through here, so equal metrics mean equal boxes whatever
//! shorthand a formatter chose.

use taffy::prelude::*;

use crate::css::scalar::{Scalar, Sides, Unit};
use crate::css::styles as css;

/// Convert a [`Scalar`] to a [`LengthPercentageAuto`] (margins).
pub fn resolve_scalar(scalar: &Scalar) -> LengthPercentageAuto {
    match scalar.unit {
        Unit::Px => LengthPercentageAuto::from_length(scalar.value),
        Unit::Percent => LengthPercentageAuto::from_percent(scalar.value / 100.0),
        Unit::Auto => LengthPercentageAuto::AUTO,
    }
}

/// Convert a [`Scalar`] to a [`LengthPercentage`] for contexts that do not
/// allow auto (padding, gaps). `Auto` maps to zero.
pub fn resolve_scalar_definite(scalar: &Scalar) -> LengthPercentage {
    match scalar.unit {
        Unit::Px => LengthPercentage::from_length(scalar.value),
        Unit::Percent => LengthPercentage::from_percent(scalar.value / 100.0),
        Unit::Auto => LengthPercentage::ZERO,
    }
}

fn resolve_dimension(scalar: &Scalar) -> Dimension {
    match scalar.unit {
        Unit::Px => Dimension::from_length(scalar.value),
        Unit::Percent => Dimension::from_percent(scalar.value / 100.0),
        Unit::Auto => Dimension::AUTO,
    }
}

/// Unset sides are zero.
fn resolve_margin(sides: &Sides) -> taffy::geometry::Rect<LengthPercentageAuto> {
    let side = |s: Option<Scalar>| {
        s.as_ref()
            .map(resolve_scalar)
            .unwrap_or(LengthPercentageAuto::ZERO)
    };
    taffy::geometry::Rect {
        top: side(sides.top),
        right: side(sides.right),
        bottom: side(sides.bottom),
        left: side(sides.left),
    }
}

fn resolve_padding(sides: &Sides) -> taffy::geometry::Rect<LengthPercentage> {
    let side = |s: Option<Scalar>| {
        s.as_ref()
            .map(resolve_scalar_definite)
            .unwrap_or(LengthPercentage::ZERO)
    };
    taffy::geometry::Rect {
        top: side(sides.top),
        right: side(sides.right),
        bottom: side(sides.bottom),
        left: side(sides.left),
    }
}

fn resolve_justify(value: css::JustifyContent) -> JustifyContent {
    match value.unsafe_keyword() {
        css::JustifyContent::FlexStart => JustifyContent::FlexStart,
        css::JustifyContent::Center | css::JustifyContent::SafeCenter => JustifyContent::Center,
        css::JustifyContent::FlexEnd | css::JustifyContent::SafeFlexEnd => JustifyContent::FlexEnd,
        css::JustifyContent::SpaceBetween => JustifyContent::SpaceBetween,
        css::JustifyContent::SpaceAround => JustifyContent::SpaceAround,
        css::JustifyContent::SpaceEvenly => JustifyContent::SpaceEvenly,
    }
}

fn resolve_align_items(value: css::AlignItems) -> AlignItems {
    match value.unsafe_keyword() {
        css::AlignItems::FlexStart => AlignItems::FlexStart,
        css::AlignItems::Center | css::AlignItems::SafeCenter => AlignItems::Center,
        css::AlignItems::FlexEnd | css::AlignItems::SafeFlexEnd => AlignItems::FlexEnd,
        css::AlignItems::Baseline => AlignItems::Baseline,
        css::AlignItems::Stretch => AlignItems::Stretch,
    }
}

fn resolve_align_content(value: css::AlignContent) -> AlignContent {
    match value {
        css::AlignContent::FlexStart => AlignContent::FlexStart,
        css::AlignContent::Center => AlignContent::Center,
        css::AlignContent::FlexEnd => AlignContent::FlexEnd,
        css::AlignContent::SpaceBetween => AlignContent::SpaceBetween,
        css::AlignContent::SpaceAround => AlignContent::SpaceAround,
        css::AlignContent::SpaceEvenly => AlignContent::SpaceEvenly,
        css::AlignContent::Stretch => AlignContent::Stretch,
    }
}

/// `auto` defers to the parent's `align-items`. Browsers drop the
/// distribution keywords on a flex item, so they lay out as `auto` too.
fn resolve_align_self(value: css::AlignSelf) -> Option<AlignSelf> {
    match value {
        css::AlignSelf::Auto
        | css::AlignSelf::SpaceBetween
        | css::AlignSelf::SpaceAround
        | css::AlignSelf::SpaceEvenly => None,
        css::AlignSelf::FlexStart => Some(AlignSelf::FlexStart),
        css::AlignSelf::Center => Some(AlignSelf::Center),
        css::AlignSelf::FlexEnd => Some(AlignSelf::FlexEnd),
        css::AlignSelf::Baseline => Some(AlignSelf::Baseline),
        css::AlignSelf::Stretch => Some(AlignSelf::Stretch),
    }
}

/// Convert a full [`css::Style`] into a [`taffy::Style`].
///
/// Mapping summary:
/// - `display: none` -> `Display::None`, `flex`/`inline-flex` -> `Display::Flex`
/// - `flex: n` -> grow `n`, shrink 1, basis 0%; explicit grow/shrink win
/// - `gap` -> both axes; `row-gap` -> height, `column-gap` -> width
/// - unset padding and margin sides -> zero
pub fn resolve_styles(style: &css::Style) -> Style {
    let mut out = Style::default();

    out.display = match style.display {
        Some(css::Display::None) => Display::None,
        _ => Display::Flex,
    };

    if let Some(direction) = style.flex_direction {
        out.flex_direction = match direction {
            css::FlexDirection::Row => FlexDirection::Row,
            css::FlexDirection::RowReverse => FlexDirection::RowReverse,
            css::FlexDirection::Column => FlexDirection::Column,
            css::FlexDirection::ColumnReverse => FlexDirection::ColumnReverse,
        };
    }
    if let Some(wrap) = style.flex_wrap {
        out.flex_wrap = match wrap {
            css::FlexWrap::NoWrap => FlexWrap::NoWrap,
            css::FlexWrap::Wrap => FlexWrap::Wrap,
            css::FlexWrap::WrapReverse => FlexWrap::WrapReverse,
        };
    }

    out.justify_content = style.justify_content.map(resolve_justify);
    out.align_items = style.align_items.map(resolve_align_items);
    out.align_content = style.align_content.map(resolve_align_content);
    out.align_self = style.align_self.and_then(resolve_align_self);

    if let Some(flex) = style.flex {
        out.flex_grow = flex;
        out.flex_shrink = 1.0;
        out.flex_basis = Dimension::from_percent(0.0);
    }
    if let Some(grow) = style.flex_grow {
        out.flex_grow = grow;
    }
    if let Some(shrink) = style.flex_shrink {
        out.flex_shrink = shrink;
    }

    if let Some(ref gap) = style.gap {
        let gap = resolve_scalar_definite(gap);
        out.gap = taffy::geometry::Size {
            width: gap,
            height: gap,
        };
    }
    if let Some(ref row_gap) = style.row_gap {
        out.gap.height = resolve_scalar_definite(row_gap);
    }
    if let Some(ref column_gap) = style.column_gap {
        out.gap.width = resolve_scalar_definite(column_gap);
    }

    out.padding = resolve_padding(&style.padding);
    out.margin = resolve_margin(&style.margin);

    if let Some(ref w) = style.width {
        out.size.width = resolve_dimension(w);
    }
    if let Some(ref h) = style.height {
        out.size.height = resolve_dimension(h);
    }
    if let Some(ref w) = style.min_width {
        out.min_size.width = resolve_dimension(w);
    }
    if let Some(ref h) = style.min_height {
        out.min_size.height = resolve_dimension(h);
    }
    if let Some(ref w) = style.max_width {
        out.max_size.width = resolve_dimension(w);
    }
    if let Some(ref h) = style.max_height {
        out.max_size.height = resolve_dimension(h);
    }

    out
}
