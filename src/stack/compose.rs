//! Layout flags → base [`Style`].
//!
//! [`compose_style`] is pure: the default gap is passed in rather than read
//! from the process-wide value, so the same inputs always give the same style.
//!
//! Evaluation order:
//!
//! 1. display, direction, wrap and justification (always present)
//! 2. cross-axis, content and self alignment (omitted when not requested)
//! 3. `flex1`, `stretch`, `shrink0`
//! 4. gaps: `rowGap`/`columnGap` suppress the composite `gap`
//! 5. padding: `padding: true` > `padding: n` > per-axis padding

use crate::css::scalar::{Scalar, Sides};
use crate::css::styles::{
    AlignItems, Display, FlexDirection, FlexWrap, JustifyContent, Style,
};

use super::config::{LayoutConfig, Spacing};
use super::gap::resolve_gap;

/// Compose the base style for `config`.
pub fn compose_style(config: &LayoutConfig, default_gap: f32) -> Style {
    let mut style = Style::new();

    style.display = Some(if config.inline {
        Display::InlineFlex
    } else {
        Display::Flex
    });
    style.flex_direction = Some(match (config.vertical, config.reverse) {
        (false, false) => FlexDirection::Row,
        (false, true) => FlexDirection::RowReverse,
        (true, false) => FlexDirection::Column,
        (true, true) => FlexDirection::ColumnReverse,
    });
    style.flex_wrap = Some(if config.wrap {
        FlexWrap::Wrap
    } else {
        FlexWrap::NoWrap
    });

    let justify = first_set(&[
        (config.center, JustifyContent::Center),
        (config.end, JustifyContent::FlexEnd),
        (config.between, JustifyContent::SpaceBetween),
        (config.evenly, JustifyContent::SpaceEvenly),
        (config.around, JustifyContent::SpaceAround),
    ])
    .unwrap_or(JustifyContent::FlexStart);
    style.justify_content = Some(if config.safe { justify.safe() } else { justify });

    style.align_items = first_set(&[
        (config.align_start, AlignItems::FlexStart),
        (config.align_center, AlignItems::Center),
        (config.align_end, AlignItems::FlexEnd),
        (config.baseline, AlignItems::Baseline),
    ])
    .map(|align| if config.safe { align.safe() } else { align });

    style.align_content = config.content.map(|a| a.align_content());
    style.align_self = config.self_.map(|a| a.align_self());

    if config.flex1 {
        style.flex = Some(1.0);
    }
    if config.stretch {
        style.flex_grow = Some(1.0);
    }
    if config.shrink0 {
        style.flex_shrink = Some(0.0);
    }

    let gap = resolve_gap(config.gap, default_gap);
    let row_gap = resolve_gap(config.row_gap, default_gap);
    let column_gap = resolve_gap(config.column_gap, default_gap);

    style.row_gap = row_gap.map(Scalar::px);
    style.column_gap = column_gap.map(Scalar::px);
    if row_gap.is_none() && column_gap.is_none() {
        style.gap = gap.map(Scalar::px);
    }

    let vertical_gap = row_gap.or(gap);
    let horizontal_gap = column_gap.or(gap);

    style.padding = match config.padding {
        Spacing::Default => axis_padding(vertical_gap, horizontal_gap),
        Spacing::Value(all) => Sides::all(Scalar::px(all)),
        Spacing::Unset => axis_padding(
            axis_value(config.vertical_padding, vertical_gap),
            axis_value(config.horizontal_padding, horizontal_gap),
        ),
    };

    style
}

fn first_set<T: Copy>(candidates: &[(bool, T)]) -> Option<T> {
    candidates
        .iter()
        .find(|(set, _)| *set)
        .map(|(_, value)| *value)
}

/// `true` takes the axis gap, a number is taken as is.
fn axis_value(spacing: Spacing, axis_gap: Option<f32>) -> Option<f32> {
    match spacing {
        Spacing::Unset => None,
        Spacing::Default => axis_gap,
        Spacing::Value(v) => Some(v),
    }
}

fn axis_padding(vertical: Option<f32>, horizontal: Option<f32>) -> Sides {
    let mut sides = Sides::default();
    if let Some(v) = vertical {
        sides.set_vertical(Scalar::px(v));
    }
    if let Some(h) = horizontal {
        sides.set_horizontal(Scalar::px(h));
    }
    sides
}
