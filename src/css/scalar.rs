//! Scalar values: Scalar, Unit (px, %, auto) and four-sided Sides.

use std::fmt;

/// A length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// Logical pixels. Bare numbers on the native target, `px` on the web.
    Px,
    /// Percentage of the parent dimension.
    Percent,
    /// Auto-size (content-based).
    Auto,
}

/// A scalar value with a unit, e.g. `16px`, `0%`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub value: f32,
    pub unit: Unit,
}

impl Scalar {
    /// Create a scalar in pixel units.
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Create a scalar as a percentage.
    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Create an auto scalar.
    pub fn auto() -> Self {
        Self {
            value: 0.0,
            unit: Unit::Auto,
        }
    }

    /// Returns `true` if this scalar is auto-sized.
    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::px(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::px(value as f32)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::px(value as f32)
    }
}

/// Format a number without a trailing `.0` for whole values.
pub(crate) fn format_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Web formatting: `16px`, `50%`, `auto`.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Auto => write!(f, "auto"),
            Unit::Px => write!(f, "{}px", format_number(self.value)),
            Unit::Percent => write!(f, "{}%", format_number(self.value)),
        }
    }
}

/// Per-side optional scalars, used for padding and margin.
///
/// Sides are stored independently so that overriding `padding-top` leaves the
/// other three sides alone when styles are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sides {
    pub top: Option<Scalar>,
    pub right: Option<Scalar>,
    pub bottom: Option<Scalar>,
    pub left: Option<Scalar>,
}

impl Sides {
    /// Create sides with the same scalar on all four sides.
    pub fn all(v: Scalar) -> Self {
        Self {
            top: Some(v),
            right: Some(v),
            bottom: Some(v),
            left: Some(v),
        }
    }

    /// Create sides with symmetric vertical and horizontal values.
    pub fn symmetric(vertical: Scalar, horizontal: Scalar) -> Self {
        Self {
            top: Some(vertical),
            right: Some(horizontal),
            bottom: Some(vertical),
            left: Some(horizontal),
        }
    }

    /// Create sides with explicit values for all four sides.
    pub fn new(top: Scalar, right: Scalar, bottom: Scalar, left: Scalar) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// Set top and bottom.
    pub fn set_vertical(&mut self, v: Scalar) {
        self.top = Some(v);
        self.bottom = Some(v);
    }

    /// Set left and right.
    pub fn set_horizontal(&mut self, h: Scalar) {
        self.left = Some(h);
        self.right = Some(h);
    }

    /// Per-side merge: a side set in `other` wins.
    pub fn merge(&self, other: &Sides) -> Sides {
        Sides {
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
        }
    }

    /// Returns `true` if no side is set.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// The shared value when all four sides are set and equal.
    pub fn uniform(&self) -> Option<Scalar> {
        match (self.top, self.right, self.bottom, self.left) {
            (Some(t), Some(r), Some(b), Some(l)) if t == r && t == b && t == l => Some(t),
            _ => None,
        }
    }

    /// The shared top/bottom value, if both are set and equal.
    pub fn vertical(&self) -> Option<Scalar> {
        match (self.top, self.bottom) {
            (Some(t), Some(b)) if t == b => Some(t),
            _ => None,
        }
    }

    /// The shared left/right value, if both are set and equal.
    pub fn horizontal(&self) -> Option<Scalar> {
        match (self.left, self.right) {
            (Some(l), Some(r)) if l == r => Some(l),
            _ => None,
        }
    }
}
