//! Optional class-name → style interop.
//!
//! A host may install one [`ClassInterop`] hook for the whole process. When a
//! hook is present, a stack consumes its `className` attribute, resolves it
//! to a [`Style`] and merges it between the composed base style and the
//! caller's explicit override. When no hook is installed the attribute is
//! forwarded like any other passthrough attribute; nothing else changes.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::css::styles::Style;

/// The attribute a stack reads class names from.
pub const CLASS_NAME_ATTRIBUTE: &str = "className";

/// Errors from the interop layer.
#[derive(Debug, thiserror::Error)]
pub enum InteropError {
    #[error("a class-name interop hook is already installed")]
    AlreadyInstalled,
}

/// Maps a class-name attribute onto a style.
pub trait ClassInterop: Send + Sync {
    /// Resolve a whitespace-separated class list. `None` when nothing matches.
    fn resolve(&self, class_list: &str) -> Option<Style>;
}

static INTEROP: OnceLock<Arc<dyn ClassInterop>> = OnceLock::new();

/// Install the process-wide hook. Only the first call succeeds.
pub fn install_interop(hook: impl ClassInterop + 'static) -> Result<(), InteropError> {
    INTEROP
        .set(Arc::new(hook))
        .map_err(|_| InteropError::AlreadyInstalled)?;
    tracing::debug!(attribute = CLASS_NAME_ATTRIBUTE, "class-name interop installed");
    Ok(())
}

/// The installed hook, if any. Absence is the normal case.
pub fn probe() -> Option<Arc<dyn ClassInterop>> {
    let hook = INTEROP.get().cloned();
    if hook.is_none() {
        tracing::trace!("no class-name interop installed");
    }
    hook
}

/// A fixed table from class name to style.
///
/// Classes merge in the order they are listed in the attribute, so a later
/// class wins per property.
///
/// ```
/// use flexstack::interop::{ClassInterop, ClassMap};
/// use flexstack::prelude::Style;
///
/// let classes = ClassMap::new()
///     .class("card", Style::new().padding(8).color("black"))
///     .class("danger", Style::new().color("red"));
/// let style = classes.resolve("card danger").unwrap();
/// assert_eq!(style.to_css(), "padding: 8px; color: red;");
/// assert!(classes.resolve("unknown").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    classes: BTreeMap<String, Style>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, name: impl Into<String>, style: Style) -> Self {
        self.classes.insert(name.into(), style);
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassInterop for ClassMap {
    fn resolve(&self, class_list: &str) -> Option<Style> {
        class_list
            .split_whitespace()
            .filter_map(|class| self.classes.get(class))
            .fold(None, |acc: Option<Style>, style| {
                Some(match acc {
                    Some(acc) => acc.merge(style),
                    None => style.clone(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::scalar::{Scalar, Sides};
    use crate::css::styles::FlexDirection;

    fn classes() -> ClassMap {
        ClassMap::new()
            .class("col", Style::new().flex_direction(FlexDirection::Column).padding(4))
            .class("row", Style::new().flex_direction(FlexDirection::Row))
    }

    #[test]
    fn later_classes_win() {
        let style = classes().resolve("col row").unwrap();
        assert_eq!(style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(style.padding, Sides::all(Scalar::px(4.0)));

        let style = classes().resolve("row col").unwrap();
        assert_eq!(style.flex_direction, Some(FlexDirection::Column));
    }

    #[test]
    fn no_match_is_none() {
        assert!(classes().resolve("").is_none());
        assert!(classes().resolve("b c").is_none());
        assert_eq!(classes().len(), 2);
        assert!(ClassMap::new().is_empty());
    }

    #[test]
    fn unknown_classes_are_skipped() {
        let style = classes().resolve("  wide   row ").unwrap();
        assert_eq!(style, Style::new().flex_direction(FlexDirection::Row));
    }
}
