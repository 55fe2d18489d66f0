//! The process-wide default gap.
//!
//! Kept in its own test binary: changing the default affects every
//! `render()` in the process.

use flexstack::prelude::*;
use flexstack::stack::default_gap;
use flexstack::testing::to_markup;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

#[test]
fn changing_the_default_gap() {
    set_default_gap(8.0);
    assert_eq!(default_gap(), 8.0);

    let stack = Stack::new().gap(true).padding(true).child("Content");
    assert_snapshot!(to_markup(&stack.render()), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; gap: 8px; padding: 8px;"
    >
      Content
    </view>
    "#);

    set_default_gap(24.0);
    assert_eq!(default_gap(), 24.0);
    assert_snapshot!(to_markup(&stack.render()), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; gap: 24px; padding: 24px;"
    >
      Content
    </view>
    "#);

    // The memoized style is keyed on the default gap.
    assert_eq!(stack.memo().computations(), 2);

    // Explicit values and explicit contexts ignore the process default.
    let fixed = Stack::new().gap(16).render();
    assert_eq!(
        fixed.as_element().and_then(|e| e.style.as_ref()).map(|s| s.to_css()),
        Some(
            "display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; gap: 16px;"
                .to_string()
        )
    );
    let isolated = Stack::new().gap(true).render_with(&RenderContext::new());
    assert!(to_markup(&isolated).contains("gap: 8px;"));

    assert_eq!(RenderContext::current().default_gap, 24.0);
    set_default_gap(8.0);
}
