//! Integration tests for flexstack.
//!
//! These render stacks through the public API and compare the markup a host
//! would receive. Every test uses an explicit [`RenderContext`] with the
//! initial default gap of 8, so nothing here depends on process-wide state.

use flexstack::css::serialize::Target;
use flexstack::layout::layout_node;
use flexstack::prelude::*;
use flexstack::stack::{LayoutConfig, PropsError, StackProps};
use flexstack::testing::{to_markup, to_markup_for, to_native_markup};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

fn ctx() -> RenderContext {
    RenderContext::new()
}

fn markup(stack: Stack) -> String {
    to_markup(&stack.render_with(&ctx()))
}

fn content() -> Stack {
    Stack::new().child("Content")
}

// ---------------------------------------------------------------------------
// Direction, wrapping and display
// ---------------------------------------------------------------------------

#[test]
fn renders_a_row_by_default() {
    assert_snapshot!(markup(content()), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
}

#[test]
fn vertical_renders_a_column() {
    assert_snapshot!(markup(content().vertical()), @r#"
    <view
      style="display: flex; flex-direction: column; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
}

#[test]
fn reverse_flips_the_main_axis() {
    assert_snapshot!(markup(content().reverse()), @r#"
    <view
      style="display: flex; flex-direction: row-reverse; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
    assert_snapshot!(markup(content().vertical().reverse()), @r#"
    <view
      style="display: flex; flex-direction: column-reverse; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
}

#[test]
fn inline_and_wrap() {
    assert_snapshot!(markup(content().inline()), @r#"
    <view
      style="display: inline-flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
    assert_snapshot!(markup(content().wrap()), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: wrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
}

#[test]
fn vstack_is_always_vertical() {
    let node = VStack::new().gap(16).child("Content").render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      style="display: flex; flex-direction: column; flex-wrap: nowrap; justify-content: flex-start; gap: 16px;"
    >
      Content
    </view>
    "#);
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

fn style_attr(stack: Stack) -> String {
    stack
        .render_with(&ctx())
        .as_element()
        .and_then(|e| e.style.as_ref())
        .map(|s| s.to_css())
        .unwrap_or_default()
}

const ROW: &str = "display: flex; flex-direction: row; flex-wrap: nowrap;";

#[test]
fn cross_axis_alignment() {
    assert_eq!(
        style_attr(content().align_start()),
        format!("{ROW} justify-content: flex-start; align-items: flex-start;")
    );
    assert_eq!(
        style_attr(content().align_center()),
        format!("{ROW} justify-content: flex-start; align-items: center;")
    );
    assert_eq!(
        style_attr(content().align_end()),
        format!("{ROW} justify-content: flex-start; align-items: flex-end;")
    );
    assert_eq!(
        style_attr(content().baseline()),
        format!("{ROW} justify-content: flex-start; align-items: baseline;")
    );
}

#[test]
fn main_axis_justification() {
    assert_eq!(style_attr(content().center()), format!("{ROW} justify-content: center;"));
    assert_eq!(style_attr(content().end()), format!("{ROW} justify-content: flex-end;"));
    assert_eq!(
        style_attr(content().between()),
        format!("{ROW} justify-content: space-between;")
    );
    assert_eq!(
        style_attr(content().around()),
        format!("{ROW} justify-content: space-around;")
    );
    assert_eq!(
        style_attr(content().evenly()),
        format!("{ROW} justify-content: space-evenly;")
    );
}

#[test]
fn conflicting_justification_takes_the_first_in_priority_order() {
    assert_eq!(
        style_attr(content().around().between().center()),
        format!("{ROW} justify-content: center;")
    );
    assert_eq!(
        style_attr(content().evenly().end()),
        format!("{ROW} justify-content: flex-end;")
    );
}

#[test]
fn safe_keyword_on_web_only() {
    let node = content().center().align_end().safe().render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: safe center; align-items: safe flex-end;"
    >
      Content
    </view>
    "#);
    assert_snapshot!(to_native_markup(&node), @r#"
    <view
      style={{"alignItems":"flex-end","flexDirection":"row","flexWrap":"nowrap","justifyContent":"center"}}
    >
      Content
    </view>
    "#);
}

#[test]
fn content_and_self_alignment() {
    assert_eq!(
        style_attr(content().wrap().content(Alignment::Between)),
        "display: flex; flex-direction: row; flex-wrap: wrap; justify-content: flex-start; \
         align-content: space-between;"
    );
    assert_eq!(
        style_attr(content().align_self(Alignment::Start)),
        format!("{ROW} justify-content: flex-start; align-self: flex-start;")
    );
    assert_eq!(
        style_attr(content().align_self(Alignment::Center)),
        format!("{ROW} justify-content: flex-start; align-self: center;")
    );
    assert_eq!(
        style_attr(content().align_self(Alignment::Evenly)),
        format!("{ROW} justify-content: flex-start; align-self: space-evenly;")
    );
    assert_eq!(
        style_attr(content().align_self(Alignment::Between)),
        format!("{ROW} justify-content: flex-start; align-self: space-between;")
    );
}

// ---------------------------------------------------------------------------
// Flex growth
// ---------------------------------------------------------------------------

#[test]
fn flex_growth_flags() {
    assert_eq!(
        style_attr(content().flex1()),
        format!("{ROW} justify-content: flex-start; flex: 1 1 0%;")
    );
    assert_eq!(
        style_attr(content().stretch()),
        format!("{ROW} justify-content: flex-start; flex-grow: 1;")
    );
    assert_eq!(
        style_attr(content().shrink0()),
        format!("{ROW} justify-content: flex-start; flex-shrink: 0;")
    );
}

// ---------------------------------------------------------------------------
// Gaps and padding
// ---------------------------------------------------------------------------

#[test]
fn gap_value_and_default() {
    assert_snapshot!(markup(content().gap(16)), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; gap: 16px;"
    >
      Content
    </view>
    "#);
    assert_eq!(
        style_attr(content().gap(true)),
        format!("{ROW} justify-content: flex-start; gap: 8px;")
    );
    assert_eq!(
        style_attr(content().gap(false)),
        format!("{ROW} justify-content: flex-start;")
    );
}

#[test]
fn row_and_column_gaps() {
    assert_eq!(
        style_attr(content().row_gap(16)),
        format!("{ROW} justify-content: flex-start; row-gap: 16px;")
    );
    assert_eq!(
        style_attr(content().column_gap(20)),
        format!("{ROW} justify-content: flex-start; column-gap: 20px;")
    );
    assert_eq!(
        style_attr(content().row_gap(16).column_gap(20)),
        format!("{ROW} justify-content: flex-start; row-gap: 16px; column-gap: 20px;")
    );
}

#[test]
fn axis_gaps_replace_the_composite_gap() {
    assert_eq!(
        style_attr(content().gap(8).row_gap(16).column_gap(20)),
        format!("{ROW} justify-content: flex-start; row-gap: 16px; column-gap: 20px;")
    );
    assert_eq!(
        style_attr(content().gap(8).row_gap(16)),
        format!("{ROW} justify-content: flex-start; row-gap: 16px;")
    );
}

#[test]
fn padding_follows_the_gap() {
    assert_snapshot!(markup(content().gap(16).padding(true)), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; gap: 16px; padding: 16px;"
    >
      Content
    </view>
    "#);
}

#[test]
fn axis_padding_follows_the_axis_gap() {
    assert_eq!(
        style_attr(content().gap(24).vertical_padding(true)),
        format!(
            "{ROW} justify-content: flex-start; gap: 24px; padding-top: 24px; padding-bottom: 24px;"
        )
    );
    assert_eq!(
        style_attr(content().gap(32).horizontal_padding(true)),
        format!(
            "{ROW} justify-content: flex-start; gap: 32px; padding-right: 32px; padding-left: 32px;"
        )
    );
    assert_eq!(
        style_attr(content().row_gap(12).vertical_padding(true)),
        format!(
            "{ROW} justify-content: flex-start; row-gap: 12px; padding-top: 12px; padding-bottom: 12px;"
        )
    );
    assert_eq!(
        style_attr(content().column_gap(20).horizontal_padding(true)),
        format!(
            "{ROW} justify-content: flex-start; column-gap: 20px; padding-right: 20px; padding-left: 20px;"
        )
    );
}

#[test]
fn explicit_axis_padding() {
    assert_eq!(
        style_attr(content().gap(16).vertical_padding(32)),
        format!(
            "{ROW} justify-content: flex-start; gap: 16px; padding-top: 32px; padding-bottom: 32px;"
        )
    );
    assert_eq!(
        style_attr(content().gap(16).horizontal_padding(28)),
        format!(
            "{ROW} justify-content: flex-start; gap: 16px; padding-right: 28px; padding-left: 28px;"
        )
    );
}

#[test]
fn uniform_padding_wins_over_axis_padding() {
    assert_eq!(
        style_attr(content().gap(16).padding(true).vertical_padding(32)),
        format!("{ROW} justify-content: flex-start; gap: 16px; padding: 16px;")
    );
    assert_eq!(
        style_attr(content().gap(16).padding(40).vertical_padding(true)),
        format!("{ROW} justify-content: flex-start; gap: 16px; padding: 40px;")
    );
}

#[test]
fn axis_gaps_with_axis_padding() {
    let node = content()
        .row_gap(12)
        .column_gap(20)
        .vertical_padding(true)
        .horizontal_padding(32)
        .render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; row-gap: 12px; column-gap: 20px; padding: 12px 32px;"
    >
      Content
    </view>
    "#);
    assert_snapshot!(to_native_markup(&node), @r#"
    <view
      style={{"columnGap":20.0,"flexDirection":"row","flexWrap":"nowrap","justifyContent":"flex-start","paddingHorizontal":32.0,"paddingVertical":12.0,"rowGap":12.0}}
    >
      Content
    </view>
    "#);
}

#[test]
fn context_default_gap() {
    let node = content()
        .gap(true)
        .padding(true)
        .render_with(&ctx().with_default_gap(24.0));
    assert_eq!(
        node.as_element().and_then(|e| e.style.as_ref()).map(|s| s.to_css()),
        Some(format!("{ROW} justify-content: flex-start; gap: 24px; padding: 24px;"))
    );
}

// ---------------------------------------------------------------------------
// Style override and passthrough
// ---------------------------------------------------------------------------

#[test]
fn override_style_is_merged_last() {
    let node = content()
        .style(Style::new().background_color("red").margin(10))
        .render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start; margin: 10px; background-color: red;"
    >
      Content
    </view>
    "#);
}

#[test]
fn override_replaces_composed_values() {
    let mut config = LayoutConfig::default();
    config.vertical = true;
    let node = content()
        .layout(config)
        .gap(16)
        .style(Style::new().gap(4).padding(2))
        .render_with(&ctx());
    assert_eq!(
        node.as_element().and_then(|e| e.style.as_ref()).map(|s| s.to_css()),
        Some(
            "display: flex; flex-direction: column; flex-wrap: nowrap; justify-content: flex-start; \
             gap: 4px; padding: 2px;"
                .to_string()
        )
    );
}

#[test]
fn class_name_is_forwarded_without_interop() {
    let node = content().class_name("test-class").render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      className="test-class"
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
}

#[test]
fn many_flags_together() {
    let node = content()
        .vertical()
        .center()
        .align_center()
        .gap(12)
        .padding(true)
        .render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      style="display: flex; flex-direction: column; flex-wrap: nowrap; justify-content: center; align-items: center; gap: 12px; padding: 12px;"
    >
      Content
    </view>
    "#);
}

#[test]
fn passthrough_attributes() {
    let node = content()
        .attr("collapsable", false)
        .attr("data-testid", "test-stack")
        .render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      collapsable="false"
      data-testid="test-stack"
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Content
    </view>
    "#);
}

#[test]
fn handlers_are_forwarded() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let presses = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&presses);
    let node = Stack::new()
        .render_as(Pressable)
        .attr("onPress", Handler::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .render_with(&ctx());

    node.as_element()
        .and_then(|e| e.handler("onPress"))
        .expect("handler forwarded")
        .call();
    assert_eq!(presses.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Render targets
// ---------------------------------------------------------------------------

#[test]
fn explicit_view_target_matches_default() {
    let explicit = Stack::new().render_as(View).child("Content").render_with(&ctx());
    assert_eq!(explicit, content().render_with(&ctx()));
}

#[test]
fn custom_component_target() {
    let link = component(|mut props: Props| {
        let title = props
            .attributes
            .remove("title")
            .and_then(|t| t.as_text().map(str::to_string))
            .unwrap_or_default();
        Element::new("view")
            .style(props.style)
            .child(title)
            .children(props.children)
            .into()
    })
    .named("Link")
    .accepts_style();

    let node = Stack::new()
        .render_as(&link)
        .attr("title", "Banana")
        .child("Content")
        .render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <view
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Banana
      Content
    </view>
    "#);
}

#[test]
fn as_stack_renders_its_target() {
    let link = component(|props: Props| {
        Element::new("pressable")
            .style(props.style)
            .children(props.children)
            .into()
    })
    .named("Link")
    .accepts_style();
    let stack_link = as_stack(link);
    assert_eq!(stack_link.display_name(), Some("Stack(Link)"));

    let node = stack_link
        .stack()
        .attr("to", "https://nakazawa.tech")
        .child("Nakazawa Tech")
        .render_with(&ctx());
    assert_snapshot!(to_markup(&node), @r#"
    <pressable
      style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
    >
      Nakazawa Tech
    </pressable>
    "#);
}

#[test]
fn as_stack_of_unnamed_target() {
    let unnamed = component(|props: Props| Element::new("view").style(props.style).into())
        .accepts_style();
    assert_eq!(as_stack(unnamed).display_name(), Some("Stack"));
    assert_eq!(as_stack(Pressable).display_name(), Some("Stack(Pressable)"));
}

#[test]
fn as_stack_nested_in_a_stack() {
    let row = as_stack(View);
    let node = Stack::new()
        .vertical()
        .render_as(&row)
        .child("Content")
        .render_with(&ctx());

    // The outer stack's style overrides the inner stack's default row.
    assert_eq!(
        node.as_element().and_then(|e| e.style.as_ref()).map(|s| s.to_css()),
        Some(
            "display: flex; flex-direction: column; flex-wrap: nowrap; justify-content: flex-start;"
                .to_string()
        )
    );
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

#[test]
fn repeated_renders_reuse_the_composed_style() {
    let stack = content().gap(16).center();
    let first = stack.render_with(&ctx());
    let second = stack.render_with(&ctx());
    assert_eq!(first, second);
    assert_eq!(stack.memo().computations(), 1);

    stack.render_with(&ctx().with_default_gap(4.0));
    assert_eq!(stack.memo().computations(), 2);
}

#[test]
fn as_stack_memo_ignores_children_and_attributes() {
    let stack_view = as_stack(View);
    stack_view.stack().child("a").render_with(&ctx());
    stack_view.stack().child("b").attr("id", "x").render_with(&ctx());
    assert_eq!(stack_view.memo().computations(), 1);
    stack_view.stack().vertical().render_with(&ctx());
    assert_eq!(stack_view.memo().computations(), 2);
}

// ---------------------------------------------------------------------------
// JSON props
// ---------------------------------------------------------------------------

#[test]
fn props_from_json_render_like_the_builder() {
    let props = StackProps::from_json(&json!({
        "vertical": true,
        "alignCenter": true,
        "gap": 12,
        "padding": true,
        "self": "center",
        "style": {"backgroundColor": "red"},
        "data-testid": "stack",
        "children": ["Content"],
    }))
    .unwrap();
    let from_json = Stack::with_props(props).render_with(&ctx());

    let built = content()
        .vertical()
        .align_center()
        .gap(12)
        .padding(true)
        .align_self(Alignment::Center)
        .style(Style::new().background_color("red"))
        .attr("data-testid", "stack")
        .render_with(&ctx());
    assert_eq!(from_json, built);
}

#[test]
fn props_from_json_errors() {
    assert!(matches!(
        StackProps::from_json(&json!(["gap"])),
        Err(PropsError::NotAnObject(_))
    ));
    assert!(matches!(
        StackProps::from_json(&json!({"as": "div"})),
        Err(PropsError::TargetInProps)
    ));
    assert!(matches!(
        StackProps::from_json(&json!({"gap": "wide"})),
        Err(PropsError::Layout(_))
    ));
    assert!(matches!(
        StackProps::from_json(&json!({"onPress": {"handler": 1}})),
        Err(PropsError::InvalidProp { .. })
    ));
}

#[test]
fn props_from_json_skips_nulls() {
    let props = StackProps::from_json(&json!({"gap": null, "title": null})).unwrap();
    assert_eq!(props, StackProps::default());
}

// ---------------------------------------------------------------------------
// Output targets and layout
// ---------------------------------------------------------------------------

#[test]
fn native_markup_uses_numbers_and_camel_case() {
    let node = content()
        .vertical()
        .gap(16)
        .vertical_padding(true)
        .flex1()
        .render_with(&ctx());
    assert_snapshot!(to_markup_for(&node, Target::Native), @r#"
    <view
      style={{"flex":1.0,"flexDirection":"column","flexWrap":"nowrap","gap":16.0,"justifyContent":"flex-start","paddingVertical":16.0}}
    >
      Content
    </view>
    "#);
}

#[test]
fn gaps_and_padding_lay_out_as_expected() {
    let node = Stack::new()
        .gap(2)
        .padding(true)
        .child("ab")
        .child("cde")
        .render_with(&ctx());
    let root = layout_node(&node, 100.0, 20.0).unwrap();

    let first = &root.children[0];
    let second = &root.children[1];
    assert_eq!((first.x, first.y), (2.0, 2.0));
    assert_eq!(second.x, 2.0 + 2.0 + 2.0);
}

#[test]
fn axis_gap_override_beats_composed_gap_in_css_and_layout() {
    let overridden = Stack::new()
        .vertical()
        .gap(16)
        .style(Style::new().row_gap(4))
        .child("a")
        .child("b")
        .render_with(&ctx());
    assert_eq!(
        overridden.as_element().and_then(|e| e.style.as_ref()).map(|s| s.to_css()),
        Some(
            "display: flex; flex-direction: column; flex-wrap: nowrap; \
             justify-content: flex-start; gap: 16px; row-gap: 4px;"
                .to_string()
        )
    );

    let longhands = Stack::new()
        .vertical()
        .row_gap(4)
        .column_gap(16)
        .child("a")
        .child("b")
        .render_with(&ctx());
    let overridden = layout_node(&overridden, 10.0, 20.0).unwrap();
    assert_eq!(overridden, layout_node(&longhands, 10.0, 20.0).unwrap());
    assert_eq!(overridden.children[1].y, 5.0);
}

#[test]
fn vertical_stack_lays_out_in_a_column() {
    let node = VStack::new()
        .gap(1)
        .child("a")
        .child("b")
        .child("c")
        .render_with(&ctx());
    let root = layout_node(&node, 10.0, 10.0).unwrap();
    let ys: Vec<f32> = root.children.iter().map(|c| c.y).collect();
    assert_eq!(ys, vec![0.0, 2.0, 4.0]);
}
