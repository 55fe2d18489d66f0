//! Markup rendering for snapshot tests.
//!
//! Renders a [`Node`] tree as indented markup, one attribute per line, with
//! attributes sorted by name and `style` formatted for the chosen target:
//!
//! ```text
//! <view
//!   data-testid="stack"
//!   style="display: flex; flex-direction: row; flex-wrap: nowrap; justify-content: flex-start;"
//! >
//!   Content
//! </view>
//! ```
//!
//! Handlers are not rendered. Elements without attributes print as `<view>`,
//! elements without children as `<view />`.

use crate::css::scalar::format_number;
use crate::css::serialize::Target;
use crate::element::{AttrValue, Element, Node};

const INDENT: &str = "  ";

/// Render `node` as web markup: `style` is a CSS declaration string.
pub fn to_markup(node: &Node) -> String {
    to_markup_for(node, Target::Web)
}

/// Render `node` as native markup: `style` is a JSON object.
pub fn to_native_markup(node: &Node) -> String {
    to_markup_for(node, Target::Native)
}

/// Render `node` with `style` formatted for `target`.
pub fn to_markup_for(node: &Node, target: Target) -> String {
    let mut lines = Vec::new();
    write_node(&mut lines, node, target, 0);
    lines.join("\n")
}

fn write_node(lines: &mut Vec<String>, node: &Node, target: Target, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node {
        Node::Text(text) => lines.push(format!("{indent}{text}")),
        Node::Element(element) => write_element(lines, element, target, depth),
    }
}

fn write_element(lines: &mut Vec<String>, element: &Element, target: Target, depth: usize) {
    let indent = INDENT.repeat(depth);
    let attributes = attributes(element, target);

    let open_end = if element.children.is_empty() { " />" } else { ">" };
    if attributes.is_empty() {
        lines.push(format!("{indent}<{}{open_end}", element.tag));
    } else {
        lines.push(format!("{indent}<{}", element.tag));
        for attribute in attributes {
            lines.push(format!("{indent}{INDENT}{attribute}"));
        }
        lines.push(format!("{indent}{}", open_end.trim_start()));
    }

    if element.children.is_empty() {
        return;
    }
    for child in &element.children {
        write_node(lines, child, target, depth + 1);
    }
    lines.push(format!("{indent}</{}>", element.tag));
}

/// Formatted `name="value"` pairs, sorted by name, `style` included.
fn attributes(element: &Element, target: Target) -> Vec<String> {
    let mut out: Vec<(&str, String)> = element
        .attributes
        .iter()
        .filter_map(|(name, value)| {
            let value = match value {
                AttrValue::Text(text) => format!("\"{text}\""),
                AttrValue::Number(n) => format!("\"{}\"", format_number(*n as f32)),
                AttrValue::Bool(b) => format!("\"{b}\""),
                AttrValue::Handler(_) => return None,
            };
            Some((name.as_str(), value))
        })
        .collect();

    if let Some(style) = element.style.as_ref().filter(|s| !s.is_empty()) {
        let value = match target {
            Target::Web => format!("\"{}\"", style.to_css()),
            Target::Native => format!("{{{}}}", serde_json::Value::Object(style.to_native())),
        };
        out.push(("style", value));
    }

    out.sort_by(|a, b| a.0.cmp(b.0));
    out.into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect()
}
