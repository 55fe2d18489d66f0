//! The stack composition root: [`Stack`], [`VStack`] and [`as_stack`].
//!
//! A stack partitions its input into layout flags (consumed) and everything
//! else (forwarded), composes a base style from the flags, merges the
//! caller's override on top and renders its target with the result.
//!
//! ```
//! use flexstack::prelude::*;
//!
//! let node = Stack::new()
//!     .vertical()
//!     .gap(16)
//!     .padding(true)
//!     .attr("data-testid", "list")
//!     .child("Content")
//!     .render_with(&RenderContext::new());
//!
//! let element = node.as_element().unwrap();
//! assert_eq!(element.tag, "view");
//! assert_eq!(
//!     element.style.as_ref().unwrap().to_css(),
//!     "display: flex; flex-direction: column; flex-wrap: nowrap; \
//!      justify-content: flex-start; gap: 16px; padding: 16px;"
//! );
//! ```
//!
//! Targets must accept a style:
//!
//! ```compile_fail
//! use flexstack::prelude::*;
//!
//! let no_style = component(|props: Props| Element::new("view").children(props.children).into());
//! Stack::new().render_as(no_style);
//! ```
//!
//! ```compile_fail
//! use flexstack::prelude::*;
//!
//! let no_style = component(|props: Props| Element::new("view").children(props.children).into());
//! as_stack(no_style);
//! ```
//!
//! A vertical stack is always vertical:
//!
//! ```compile_fail
//! use flexstack::prelude::*;
//!
//! VStack::new().vertical();
//! ```
//!
//! A fixed-target stack cannot be retargeted, and only takes a class name when
//! its target does:
//!
//! ```compile_fail
//! use flexstack::prelude::*;
//!
//! let link = component(|props: Props| Element::new("pressable").style(props.style).into())
//!     .accepts_style();
//! let stack_link = as_stack(link);
//! stack_link.stack().render_as(View);
//! ```
//!
//! ```compile_fail
//! use flexstack::prelude::*;
//!
//! let link = component(|props: Props| Element::new("pressable").style(props.style).into())
//!     .accepts_style();
//! let stack_link = as_stack(link);
//! stack_link.stack().class_name("test-class");
//! ```

use std::cell::{Cell, RefCell};

use serde_json::{Map, Value};

use crate::context::RenderContext;
use crate::css::styles::Style;
use crate::css::properties::PropertyError;
use crate::element::{
    AcceptsClassName, AcceptsStyle, AttrValue, Attributes, Component, Node, Props, View,
};
use crate::interop::CLASS_NAME_ATTRIBUTE;

use super::compose::compose_style;
use super::config::{Alignment, LayoutConfig, Spacing};

/// Errors from building stack props out of JSON.
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    #[error("props must be a JSON object, got: {0}")]
    NotAnObject(Value),
    #[error("invalid layout flags: {0}")]
    Layout(#[from] serde_json::Error),
    #[error("invalid style override: {0}")]
    Style(#[from] PropertyError),
    #[error("invalid value for prop '{name}': {message}")]
    InvalidProp { name: String, message: String },
    #[error("the render target is chosen in code, not in props")]
    TargetInProps,
}

/// Everything a stack is rendered from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackProps {
    pub layout: LayoutConfig,
    /// Merged over the composed style, override values winning.
    pub style: Option<Style>,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl StackProps {
    /// Partition a JSON props object.
    ///
    /// Layout flags are deserialized into [`LayoutConfig`], `style` is read as
    /// a native style object, `children` as text, and every other key is
    /// forwarded as a passthrough attribute. `null` values are skipped.
    ///
    /// ```
    /// use flexstack::stack::StackProps;
    /// use serde_json::json;
    ///
    /// let props = StackProps::from_json(&json!({
    ///     "gap": 16,
    ///     "alignCenter": true,
    ///     "style": {"backgroundColor": "red"},
    ///     "data-testid": "stack",
    ///     "children": "Content",
    /// }))
    /// .unwrap();
    /// assert!(props.layout.align_center);
    /// assert!(props.attributes.contains_key("data-testid"));
    /// assert_eq!(props.children.len(), 1);
    /// ```
    pub fn from_json(value: &Value) -> Result<StackProps, PropsError> {
        let object = value
            .as_object()
            .ok_or_else(|| PropsError::NotAnObject(value.clone()))?;

        let mut flags = Map::new();
        let mut props = StackProps::default();

        for (name, value) in object {
            if value.is_null() {
                continue;
            }
            if LayoutConfig::is_flag(name) {
                flags.insert(name.clone(), value.clone());
                continue;
            }
            match name.as_str() {
                "as" => return Err(PropsError::TargetInProps),
                "style" => {
                    let style = value.as_object().ok_or_else(|| PropsError::InvalidProp {
                        name: name.clone(),
                        message: "expected a style object".into(),
                    })?;
                    props.style = Some(Style::from_native_json(style)?);
                }
                "children" => props.children = json_children(value)?,
                _ => {
                    tracing::trace!(prop = %name, "forwarding prop");
                    props.attributes.insert(name.clone(), json_attribute(name, value)?);
                }
            }
        }

        props.layout = serde_json::from_value(Value::Object(flags))?;
        Ok(props)
    }
}

fn json_attribute(name: &str, value: &Value) -> Result<AttrValue, PropsError> {
    match value {
        Value::String(s) => Ok(AttrValue::Text(s.clone())),
        Value::Bool(b) => Ok(AttrValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(AttrValue::Number).ok_or_else(|| {
            PropsError::InvalidProp {
                name: name.to_string(),
                message: format!("unrepresentable number {n}"),
            }
        }),
        other => Err(PropsError::InvalidProp {
            name: name.to_string(),
            message: format!("expected a string, number or bool, got: {other}"),
        }),
    }
}

fn json_children(value: &Value) -> Result<Vec<Node>, PropsError> {
    let text = |value: &Value| match value {
        Value::String(s) => Ok(Node::Text(s.clone())),
        Value::Number(n) => Ok(Node::Text(n.to_string())),
        other => Err(PropsError::InvalidProp {
            name: "children".into(),
            message: format!("expected text, got: {other}"),
        }),
    };
    match value {
        Value::Array(items) => items.iter().filter(|v| !v.is_null()).map(text).collect(),
        single => Ok(vec![text(single)?]),
    }
}

/// The last composed style and the inputs it was composed from.
///
/// The override style and passthrough attributes are not part of the key:
/// they are applied after composition.
#[derive(Debug, Default)]
pub struct StyleMemo {
    last: RefCell<Option<(LayoutConfig, f32, Style)>>,
    computations: Cell<usize>,
}

impl StyleMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The composed style for `config`, recomputed only when `config` or
    /// `default_gap` differ from the previous call.
    pub fn compose(&self, config: &LayoutConfig, default_gap: f32) -> Style {
        let mut last = self.last.borrow_mut();
        if let Some((last_config, last_gap, style)) = last.as_ref() {
            if last_config == config && *last_gap == default_gap {
                return style.clone();
            }
        }

        tracing::trace!(default_gap, "composing stack style");
        let style = compose_style(config, default_gap);
        self.computations.set(self.computations.get() + 1);
        *last = Some((config.clone(), default_gap, style.clone()));
        style
    }

    /// How many times a style was actually composed.
    pub fn computations(&self) -> usize {
        self.computations.get()
    }
}

fn render_stack<C: Component + ?Sized>(
    target: &C,
    props: StackProps,
    memo: &StyleMemo,
    ctx: &RenderContext,
) -> Node {
    let StackProps {
        layout,
        style: override_style,
        mut attributes,
        children,
    } = props;

    let mut style = memo.compose(&layout, ctx.default_gap);

    if let Some(interop) = &ctx.interop {
        match attributes.remove(CLASS_NAME_ATTRIBUTE) {
            Some(AttrValue::Text(classes)) => {
                if let Some(class_style) = interop.resolve(&classes) {
                    style = style.merge(&class_style);
                }
            }
            Some(other) => {
                attributes.insert(CLASS_NAME_ATTRIBUTE.to_string(), other);
            }
            None => {}
        }
    }

    if let Some(override_style) = override_style {
        style = style.merge(&override_style);
    }

    target.render_in(
        Props {
            style: Some(style),
            attributes,
            children,
        },
        ctx,
    )
}

/// Builder methods shared by every stack flavour.
pub trait StackBuilder: Sized {
    fn props_mut(&mut self) -> &mut StackProps;

    fn with(mut self, f: impl FnOnce(&mut StackProps)) -> Self {
        f(self.props_mut());
        self
    }

    /// Replace every layout flag at once.
    fn layout(self, layout: LayoutConfig) -> Self {
        self.with(|p| p.layout = layout)
    }

    fn reverse(self) -> Self {
        self.with(|p| p.layout.reverse = true)
    }

    fn wrap(self) -> Self {
        self.with(|p| p.layout.wrap = true)
    }

    fn inline(self) -> Self {
        self.with(|p| p.layout.inline = true)
    }

    fn safe(self) -> Self {
        self.with(|p| p.layout.safe = true)
    }

    fn center(self) -> Self {
        self.with(|p| p.layout.center = true)
    }

    fn end(self) -> Self {
        self.with(|p| p.layout.end = true)
    }

    fn between(self) -> Self {
        self.with(|p| p.layout.between = true)
    }

    fn evenly(self) -> Self {
        self.with(|p| p.layout.evenly = true)
    }

    fn around(self) -> Self {
        self.with(|p| p.layout.around = true)
    }

    fn align_start(self) -> Self {
        self.with(|p| p.layout.align_start = true)
    }

    fn align_center(self) -> Self {
        self.with(|p| p.layout.align_center = true)
    }

    fn align_end(self) -> Self {
        self.with(|p| p.layout.align_end = true)
    }

    fn baseline(self) -> Self {
        self.with(|p| p.layout.baseline = true)
    }

    fn content(self, alignment: Alignment) -> Self {
        self.with(|p| p.layout.content = Some(alignment))
    }

    /// The `self` flag: alignment of the stack inside its own parent.
    fn align_self(self, alignment: Alignment) -> Self {
        self.with(|p| p.layout.self_ = Some(alignment))
    }

    fn flex1(self) -> Self {
        self.with(|p| p.layout.flex1 = true)
    }

    fn stretch(self) -> Self {
        self.with(|p| p.layout.stretch = true)
    }

    fn shrink0(self) -> Self {
        self.with(|p| p.layout.shrink0 = true)
    }

    fn gap(self, gap: impl Into<Spacing>) -> Self {
        self.with(|p| p.layout.gap = gap.into())
    }

    fn row_gap(self, gap: impl Into<Spacing>) -> Self {
        self.with(|p| p.layout.row_gap = gap.into())
    }

    fn column_gap(self, gap: impl Into<Spacing>) -> Self {
        self.with(|p| p.layout.column_gap = gap.into())
    }

    fn padding(self, padding: impl Into<Spacing>) -> Self {
        self.with(|p| p.layout.padding = padding.into())
    }

    fn vertical_padding(self, padding: impl Into<Spacing>) -> Self {
        self.with(|p| p.layout.vertical_padding = padding.into())
    }

    fn horizontal_padding(self, padding: impl Into<Spacing>) -> Self {
        self.with(|p| p.layout.horizontal_padding = padding.into())
    }

    /// Override style, merged over the composed one.
    fn style(self, style: Style) -> Self {
        self.with(|p| p.style = Some(style))
    }

    fn attr(self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.with(|p| {
            p.attributes.insert(name.into(), value.into());
        })
    }

    fn child(self, child: impl Into<Node>) -> Self {
        self.with(|p| p.children.push(child.into()))
    }

    fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        self.with(|p| p.children.extend(children))
    }
}

/// A flex container rendered as `C` (a [`View`] by default).
#[derive(Debug)]
pub struct Stack<C = View> {
    target: C,
    props: StackProps,
    memo: StyleMemo,
}

impl Stack<View> {
    pub fn new() -> Self {
        Self::with_props(StackProps::default())
    }

    pub fn with_props(props: StackProps) -> Self {
        Stack {
            target: View,
            props,
            memo: StyleMemo::new(),
        }
    }
}

impl Default for Stack<View> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AcceptsStyle> Stack<C> {
    /// Render into `target` instead.
    pub fn render_as<T: AcceptsStyle>(self, target: T) -> Stack<T> {
        Stack {
            target,
            props: self.props,
            memo: StyleMemo::new(),
        }
    }

    pub fn vertical(self) -> Self {
        self.with(|p| p.layout.vertical = true)
    }

    pub fn props(&self) -> &StackProps {
        &self.props
    }

    pub fn memo(&self) -> &StyleMemo {
        &self.memo
    }

    /// Render against the process-wide default gap and interop hook.
    pub fn render(&self) -> Node {
        self.render_with(&RenderContext::current())
    }

    pub fn render_with(&self, ctx: &RenderContext) -> Node {
        render_stack(&self.target, self.props.clone(), &self.memo, ctx)
    }
}

impl<C: AcceptsClassName> Stack<C> {
    pub fn class_name(self, classes: impl Into<String>) -> Self {
        self.attr(CLASS_NAME_ATTRIBUTE, classes.into())
    }
}

impl<C> StackBuilder for Stack<C> {
    fn props_mut(&mut self) -> &mut StackProps {
        &mut self.props
    }
}

/// A [`Stack`] whose direction is always a column.
#[derive(Debug)]
pub struct VStack<C = View>(Stack<C>);

impl VStack<View> {
    pub fn new() -> Self {
        VStack(Stack::new())
    }

    pub fn with_props(props: StackProps) -> Self {
        VStack(Stack::with_props(props))
    }
}

impl Default for VStack<View> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AcceptsStyle> VStack<C> {
    pub fn render_as<T: AcceptsStyle>(self, target: T) -> VStack<T> {
        VStack(self.0.render_as(target))
    }

    pub fn render(&self) -> Node {
        self.render_with(&RenderContext::current())
    }

    pub fn render_with(&self, ctx: &RenderContext) -> Node {
        let mut props = self.0.props.clone();
        props.layout.vertical = true;
        render_stack(&self.0.target, props, &self.0.memo, ctx)
    }
}

impl<C: AcceptsClassName> VStack<C> {
    pub fn class_name(self, classes: impl Into<String>) -> Self {
        VStack(self.0.class_name(classes))
    }
}

impl<C> StackBuilder for VStack<C> {
    fn props_mut(&mut self) -> &mut StackProps {
        &mut self.0.props
    }
}

/// A stack with its target fixed, see [`as_stack`].
///
/// It is itself a style-accepting component, so it can be used as another
/// stack's target; when rendered that way it composes the default layout and
/// treats the incoming style as its override.
#[derive(Debug)]
pub struct StackComponent<T> {
    target: T,
    name: String,
    memo: StyleMemo,
}

/// Turn a style-accepting component into a stack that always renders as it.
///
/// ```
/// use flexstack::prelude::*;
///
/// let link = component(|props: Props| {
///     Element::new("pressable")
///         .style(props.style)
///         .children(props.children)
///         .into()
/// })
/// .named("Link")
/// .accepts_style();
///
/// let stack_link = as_stack(link);
/// assert_eq!(stack_link.display_name(), Some("Stack(Link)"));
///
/// let node = stack_link.stack().child("Nakazawa Tech").render_with(&RenderContext::new());
/// assert_eq!(node.as_element().unwrap().tag, "pressable");
/// ```
pub fn as_stack<T: AcceptsStyle>(target: T) -> StackComponent<T> {
    let name = match target.display_name() {
        Some(name) if !name.is_empty() => format!("Stack({name})"),
        _ => "Stack".to_string(),
    };
    StackComponent {
        target,
        name,
        memo: StyleMemo::new(),
    }
}

impl<T: AcceptsStyle> StackComponent<T> {
    /// Start building one render of this stack.
    pub fn stack(&self) -> FixedStack<'_, T> {
        FixedStack {
            component: self,
            props: StackProps::default(),
        }
    }

    pub fn memo(&self) -> &StyleMemo {
        &self.memo
    }

    pub fn render_props(&self, props: StackProps, ctx: &RenderContext) -> Node {
        render_stack(&self.target, props, &self.memo, ctx)
    }
}

impl<T: AcceptsStyle> Component for StackComponent<T> {
    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn render(&self, props: Props) -> Node {
        self.render_in(props, &RenderContext::current())
    }

    fn render_in(&self, props: Props, ctx: &RenderContext) -> Node {
        let props = StackProps {
            layout: LayoutConfig::default(),
            style: props.style,
            attributes: props.attributes,
            children: props.children,
        };
        self.render_props(props, ctx)
    }
}

impl<T: AcceptsStyle> AcceptsStyle for StackComponent<T> {}
impl<T: AcceptsClassName> AcceptsClassName for StackComponent<T> {}

/// One render of a [`StackComponent`]. It has no way to change the target.
#[derive(Debug)]
pub struct FixedStack<'a, T> {
    component: &'a StackComponent<T>,
    props: StackProps,
}

impl<T: AcceptsStyle> FixedStack<'_, T> {
    pub fn vertical(self) -> Self {
        self.with(|p| p.layout.vertical = true)
    }

    pub fn render(self) -> Node {
        self.render_with(&RenderContext::current())
    }

    pub fn render_with(self, ctx: &RenderContext) -> Node {
        self.component.render_props(self.props, ctx)
    }
}

impl<T: AcceptsClassName> FixedStack<'_, T> {
    pub fn class_name(self, classes: impl Into<String>) -> Self {
        self.attr(CLASS_NAME_ATTRIBUTE, classes.into())
    }
}

impl<T> StackBuilder for FixedStack<'_, T> {
    fn props_mut(&mut self) -> &mut StackProps {
        &mut self.props
    }
}
