//! Rendered output and the rendering-target abstraction.
//!
//! A render target is anything implementing [`Component`]: it takes
//! [`Props`] (style, passthrough attributes, children) and returns a [`Node`].
//! Two marker traits gate what a stack may render into:
//!
//! - [`AcceptsStyle`]: the target honours `Props::style`. A stack only renders
//!   into targets that do.
//! - [`AcceptsClassName`]: the target may also receive a class-name attribute.
//!
//! Built-in targets: [`View`] (the default container), [`Pressable`], and
//! [`Host`] for arbitrary host tags. Function components are built with
//! [`component`].

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::css::styles::Style;

/// Passthrough attributes, kept sorted by name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// An event handler passed through as an attribute.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn() + Send + Sync>);

impl Handler {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A passthrough attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Handler(Handler),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(f64::from(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Handler> for AttrValue {
    fn from(value: Handler) -> Self {
        AttrValue::Handler(value)
    }
}

/// A rendered node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A rendered host element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    /// `None` when the element carries no style at all.
    pub style: Option<Style>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the style, dropping it when empty.
    pub fn style(mut self, style: Option<Style>) -> Self {
        self.style = style.filter(|s| !s.is_empty());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// The handler passed as `name`, if any.
    pub fn handler(&self, name: &str) -> Option<&Handler> {
        match self.attributes.get(name) {
            Some(AttrValue::Handler(handler)) => Some(handler),
            _ => None,
        }
    }
}

/// Input to a render target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    pub style: Option<Style>,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

/// A render target.
pub trait Component {
    /// Human-readable name used in diagnostics.
    fn display_name(&self) -> Option<&str> {
        None
    }

    fn render(&self, props: Props) -> Node;

    /// Render with an explicit context. Targets that render stacks themselves
    /// override this to pass the context on.
    fn render_in(&self, props: Props, _ctx: &RenderContext) -> Node {
        self.render(props)
    }
}

/// Marker: the target applies `Props::style` to what it renders.
pub trait AcceptsStyle: Component {}

/// Marker: the target may receive a class-name attribute.
pub trait AcceptsClassName: AcceptsStyle {}

impl<T: Component + ?Sized> Component for &T {
    fn display_name(&self) -> Option<&str> {
        (**self).display_name()
    }

    fn render(&self, props: Props) -> Node {
        (**self).render(props)
    }

    fn render_in(&self, props: Props, ctx: &RenderContext) -> Node {
        (**self).render_in(props, ctx)
    }
}

impl<T: AcceptsStyle + ?Sized> AcceptsStyle for &T {}
impl<T: AcceptsClassName + ?Sized> AcceptsClassName for &T {}

fn host_element(tag: &str, props: Props) -> Node {
    Node::Element(Element {
        tag: tag.to_string(),
        attributes: props.attributes,
        style: props.style.filter(|s| !s.is_empty()),
        children: props.children,
    })
}

/// The default stack container, rendered as `<view>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct View;

impl Component for View {
    fn display_name(&self) -> Option<&str> {
        Some("View")
    }

    fn render(&self, props: Props) -> Node {
        host_element("view", props)
    }
}

impl AcceptsStyle for View {}
impl AcceptsClassName for View {}

/// A pressable container, rendered as `<pressable>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pressable;

impl Component for Pressable {
    fn display_name(&self) -> Option<&str> {
        Some("Pressable")
    }

    fn render(&self, props: Props) -> Node {
        host_element("pressable", props)
    }
}

impl AcceptsStyle for Pressable {}
impl AcceptsClassName for Pressable {}

/// An arbitrary host tag such as `div` or `section`. Its name is the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Component for Host {
    fn display_name(&self) -> Option<&str> {
        Some(&self.0)
    }

    fn render(&self, props: Props) -> Node {
        host_element(&self.0, props)
    }
}

impl AcceptsStyle for Host {}
impl AcceptsClassName for Host {}

/// Type-state for function components that ignore `Props::style`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unstyled;

/// Type-state for function components that apply `Props::style`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styled;

/// A component built from a render function. See [`component`].
pub struct FnComponent<F, S = Unstyled> {
    render: F,
    name: Option<String>,
    _style: PhantomData<S>,
}

/// Build a component from a render function.
///
/// The result does not accept a style until [`FnComponent::accepts_style`]
/// is called, so it cannot be used as a stack target by accident:
///
/// ```
/// use flexstack::element::{component, Element, Node, Props};
///
/// let link = component(|props: Props| {
///     Element::new("pressable")
///         .style(props.style)
///         .children(props.children)
///         .into()
/// })
/// .named("Link")
/// .accepts_style();
/// # let _ = link;
/// ```
pub fn component<F>(render: F) -> FnComponent<F>
where
    F: Fn(Props) -> Node,
{
    FnComponent {
        render,
        name: None,
        _style: PhantomData,
    }
}

impl<F, S> FnComponent<F, S> {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<F> FnComponent<F, Unstyled> {
    /// Declare that the render function applies `Props::style`.
    pub fn accepts_style(self) -> FnComponent<F, Styled> {
        FnComponent {
            render: self.render,
            name: self.name,
            _style: PhantomData,
        }
    }
}

impl<F, S> fmt::Debug for FnComponent<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComponent").field("name", &self.name).finish()
    }
}

impl<F, S> Component for FnComponent<F, S>
where
    F: Fn(Props) -> Node,
{
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn render(&self, props: Props) -> Node {
        (self.render)(props)
    }
}

impl<F> AcceptsStyle for FnComponent<F, Styled> where F: Fn(Props) -> Node {}
