//! # flexstack
//!
//! A flex-layout container primitive. A [`Stack`](stack::Stack) turns named
//! layout flags (`vertical`, `center`, `gap`, `padding`, ...) into a style
//! declaration and renders a target component with it.
//!
//! ```
//! use flexstack::prelude::*;
//! use flexstack::testing::to_markup;
//!
//! let node = Stack::new()
//!     .align_center()
//!     .gap(16)
//!     .child("Content")
//!     .render_with(&RenderContext::new());
//!
//! assert_eq!(
//!     to_markup(&node),
//!     "<view\n  style=\"display: flex; flex-direction: row; flex-wrap: nowrap; \
//!      justify-content: flex-start; align-items: center; gap: 16px;\"\n>\n  Content\n</view>"
//! );
//! ```
//!
//! ## Core Systems
//!
//! - **[`stack`]**: layout flags, gap resolution, style composition, `Stack`/`VStack`/`as_stack`
//! - **[`css`]**: typed style model, property vocabulary, web and native formatters
//! - **[`element`]**: rendered nodes and the render-target traits
//! - **[`context`]**: render-time configuration (default gap, interop)
//! - **[`interop`]**: optional class-name to style mapping
//! - **[`layout`]**: taffy-powered box layout of rendered trees
//! - **[`testing`]**: markup snapshot helpers

// Style model
pub mod css;

// Rendering
pub mod context;
pub mod element;
pub mod interop;
pub mod stack;

// Verification
pub mod layout;
pub mod testing;

pub use stack::set_default_gap;

/// The common imports for building stacks.
pub mod prelude {
    pub use crate::context::RenderContext;
    pub use crate::css::styles::Style;
    pub use crate::element::{
        component, AcceptsClassName, AcceptsStyle, AttrValue, Component, Element, Handler, Host,
        Node, Pressable, Props, View,
    };
    pub use crate::stack::{
        as_stack, set_default_gap, Alignment, Spacing, Stack, StackBuilder, VStack,
    };
}
