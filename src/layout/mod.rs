//! Box layout: taffy integration and style resolution.

pub mod engine;
pub mod resolve;

pub use engine::{layout_node, BoxLayout, LayoutEngine, LayoutError};
