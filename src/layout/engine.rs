//! TaffyTree wrapper for laying out rendered trees.
//!
//! [`LayoutEngine`] mirrors a rendered [`Node`] tree into a taffy tree, runs
//! layout and reads the boxes back as a [`BoxLayout`] tree. Text leaves are
//! measured as one unit per character and one line tall.

use taffy::prelude::*;

use crate::element::Node;

use super::resolve::resolve_styles;

/// Errors from layout computation.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout failed: {0}")]
    Taffy(String),
    #[error("no tree has been synced")]
    NoRoot,
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(err: taffy::TaffyError) -> Self {
        LayoutError::Taffy(err.to_string())
    }
}

/// A computed box. `x`/`y` are relative to the parent's border box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub children: Vec<BoxLayout>,
}

/// Wraps a [`TaffyTree`] built from one rendered tree.
pub struct LayoutEngine {
    tree: TaffyTree<()>,
    root: Option<NodeId>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            root: None,
        }
    }

    /// Replace the taffy tree with one mirroring `node`.
    pub fn sync(&mut self, node: &Node) -> Result<(), LayoutError> {
        self.tree.clear();
        self.root = Some(self.build(node)?);
        Ok(())
    }

    fn build(&mut self, node: &Node) -> Result<NodeId, LayoutError> {
        match node {
            Node::Text(text) => {
                let chars = text.chars().count() as f32;
                let style = Style {
                    size: Size {
                        width: Dimension::from_length(chars),
                        height: Dimension::from_length(1.0),
                    },
                    flex_shrink: 0.0,
                    ..Style::default()
                };
                Ok(self.tree.new_leaf(style)?)
            }
            Node::Element(element) => {
                let style = element
                    .style
                    .as_ref()
                    .map(resolve_styles)
                    .unwrap_or_default();
                let children = element
                    .children
                    .iter()
                    .map(|child| self.build(child))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(self.tree.new_with_children(style, &children)?)
            }
        }
    }

    /// Run layout on the synced tree within the given available space.
    pub fn compute(&mut self, available_width: f32, available_height: f32) -> Result<(), LayoutError> {
        let root = self.root.ok_or(LayoutError::NoRoot)?;
        self.tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(available_width),
                height: AvailableSpace::Definite(available_height),
            },
        )?;
        Ok(())
    }

    /// The computed boxes, root first.
    pub fn layout(&self) -> Result<BoxLayout, LayoutError> {
        let root = self.root.ok_or(LayoutError::NoRoot)?;
        self.read(root)
    }

    fn read(&self, id: NodeId) -> Result<BoxLayout, LayoutError> {
        let layout = self.tree.layout(id)?;
        let children = self
            .tree
            .children(id)?
            .into_iter()
            .map(|child| self.read(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BoxLayout {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
            children,
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out `node` in a `width` x `height` space.
pub fn layout_node(node: &Node, width: f32, height: f32) -> Result<BoxLayout, LayoutError> {
    let mut engine = LayoutEngine::new();
    engine.sync(node)?;
    engine.compute(width, height)?;
    engine.layout()
}
