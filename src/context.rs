//! Render-time configuration.

use std::fmt;
use std::sync::Arc;

use crate::interop::{self, ClassInterop};
use crate::stack::gap::{self, INITIAL_DEFAULT_GAP};

/// Configuration a stack reads while rendering.
///
/// [`RenderContext::current`] snapshots the process-wide state (default gap
/// and installed interop hook). Tests and embedders that want isolation build
/// one explicitly instead.
#[derive(Clone)]
pub struct RenderContext {
    /// Gap used wherever a spacing flag is `true`.
    pub default_gap: f32,
    /// Class-name interop, when available.
    pub interop: Option<Arc<dyn ClassInterop>>,
}

impl RenderContext {
    /// A context with the initial default gap and no interop.
    pub fn new() -> Self {
        Self {
            default_gap: INITIAL_DEFAULT_GAP,
            interop: None,
        }
    }

    /// The process-wide state as of now.
    pub fn current() -> Self {
        Self {
            default_gap: gap::default_gap(),
            interop: interop::probe(),
        }
    }

    pub fn with_default_gap(mut self, gap: f32) -> Self {
        self.default_gap = gap;
        self
    }

    pub fn with_interop(mut self, hook: impl ClassInterop + 'static) -> Self {
        self.interop = Some(Arc::new(hook));
        self
    }

    pub fn without_interop(mut self) -> Self {
        self.interop = None;
        self
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("default_gap", &self.default_gap)
            .field("interop", &self.interop.is_some())
            .finish()
    }
}
