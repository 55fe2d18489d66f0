//! The stack primitive: layout flags, gap resolution, style composition and
//! the composition root.

pub mod component;
pub mod compose;
pub mod config;
pub mod gap;

pub use component::{
    as_stack, FixedStack, PropsError, Stack, StackBuilder, StackComponent, StackProps, StyleMemo,
    VStack,
};
pub use compose::compose_style;
pub use config::{Alignment, LayoutConfig, Spacing};
pub use gap::{default_gap, resolve_gap, set_default_gap};
