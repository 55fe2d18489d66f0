//! Test helpers: markup snapshots of rendered trees.
//!
//! Use [`to_markup`] (web) or [`to_native_markup`] (native) to turn a rendered
//! [`Node`](crate::element::Node) into text for snapshot assertions.

pub mod snapshot;

pub use snapshot::{to_markup, to_markup_for, to_native_markup};
