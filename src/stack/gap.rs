//! Gap resolution and the process-wide default gap.
//!
//! The default is process lifecycle state: set it once at start-up (or in a
//! test's setup) and every later resolution picks it up. Styles that were
//! already composed keep the value they were composed with. There is no
//! locking beyond the atomic itself; rendering is assumed to be
//! single-threaded per pass.

use std::sync::atomic::{AtomicU32, Ordering};

use super::config::Spacing;

/// The default gap before anything calls [`set_default_gap`].
pub const INITIAL_DEFAULT_GAP: f32 = 8.0;

/// `f32` bits of the current default gap. `0x4100_0000` is `8.0`.
static DEFAULT_GAP: AtomicU32 = AtomicU32::new(0x4100_0000);

/// Replace the process-wide default gap used for `gap: true`.
pub fn set_default_gap(gap: f32) {
    let previous = f32::from_bits(DEFAULT_GAP.swap(gap.to_bits(), Ordering::Relaxed));
    tracing::debug!(previous, gap, "default gap changed");
}

/// The current process-wide default gap.
#[inline]
pub fn default_gap() -> f32 {
    f32::from_bits(DEFAULT_GAP.load(Ordering::Relaxed))
}

/// Resolve a spacing input against `default`.
///
/// `Unset` yields `None` (no gap). An explicit `Value(0.0)` yields `Some(0.0)`.
#[inline]
pub fn resolve_gap(spacing: Spacing, default: f32) -> Option<f32> {
    match spacing {
        Spacing::Unset => None,
        Spacing::Default => Some(default),
        Spacing::Value(v) => Some(v),
    }
}
