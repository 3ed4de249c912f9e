//! Preview element measurement.
//!
//! The preview `<div>` only has a size once it is mounted. Until then
//! measurement yields `None` and the offset calculator uses its parent-offset
//! fallback.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use drag_preview::geometry::Size;
use leptos::prelude::*;

/// Measured size of the preview element, if it is mounted and laid out.
///
/// Reads the node without tracking it; callers re-measure on every snapshot
/// change.
#[cfg(feature = "hydrate")]
pub fn preview_geometry(node: &NodeRef<leptos::html::Div>) -> Option<Size> {
    let element = node.get_untracked()?;
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    size_from_rect(rect.width(), rect.height())
}

/// Server rendering has no DOM to measure.
#[cfg(not(feature = "hydrate"))]
pub fn preview_geometry(_node: &NodeRef<leptos::html::Div>) -> Option<Size> {
    None
}

/// A usable size from raw bounding-box extents.
///
/// A mounted 0x0 element still counts as measured and is centered like any
/// other. Only negative or non-finite extents are rejected.
pub fn size_from_rect(width: f64, height: f64) -> Option<Size> {
    let usable = |v: f64| v.is_finite() && v >= 0.0;
    if usable(width) && usable(height) {
        Some(Size::new(width, height))
    } else {
        None
    }
}
