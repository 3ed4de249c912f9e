//! Translation of the floating preview for one drag tick.
//!
//! Once the preview element has been measured it is centered under the
//! pointer. Before that (the first tick, while it mounts) the preview keeps the
//! grab point the user picked on the drag source: the pointer minus the
//! distance between where the pointer started and where the source sat.

#[cfg(test)]
#[path = "offset_test.rs"]
mod offset_test;

use tracing::debug;

use crate::geometry::{Point, Size};
use crate::monitor::DragMonitor;

/// Translation that places the preview for this tick.
///
/// Returns `None` when the monitor has no current pointer offset; nothing
/// should be rendered then.
#[must_use]
pub fn compute_translation(monitor: &impl DragMonitor, preview: Option<Size>) -> Option<Point> {
    let pointer = monitor.client_offset()?;
    match preview {
        Some(size) => Some(pointer - size.center()),
        None => Some(pointer - parent_offset(monitor)),
    }
}

/// Initial pointer offset minus initial drag-source offset.
///
/// Collapses to [`Point::ZERO`] when either is absent or the pointer offset
/// is missing a coordinate. The missing-coordinate case shows up right after
/// the host first switches from its pointer backend to its touch backend;
/// the cause is unknown, so it is logged rather than hidden.
#[must_use]
pub fn parent_offset(monitor: &impl DragMonitor) -> Point {
    let Some(client) = monitor.initial_client_offset() else {
        debug!("no initial client offset; parent offset defaults to zero");
        return Point::ZERO;
    };
    let Some(source) = monitor.initial_source_client_offset() else {
        debug!("no initial source offset; parent offset defaults to zero");
        return Point::ZERO;
    };
    let Some(client) = client.complete() else {
        debug!(x = ?client.x, y = ?client.y, "initial client offset has undefined coordinates; parent offset defaults to zero");
        return Point::ZERO;
    };
    client - source
}
