//! Read-only query surface over an in-progress drag.
//!
//! The host runtime owns the drag state and rebuilds a snapshot on every
//! pointer tick. Calculators only ever read through [`DragMonitor`], so a host
//! can hand over its own monitor type instead of copying into
//! [`MonitorSnapshot`].

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{PartialPoint, Point};

/// Metadata of the item being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragItem {
    /// Item name; selects the preview image.
    pub name: String,
}

impl DragItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Queries a drag monitor answers for one tick.
pub trait DragMonitor {
    /// Current pointer position, if the pointer is over the viewport.
    fn client_offset(&self) -> Option<Point>;

    /// Pointer position when the drag started.
    fn initial_client_offset(&self) -> Option<PartialPoint>;

    /// Top-left of the drag source when the drag started.
    fn initial_source_client_offset(&self) -> Option<Point>;

    fn is_dragging(&self) -> bool;

    fn item(&self) -> Option<&DragItem>;
}

/// Owned snapshot of a drag monitor, as delivered by the host.
///
/// Field names follow the host's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnapshot {
    #[serde(default)]
    pub client_offset: Option<Point>,
    #[serde(default)]
    pub initial_client_offset: Option<PartialPoint>,
    #[serde(default)]
    pub initial_source_client_offset: Option<Point>,
    #[serde(default)]
    pub is_dragging: bool,
    #[serde(default)]
    pub item: Option<DragItem>,
}

impl MonitorSnapshot {
    /// Snapshot of a monitor with no drag in progress.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Copy any monitor's answers into an owned snapshot.
    #[must_use]
    pub fn capture(monitor: &impl DragMonitor) -> Self {
        Self {
            client_offset: monitor.client_offset(),
            initial_client_offset: monitor.initial_client_offset(),
            initial_source_client_offset: monitor.initial_source_client_offset(),
            is_dragging: monitor.is_dragging(),
            item: monitor.item().cloned(),
        }
    }
}

impl DragMonitor for MonitorSnapshot {
    fn client_offset(&self) -> Option<Point> {
        self.client_offset
    }

    fn initial_client_offset(&self) -> Option<PartialPoint> {
        self.initial_client_offset
    }

    fn initial_source_client_offset(&self) -> Option<Point> {
        self.initial_source_client_offset
    }

    fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    fn item(&self) -> Option<&DragItem> {
        self.item.as_ref()
    }
}
