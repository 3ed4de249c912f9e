//! Drag session state fed to the preview layer.
//!
//! ARCHITECTURE
//! ============
//! Drag sources call [`DragSession::begin`], pointer handlers call
//! [`DragSession::pointer_moved`] on every move, and the drop path calls
//! [`DragSession::end`]. The session lives in an `RwSignal` provided through
//! context; `DragPreview` reads it and recomputes on each change, so no
//! callback is registered with the calculator itself.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use drag_preview::geometry::{PartialPoint, Point};
use drag_preview::monitor::{DragItem, DragMonitor, MonitorSnapshot};
use leptos::prelude::*;

/// Create an idle session signal and provide it to descendants.
pub fn provide_drag_session() -> RwSignal<DragSession> {
    let session = RwSignal::new(DragSession::default());
    provide_context(session);
    session
}

/// The in-progress drag, if any, as a monitor snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    snapshot: MonitorSnapshot,
}

impl DragSession {
    /// Start dragging `item`, grabbed at `pointer` on a source whose top-left
    /// corner is at `source_origin`.
    pub fn begin(&mut self, item: DragItem, pointer: Point, source_origin: Point) {
        self.snapshot = MonitorSnapshot {
            client_offset: Some(pointer),
            initial_client_offset: Some(pointer.into()),
            initial_source_client_offset: Some(source_origin),
            is_dragging: true,
            item: Some(item),
        };
    }

    /// Start a drag whose initial pointer offset arrived incomplete.
    ///
    /// Touch hosts sometimes report the first pointer position without one of
    /// its coordinates; the preview layer copes with that on its own.
    pub fn begin_partial(&mut self, item: DragItem, pointer: Option<Point>, initial: PartialPoint, source_origin: Option<Point>) {
        self.snapshot = MonitorSnapshot {
            client_offset: pointer,
            initial_client_offset: Some(initial),
            initial_source_client_offset: source_origin,
            is_dragging: true,
            item: Some(item),
        };
    }

    /// Record the pointer for this tick. `None` means it left the viewport.
    pub fn pointer_moved(&mut self, pointer: Option<Point>) {
        if !self.snapshot.is_dragging {
            return;
        }
        self.snapshot.client_offset = pointer;
    }

    /// Finish the drag; nothing from it is kept.
    pub fn end(&mut self) {
        self.snapshot = MonitorSnapshot::idle();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapshot.is_dragging
    }

    #[must_use]
    pub fn snapshot(&self) -> &MonitorSnapshot {
        &self.snapshot
    }
}

impl DragMonitor for DragSession {
    fn client_offset(&self) -> Option<Point> {
        self.snapshot.client_offset()
    }

    fn initial_client_offset(&self) -> Option<PartialPoint> {
        self.snapshot.initial_client_offset()
    }

    fn initial_source_client_offset(&self) -> Option<Point> {
        self.snapshot.initial_source_client_offset()
    }

    fn is_dragging(&self) -> bool {
        self.snapshot.is_dragging()
    }

    fn item(&self) -> Option<&DragItem> {
        self.snapshot.item()
    }
}
