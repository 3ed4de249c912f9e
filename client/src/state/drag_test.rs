use drag_preview::geometry::Size;
use drag_preview::offset::compute_translation;

use super::*;

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_session_is_idle() {
    let session = DragSession::default();
    assert!(!session.is_active());
    assert_eq!(session.snapshot(), &MonitorSnapshot::idle());
}

#[test]
fn begin_records_initial_offsets() {
    let mut session = DragSession::default();
    session.begin(DragItem::new("sword"), Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    assert!(session.is_active());
    assert_eq!(session.client_offset(), Some(Point::new(50.0, 50.0)));
    assert_eq!(session.initial_client_offset(), Some(PartialPoint::new(Some(50.0), Some(50.0))));
    assert_eq!(session.initial_source_client_offset(), Some(Point::new(10.0, 10.0)));
    assert_eq!(session.item().map(|i| i.name.as_str()), Some("sword"));
}

#[test]
fn pointer_moved_updates_only_current_offset() {
    let mut session = DragSession::default();
    session.begin(DragItem::new("sword"), Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    session.pointer_moved(Some(Point::new(60.0, 60.0)));
    assert_eq!(session.client_offset(), Some(Point::new(60.0, 60.0)));
    assert_eq!(session.initial_client_offset(), Some(PartialPoint::new(Some(50.0), Some(50.0))));
}

#[test]
fn pointer_leaving_viewport_clears_current_offset() {
    let mut session = DragSession::default();
    session.begin(DragItem::new("sword"), Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    session.pointer_moved(None);
    assert_eq!(session.client_offset(), None);
    assert!(session.is_active());
}

#[test]
fn pointer_moved_without_drag_is_ignored() {
    let mut session = DragSession::default();
    session.pointer_moved(Some(Point::new(1.0, 1.0)));
    assert_eq!(session, DragSession::default());
}

#[test]
fn end_discards_everything() {
    let mut session = DragSession::default();
    session.begin(DragItem::new("sword"), Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    session.end();
    assert_eq!(session, DragSession::default());
}

// =============================================================
// Feeding the calculator
// =============================================================

#[test]
fn session_drives_fallback_translation() {
    let mut session = DragSession::default();
    session.begin(DragItem::new("sword"), Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    session.pointer_moved(Some(Point::new(60.0, 60.0)));
    assert_eq!(compute_translation(&session, None), Some(Point::new(20.0, 20.0)));
}

#[test]
fn session_drives_centered_translation() {
    let mut session = DragSession::default();
    session.begin(DragItem::new("sword"), Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    session.pointer_moved(Some(Point::new(100.0, 100.0)));
    assert_eq!(compute_translation(&session, Some(Size::new(40.0, 20.0))), Some(Point::new(80.0, 90.0)));
}

#[test]
fn partial_begin_falls_back_to_pointer() {
    let mut session = DragSession::default();
    session.begin_partial(
        DragItem::new("sword"),
        Some(Point::new(30.0, 40.0)),
        PartialPoint::new(Some(30.0), None),
        Some(Point::new(5.0, 5.0)),
    );
    assert_eq!(compute_translation(&session, None), Some(Point::new(30.0, 40.0)));
}

// =============================================================
// Context
// =============================================================

#[test]
fn provided_session_is_idle_and_reachable() {
    let owner = Owner::new();
    owner.with(|| {
        let session = provide_drag_session();
        assert!(!session.get_untracked().is_active());
        let from_context = use_context::<RwSignal<DragSession>>();
        assert!(from_context.is_some());
        session.update(|s| s.begin(DragItem::new("sword"), Point::new(1.0, 1.0), Point::ZERO));
        assert!(from_context.is_some_and(|s| s.get_untracked().is_active()));
    });
}
