//! # client
//!
//! Leptos side of the drag preview. The [`components::drag_preview::DragPreview`]
//! component measures its own element and renders whatever
//! `drag_preview::layer::render_instruction` returns for the current
//! [`state::drag::DragSession`]. Everything positional is computed by the
//! `drag-preview` crate; this crate only wires signals, the DOM and logging.

pub mod components;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Mount a standalone preview layer on `<body>`.
///
/// For hosts that do not render `DragPreview` inside their own Leptos tree.
/// Returns the session signal the host's drag handlers update.
#[cfg(feature = "hydrate")]
pub fn mount() -> RwSignal<state::drag::DragSession> {
    use components::drag_preview::DragPreview;

    util::logging::init();
    let session = RwSignal::new(state::drag::DragSession::default());
    leptos::mount::mount_to_body(move || {
        provide_context(session);
        view! { <DragPreview/> }
    });
    session
}
