//! Floating drag preview layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once near the root of the app. While a drag is active it renders
//! the dragged item's image in a fixed, pointer-inert container that follows
//! the pointer; otherwise it renders nothing. Positioning comes entirely from
//! `drag_preview::layer::render_instruction`.
//!
//! The container measures itself on every session change. On the first tick
//! it is not mounted yet, so the translation falls back to the grab offset
//! recorded at drag start; from the next tick on it is centered under the
//! pointer. The element stays mounted for the whole drag and only its
//! attributes follow the pointer.

#[cfg(test)]
#[path = "drag_preview_test.rs"]
mod drag_preview_test;

use leptos::prelude::*;

use drag_preview::config::PreviewConfig;
use drag_preview::layer::{PreviewRender, render_instruction};

use crate::state::drag::DragSession;
use crate::util::measure::preview_geometry;
use crate::util::preview_config::preview_config;

/// Pointer-following preview of the dragged item.
///
/// Reads `RwSignal<DragSession>` from context, and `PreviewConfig` if one was
/// provided (the build-time configuration otherwise).
#[component]
pub fn DragPreview() -> impl IntoView {
    let session = expect_context::<RwSignal<DragSession>>();
    let config = use_context::<PreviewConfig>().unwrap_or_else(preview_config);
    let element = NodeRef::<leptos::html::Div>::new();

    let render = Memo::new(move |_| session.with(|s| render_instruction(s, preview_geometry(&element), &config)));
    let visible = Memo::new(move |_| render.with(Option::is_some));

    view! {
        <Show when=move || visible.get()>
            <div
                class="drag-preview"
                node_ref=element
                style=move || render.with(|r| field_or_empty(r.as_ref(), PreviewRender::container_style))
            >
                <img
                    class="drag-preview__image"
                    src=move || render.with(|r| field_or_empty(r.as_ref(), |r| r.image_src.clone()))
                    style=move || render.with(|r| field_or_empty(r.as_ref(), PreviewRender::image_style))
                    alt=""
                    draggable="false"
                />
            </div>
        </Show>
    }
}

/// One attribute of the current render, or `""` between drags.
fn field_or_empty(render: Option<&PreviewRender>, field: impl Fn(&PreviewRender) -> String) -> String {
    render.map(field).unwrap_or_default()
}
