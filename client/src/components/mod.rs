//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers. The drag
//! preview reads the `RwSignal<DragSession>` the host provides.

pub mod drag_preview;
