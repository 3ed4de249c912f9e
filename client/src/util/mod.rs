//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (DOM measurement,
//! compile-time configuration, console logging) from component logic.

pub mod logging;
pub mod measure;
pub mod preview_config;
