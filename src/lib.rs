//! Positioning for the floating image that follows the pointer during a drag.
//!
//! The host drag-and-drop runtime hands over a [`monitor::MonitorSnapshot`] on
//! every pointer tick. This crate turns that snapshot, plus the measured size
//! of the preview element when one exists, into a translation vector and a
//! ready-to-render [`layer::PreviewRender`]. Nothing here touches the DOM, so
//! the whole crate runs under plain `cargo test`; the Leptos side lives in
//! `client/`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `Point`, `PartialPoint`, `Size` and subtraction |
//! | [`monitor`] | The `DragMonitor` query trait and its owned snapshot |
//! | [`offset`] | Translation and parent-offset calculation |
//! | [`asset`] | Preview image path convention |
//! | [`layer`] | Render instruction and inline styles |
//! | [`config`] | `PreviewConfig` loading and `ConfigError` |
//! | [`consts`] | Defaults shared by config and layer |

pub mod asset;
pub mod config;
pub mod consts;
pub mod geometry;
pub mod layer;
pub mod monitor;
pub mod offset;
