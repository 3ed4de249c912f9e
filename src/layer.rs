//! Render instruction for the floating preview.
//!
//! The preview is a fixed-position container at the viewport origin, moved by
//! a CSS translate and ignoring pointer events so it never becomes a drop
//! target itself. When there is nothing to show the instruction is `None` and
//! the host renders nothing.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use crate::asset::image_src;
use crate::config::PreviewConfig;
use crate::geometry::{Point, Size};
use crate::monitor::DragMonitor;
use crate::offset::compute_translation;

/// What to draw for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRender {
    pub translation: Point,
    pub image_src: String,
    pub z_index: i32,
    pub image_max_width_pct: u8,
}

impl PreviewRender {
    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.translation.x, self.translation.y)
    }

    /// Inline style of the positioned container.
    #[must_use]
    pub fn container_style(&self) -> String {
        let transform = self.transform();
        format!(
            "position: fixed; pointer-events: none; top: 0; left: 0; transform: {transform}; -webkit-transform: {transform}; z-index: {};",
            self.z_index
        )
    }

    /// Inline style of the image inside the container.
    #[must_use]
    pub fn image_style(&self) -> String {
        format!("image-rendering: -webkit-optimize-contrast; max-width: {}%;", self.image_max_width_pct)
    }
}

/// Build the render instruction for this tick.
///
/// `None` unless a drag is active, the pointer has a position, and the
/// monitor knows which item is being dragged.
#[must_use]
pub fn render_instruction(
    monitor: &impl DragMonitor,
    preview: Option<Size>,
    config: &PreviewConfig,
) -> Option<PreviewRender> {
    if !monitor.is_dragging() {
        return None;
    }
    let item = monitor.item()?;
    let translation = compute_translation(monitor, preview)?;
    Some(PreviewRender {
        translation,
        image_src: image_src(config, &item.name),
        z_index: config.z_index,
        image_max_width_pct: config.image_max_width_pct,
    })
}
