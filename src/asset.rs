//! Preview image path convention.
//!
//! Item images are served as `<public_url>/images/<item-name>.png`. The path
//! shape is shared with whatever serves the images and must not drift.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use crate::config::PreviewConfig;
use crate::consts::{IMAGE_DIR, IMAGE_EXT};

/// Image source for the item named `item_name`.
#[must_use]
pub fn image_src(config: &PreviewConfig, item_name: &str) -> String {
    let root = config.public_url.trim_end_matches('/');
    format!("{root}/{IMAGE_DIR}/{item_name}.{IMAGE_EXT}")
}
