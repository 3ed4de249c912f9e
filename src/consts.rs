//! Shared constants for the drag preview crate.

// ── Asset paths ─────────────────────────────────────────────────

/// Directory under the public url that holds item preview images.
pub const IMAGE_DIR: &str = "images";

/// File extension of item preview images.
pub const IMAGE_EXT: &str = "png";

// ── Layer defaults ──────────────────────────────────────────────

/// Stacking order of the floating preview container.
pub const DEFAULT_Z_INDEX: i32 = 1;

/// Maximum image width as a percentage of the container.
pub const DEFAULT_IMAGE_MAX_WIDTH_PCT: u8 = 80;

// ── Environment keys ────────────────────────────────────────────

pub const ENV_PUBLIC_URL: &str = "PUBLIC_URL";
pub const ENV_Z_INDEX: &str = "DRAG_PREVIEW_Z_INDEX";
pub const ENV_IMAGE_MAX_WIDTH_PCT: &str = "DRAG_PREVIEW_IMAGE_MAX_WIDTH_PCT";
