//! Preview configuration baked in at compile time.
//!
//! The browser has no process environment, so the keys `PreviewConfig` reads
//! are captured with `option_env!` when the WASM bundle is built.

#[cfg(test)]
#[path = "preview_config_test.rs"]
mod preview_config_test;

use drag_preview::config::PreviewConfig;
use drag_preview::consts::{ENV_IMAGE_MAX_WIDTH_PCT, ENV_PUBLIC_URL, ENV_Z_INDEX};

/// Compile-time value of one configuration key.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_PUBLIC_URL => option_env!("PUBLIC_URL"),
        ENV_Z_INDEX => option_env!("DRAG_PREVIEW_Z_INDEX"),
        ENV_IMAGE_MAX_WIDTH_PCT => option_env!("DRAG_PREVIEW_IMAGE_MAX_WIDTH_PCT"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Configuration for this build, or the defaults if the baked values are bad.
pub fn preview_config() -> PreviewConfig {
    resolve(build_env)
}

fn resolve<F>(lookup: F) -> PreviewConfig
where
    F: Fn(&str) -> Option<String>,
{
    match PreviewConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("drag preview config rejected, using defaults: {e}");
            PreviewConfig::default()
        }
    }
}
