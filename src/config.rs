//! Preview configuration.
//!
//! Values come from environment-style keys. Missing keys fall back to the
//! defaults in [`crate::consts`]; present but malformed values are errors.
//! Browser builds have no process environment, so they pass their own lookup
//! (usually compile-time `option_env!` values) to
//! [`PreviewConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_IMAGE_MAX_WIDTH_PCT, DEFAULT_Z_INDEX, ENV_IMAGE_MAX_WIDTH_PCT, ENV_PUBLIC_URL, ENV_Z_INDEX,
};

/// Error returned while loading [`PreviewConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The value is not a number of the expected type.
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    /// The value parsed but lies outside the accepted range.
    #[error("{var} is out of range: {value}")]
    OutOfRange { var: &'static str, value: String },
}

/// Settings for the floating preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Root under which `images/<name>.png` is served. Empty means site root.
    pub public_url: String,
    /// Stacking order of the preview container.
    pub z_index: i32,
    /// Image `max-width`, in percent of the container (1..=100).
    pub image_max_width_pct: u8,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            public_url: String::new(),
            z_index: DEFAULT_Z_INDEX,
            image_max_width_pct: DEFAULT_IMAGE_MAX_WIDTH_PCT,
        }
    }
}

impl PreviewConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// See [`PreviewConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let Ok(value) = std::env::var(key) else {
                return None;
            };
            Some(value)
        })
    }

    /// Load from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a numeric key does not parse
    /// and [`ConfigError::OutOfRange`] when the image width is outside 1..=100.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let public_url = lookup(ENV_PUBLIC_URL).unwrap_or(defaults.public_url);
        let z_index = parse_var(&lookup, ENV_Z_INDEX, defaults.z_index)?;
        let image_max_width_pct = parse_var(&lookup, ENV_IMAGE_MAX_WIDTH_PCT, defaults.image_max_width_pct)?;
        let config = Self { public_url, z_index, image_max_width_pct };
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that the field types alone do not enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] for an image width outside 1..=100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.image_max_width_pct) {
            return Err(ConfigError::OutOfRange {
                var: ENV_IMAGE_MAX_WIDTH_PCT,
                value: self.image_max_width_pct.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw.clone() })
}
