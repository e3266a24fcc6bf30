use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for the polygon editor.
///
/// Deserialization fills every missing field from [`EditorConfig::default`],
/// so a host can override only what it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Screen-space distance in pixels within which the cursor snaps to the first vertex.
    pub snap_tolerance: f32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub default_zoom: u8,
    /// Padding in pixels applied when flying to a ring's bounds.
    pub fly_padding: [f32; 2],
    /// Duration in seconds of the fly-to animation.
    pub fly_duration: f32,
    /// Width in pixels of the scale bar.
    pub scale_max_width: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_tolerance: 20.0,
            min_zoom: 5,
            max_zoom: 18,
            default_zoom: 13,
            fly_padding: [20.0, 20.0],
            fly_duration: 0.5,
            scale_max_width: 100.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }
}
