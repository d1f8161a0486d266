use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CanvasResult;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCH_CANVAS_CONFIG";

/// Engine tuning knobs.
///
/// Unknown fields are rejected, missing ones fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// A pixel whose red, green and blue channels are all below this value
    /// counts as ink for flood fill.
    pub boundary_threshold: u8,
    /// Eraser line width as a multiple of the brush size.
    pub eraser_scale: f32,
    /// Maximum number of history entries, blank base included. `None` keeps
    /// everything.
    pub history_limit: Option<usize>,
    /// Filename handed to the host together with the exported PNG.
    pub export_filename: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            boundary_threshold: 64,
            eraser_scale: 5.0,
            history_limit: None,
            export_filename: "sketch.png".to_owned(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Load the config named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring canvas config {}: {}",
                    Path::new(&path).display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Clamp values that would break the engine.
    pub fn sanitized(mut self) -> Self {
        if !self.eraser_scale.is_finite() || self.eraser_scale <= 0.0 {
            log::warn!("Invalid eraser scale {}, using default", self.eraser_scale);
            self.eraser_scale = Self::default().eraser_scale;
        }
        // The blank base entry must always fit.
        if let Some(limit) = self.history_limit {
            self.history_limit = Some(limit.max(2));
        }
        if self.export_filename.trim().is_empty() {
            self.export_filename = Self::default().export_filename;
        }
        self
    }
}
