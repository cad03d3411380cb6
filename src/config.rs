//! Startup configuration.
//!
//! Settings come from a JSON file. The path is taken from the
//! `ARTISTIC_CANVAS_CONFIG` environment variable, falling back to
//! `artistic_canvas.json` in the working directory. A missing file means
//! defaults; a broken one is logged and also means defaults.
//!
//! ```json
//! {
//!   "layout": "compact",
//!   "font_path": "arial.ttf",
//!   "export_path": "artwork.png",
//!   "window_title": "Artistic Canvas"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutVariant;

pub const CONFIG_ENV_VAR: &str = "ARTISTIC_CANVAS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "artistic_canvas.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to defaults
pub struct CanvasConfig {
    /// Which window layout and shortcut set to use
    pub layout: LayoutVariant,
    /// Font used for button labels
    pub font_path: PathBuf,
    /// Where the export command writes the canvas image
    pub export_path: PathBuf,
    pub window_title: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            layout: LayoutVariant::Full,
            font_path: PathBuf::from("arial.ttf"),
            export_path: PathBuf::from("artwork.png"),
            window_title: "Artistic Canvas".to_owned(),
        }
    }
}

impl CanvasConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve the config path from the environment and load it, using
    /// defaults whenever that fails.
    pub fn discover() -> Self {
        let (path, explicit) = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CanvasConfig::from_json(r#"{ "layout": "compact" }"#).unwrap();
        assert_eq!(config.layout, LayoutVariant::Compact);
        assert_eq!(config.font_path, PathBuf::from("arial.ttf"));
        assert_eq!(config.export_path, PathBuf::from("artwork.png"));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        assert!(CanvasConfig::from_json(r#"{ "layout": "huge" }"#).is_err());
    }

    #[test]
    fn load_reports_the_path() {
        let err = CanvasConfig::load("no/such/config.json").unwrap_err();
        assert!(err.to_string().contains("no/such/config.json"));
    }
}
