//! User settings stored as settings.json in the app data directory

use crate::constants::SETTINGS_FILE;
use crate::datasets::Dataset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Content
    pub dataset: Dataset,
    pub dataset_path: Option<String>,

    // Paths
    pub assets_dir: Option<String>,

    // View
    pub large_cards: bool,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Dataset file location. Relative paths are taken from `data_dir`.
    pub fn dataset_path_in(&self, data_dir: &Path) -> Option<PathBuf> {
        self.dataset_path.as_ref().map(|p| data_dir.join(p))
    }

    pub fn assets_dir_or_default(&self, data_dir: &Path) -> PathBuf {
        self.assets_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("assets"))
    }
}
