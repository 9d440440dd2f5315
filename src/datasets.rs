//! Built-in gallery datasets and JSON dataset files

use crate::constants::PLACEHOLDER_THUMBNAIL;
use crate::settings::Settings;
use crate::types::{DatasetFile, MediaItem};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Which built-in list the gallery shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    #[default]
    Home,
    Visualizations,
}

impl Dataset {
    /// Build a fresh copy of the dataset's literal list.
    pub fn items(self) -> Vec<MediaItem> {
        match self {
            Dataset::Home => {
                let mut items = vec![
                    MediaItem::new("Me at the zoo", "jawed", PLACEHOLDER_THUMBNAIL),
                    MediaItem::new("Never gonna give you up", "Rick Astley", PLACEHOLDER_THUMBNAIL),
                ];
                items.extend(
                    std::iter::repeat_with(|| MediaItem::new("One", "Person", PLACEHOLDER_THUMBNAIL))
                        .take(7),
                );
                items
            }
            Dataset::Visualizations => vec![
                MediaItem::new("Regional sales word cloud", "Kibitz", PLACEHOLDER_THUMBNAIL),
                MediaItem::new("Store simulation", "Kibitz", PLACEHOLDER_THUMBNAIL),
                MediaItem::new("Live transactions map", "Kibitz", PLACEHOLDER_THUMBNAIL),
            ],
        }
    }
}

/// Read a `{ "items": [...] }` JSON document.
pub fn load_items(path: &Path) -> std::io::Result<Vec<MediaItem>> {
    let json = std::fs::read_to_string(path)?;
    let file: DatasetFile = serde_json::from_str(&json)?;
    Ok(file.items)
}

/// Pick the list to display: the configured file if it loads, else the built-in dataset.
pub fn resolve_items(settings: &Settings, data_dir: &Path) -> Vec<MediaItem> {
    if let Some(path) = settings.dataset_path_in(data_dir) {
        match load_items(&path) {
            Ok(items) => {
                debug!(path = %path.display(), count = items.len(), "Dataset file loaded");
                return items;
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    dataset = ?settings.dataset,
                    "Failed to load dataset file, using built-in"
                );
            }
        }
    }
    settings.dataset.items()
}
