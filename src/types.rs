//! Common types and data structures

use serde::Deserialize;

/// Stable key for a card: the item's position in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// A displayable media entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    name: String,
    author: String,
    #[serde(alias = "thumbnail")]
    thumbnail_ref: String,
}

impl MediaItem {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        thumbnail_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            thumbnail_ref: thumbnail_ref.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn thumbnail_ref(&self) -> &str {
        &self.thumbnail_ref
    }
}

/// Dataset file structure read from JSON
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DatasetFile {
    pub items: Vec<MediaItem>,
}
