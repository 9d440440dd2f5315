//! Thumbnail loading

use eframe::egui;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Map a card's thumbnail reference onto a file under the assets directory.
///
/// `/static/x.png` and `static/x.png` both resolve to `<assets>/static/x.png`.
/// URLs and anything that would escape the assets directory yield `None`.
pub fn resolve_thumbnail_path(assets_dir: &Path, thumbnail_ref: &str) -> Option<PathBuf> {
    if thumbnail_ref.is_empty() || has_url_scheme(thumbnail_ref) {
        return None;
    }

    let relative = Path::new(thumbnail_ref.trim_start_matches('/'));
    let inside = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !inside || relative.as_os_str().is_empty() {
        return None;
    }

    Some(assets_dir.join(relative))
}

fn has_url_scheme(s: &str) -> bool {
    match s.split_once(':') {
        // Single letters are drive prefixes, not schemes
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Decoded thumbnails keyed by reference. Failures are cached too.
pub struct ThumbnailCache {
    assets_dir: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ThumbnailCache {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            assets_dir,
            textures: HashMap::new(),
        }
    }

    pub fn get(&mut self, ctx: &egui::Context, thumbnail_ref: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(thumbnail_ref) {
            return cached.clone();
        }

        let texture = resolve_thumbnail_path(&self.assets_dir, thumbnail_ref).and_then(|path| {
            match image::open(&path) {
                Ok(img) => {
                    let rgba = img.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let pixels = rgba.into_raw();
                    Some(ctx.load_texture(
                        thumbnail_ref,
                        egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    debug!(error = %e, path = %path.display(), "Thumbnail unavailable");
                    None
                }
            }
        });

        if texture.is_none() {
            debug!(thumbnail_ref, "Using placeholder for thumbnail");
        }
        self.textures
            .insert(thumbnail_ref.to_string(), texture.clone());
        texture
    }

    pub fn cached_count(&self) -> usize {
        self.textures.len()
    }
}
