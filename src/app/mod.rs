//! App module - contains the main application state and logic

pub mod gallery;
mod thumbnails;
mod views;

use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use gallery::{GalleryView, Page};
use std::path::PathBuf;
use thumbnails::ThumbnailCache;
use tracing::info;

pub use views::render_page;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) page: Page,
    pub(crate) thumbnails: ThumbnailCache,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, view: GalleryView, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let assets_dir = settings.assets_dir_or_default(&data_dir);
        info!(
            items = view.items().len(),
            assets = %assets_dir.display(),
            "Gallery ready"
        );

        Self {
            page: view.render(),
            thumbnails: ThumbnailCache::new(assets_dir),
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn card_base(&self) -> (f32, f32) {
        if self.settings.large_cards {
            theme::CARD_LARGE
        } else {
            theme::CARD_SMALL
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
