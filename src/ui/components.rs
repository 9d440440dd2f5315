//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::app::gallery::NavEntry;
use crate::constants::NAV_VISUALIZATIONS;
use crate::theme;
use eframe::egui;

/// Number of card columns that fit in `available` width. Never less than one.
pub fn grid_columns(available: f32, base_w: f32, spacing: f32) -> usize {
    ((available + spacing) / (base_w + spacing)).floor().max(1.0) as usize
}

/// Card size stretched to fill `available` across `columns`, keeping the base aspect.
pub fn card_size(available: f32, columns: usize, (base_w, base_h): (f32, f32), spacing: f32) -> egui::Vec2 {
    let cols = columns.max(1) as f32;
    let card_w = ((available - spacing * (cols - 1.0)) / cols).floor().max(1.0);
    let card_h = (base_h * (card_w / base_w)).floor();
    egui::vec2(card_w, card_h)
}

/// Side navigation entry. Labels are static and not clickable.
pub fn nav_entry(ui: &mut egui::Ui, entry: NavEntry) {
    let (icon, size, color) = match entry {
        NavEntry::Separator => {
            ui.separator();
            return;
        }
        NavEntry::Link(NAV_VISUALIZATIONS) => {
            (egui_phosphor::regular::CHART_BAR, theme::FONT_BODY, theme::TEXT_SECONDARY)
        }
        NavEntry::Link(_) => (egui_phosphor::regular::GEAR, theme::FONT_BODY, theme::TEXT_SECONDARY),
        NavEntry::Status(_) => (egui_phosphor::regular::USER, theme::FONT_SMALL, theme::TEXT_DIM),
    };
    let label = entry.label().unwrap_or_default();

    ui.add(
        egui::Label::new(
            egui::RichText::new(format!("{}  {}", icon, label))
                .size(size)
                .color(color),
        )
        .selectable(false),
    );
}
