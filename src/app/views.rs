//! View rendering (top bar, side navigation, card grid)

use super::gallery::{Card, MediaGrid, Page, SideNav, TopBar};
use super::thumbnails::ThumbnailCache;
use crate::theme;
use crate::ui::components::{card_size, grid_columns, nav_entry};
use eframe::egui;

/// Where the grid landed in one frame.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Content rect of the central panel
    pub panel: egui::Rect,
    /// One rect per card, in input order
    pub cards: Vec<egui::Rect>,
}

/// Draw a whole page and report where the cards were placed.
pub fn render_page(
    ctx: &egui::Context,
    page: &Page,
    thumbnails: &mut ThumbnailCache,
    card_base: (f32, f32),
) -> GridLayout {
    // Top bar first so it spans the full width, side panel before CentralPanel
    render_top_bar(ctx, &page.top_bar);
    render_side_nav(ctx, &page.side_nav);

    egui::CentralPanel::default()
        .frame(theme::content_frame())
        .show(ctx, |ui| GridLayout {
            panel: ui.max_rect(),
            cards: render_grid(ui, &page.grid, thumbnails, card_base),
        })
        .inner
}

fn render_top_bar(ctx: &egui::Context, top_bar: &TopBar) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(theme::TOP_BAR_HEIGHT)
        .show_separator_line(false)
        .frame(theme::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(top_bar.title)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
            });
        });
}

fn render_side_nav(ctx: &egui::Context, side_nav: &SideNav) {
    egui::SidePanel::left("side_nav")
        .exact_width(theme::SIDEBAR_WIDTH)
        .resizable(false)
        .show_separator_line(false)
        .frame(theme::sidebar_frame())
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = theme::SPACING_LG;
            for entry in side_nav.entries {
                nav_entry(ui, entry);
            }
        });
}

fn render_grid(
    ui: &mut egui::Ui,
    grid: &MediaGrid,
    thumbnails: &mut ThumbnailCache,
    card_base: (f32, f32),
) -> Vec<egui::Rect> {
    if grid.cards.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                egui::RichText::new("Nothing to show")
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
        return Vec::new();
    }

    let spacing = theme::SPACING_MD;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .id_salt("gallery_grid")
        .show(ui, |ui| {
            // Measured inside the scroll area so a reserved scrollbar is accounted for
            let available = ui.available_width();
            let columns = grid_columns(available, card_base.0, spacing);
            let size = card_size(available, columns, card_base, spacing);

            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
            let mut rects = Vec::with_capacity(grid.cards.len());
            for row in grid.cards.chunks(columns) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = spacing;
                    for card in row {
                        let rect = ui.push_id(card.id, |ui| render_card(ui, card, size, thumbnails)).inner;
                        rects.push(rect);
                    }
                });
            }
            rects
        })
        .inner
}

fn render_card(
    ui: &mut egui::Ui,
    card: &Card,
    size: egui::Vec2,
    thumbnails: &mut ThumbnailCache,
) -> egui::Rect {
    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return rect;
    }

    let painter = ui.painter_at(rect);
    let thumb_rect = egui::Rect::from_min_max(
        rect.min,
        egui::pos2(rect.max.x, rect.max.y - theme::CARD_LABEL_HEIGHT),
    );
    let radius = egui::CornerRadius {
        nw: theme::RADIUS_LARGE as u8,
        ne: theme::RADIUS_LARGE as u8,
        sw: 0,
        se: 0,
    };

    painter.rect_filled(rect, theme::RADIUS_LARGE, theme::BG_ELEVATED);

    if let Some(tex) = thumbnails.get(ui.ctx(), &card.thumbnail_ref) {
        // Textured rect so the image is clipped to the rounded top corners
        let brush = egui::epaint::Brush {
            fill_texture_id: tex.id(),
            uv: egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        };
        let mut shape = egui::epaint::RectShape::filled(thumb_rect, radius, egui::Color32::WHITE);
        shape.brush = Some(std::sync::Arc::new(brush));
        painter.add(shape);
    } else {
        // Broken or missing image
        painter.rect_filled(thumb_rect, radius, theme::BG_SURFACE);
        painter.text(
            thumb_rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::IMAGE,
            egui::FontId::proportional(thumb_rect.height().min(48.0) * 0.6),
            theme::TEXT_DIM,
        );
    }

    painter.text(
        egui::pos2(rect.left() + theme::SPACING_MD, thumb_rect.bottom() + theme::CARD_LABEL_HEIGHT / 2.0),
        egui::Align2::LEFT_CENTER,
        &card.name,
        egui::FontId::proportional(theme::FONT_LABEL),
        theme::TEXT_PRIMARY,
    );

    painter.rect_stroke(
        rect,
        theme::RADIUS_LARGE,
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
        egui::StrokeKind::Inside,
    );

    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gallery::GalleryView;
    use crate::datasets::Dataset;
    use crate::types::MediaItem;

    fn screen() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 800.0),
            )),
            ..Default::default()
        }
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => out.push(text.galley.text().to_string()),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Run headless frames and return the last layout and its painted strings.
    fn frame(page: &Page) -> (GridLayout, Vec<String>) {
        let ctx = egui::Context::default();
        theme::apply_visuals(&ctx);
        let mut thumbnails = ThumbnailCache::new(std::env::temp_dir().join("kibitz-gallery-none"));
        let mut layout = GridLayout {
            panel: egui::Rect::NOTHING,
            cards: Vec::new(),
        };
        let mut output = egui::FullOutput::default();
        // The first frame sizes the panels; later frames are stable
        for _ in 0..3 {
            output = ctx.run(screen(), |ctx| {
                layout = render_page(ctx, page, &mut thumbnails, theme::CARD_SMALL);
            });
        }
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut texts);
        }
        (layout, texts)
    }

    #[test]
    fn lays_out_one_card_per_item() {
        let page = GalleryView::new(Dataset::Home.items()).render();
        let (layout, texts) = frame(&page);
        assert_eq!(layout.cards.len(), 9);
        assert_eq!(texts.iter().filter(|t| t.as_str() == "One").count(), 7);
        assert!(texts.iter().any(|t| t == "Me at the zoo"));
        assert!(texts.iter().any(|t| t == "Never gonna give you up"));
        assert!(!texts.iter().any(|t| t == "jawed"));
    }

    #[test]
    fn cards_stay_inside_the_panel() {
        let page = GalleryView::new(Dataset::Home.items()).render();
        let (layout, _) = frame(&page);
        for (idx, rect) in layout.cards.iter().enumerate() {
            assert!(
                rect.min.x >= layout.panel.min.x - 0.5 && rect.max.x <= layout.panel.max.x + 0.5,
                "card {} at {:?} overflows panel {:?}",
                idx,
                rect,
                layout.panel
            );
        }
    }

    #[test]
    fn cards_wrap_into_rows_in_input_order() {
        let page = GalleryView::new(Dataset::Home.items()).render();
        let (layout, _) = frame(&page);
        let columns = grid_columns(layout.panel.width(), theme::CARD_SMALL.0, theme::SPACING_MD);
        assert!(columns < 9, "1280px should not fit all nine cards in one row");

        let mut rows = 1;
        for pair in layout.cards.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.min.y > prev.min.y {
                // New row starts back at the left edge
                assert!(next.min.y >= prev.max.y);
                assert!(next.min.x < prev.min.x);
                rows += 1;
            } else {
                assert_eq!(next.min.y, prev.min.y);
                assert!(next.min.x >= prev.max.x);
            }
        }
        assert!(rows >= 2);
        assert!(layout.cards.iter().all(|r| r.max.y <= 800.0));
    }

    #[test]
    fn chrome_is_painted_without_cards() {
        let page = GalleryView::new(Vec::new()).render();
        let (layout, texts) = frame(&page);
        assert!(layout.cards.is_empty());
        assert!(texts.iter().any(|t| t == "Kibitz Home"));
        assert!(texts.iter().any(|t| t.contains("Visualizations")));
        assert!(texts.iter().any(|t| t.contains("Settings")));
        assert!(texts.iter().any(|t| t.contains("Logged in as Anonymous")));
    }

    #[test]
    fn card_name_is_painted_with_missing_thumbnail() {
        let page = GalleryView::new(vec![MediaItem::new("Solo", "", "/static/missing.png")]).render();
        let (layout, texts) = frame(&page);
        assert_eq!(layout.cards.len(), 1);
        assert!(texts.iter().any(|t| t == "Solo"));
    }
}
