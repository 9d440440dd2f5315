//! Gallery view: the fixed item list and the page model it renders to
//!
//! `render` is pure. The egui painter in `views.rs` draws whatever `Page`
//! it is handed, so everything observable about the layout can be checked
//! here without a window.

use crate::constants::*;
use crate::types::{ItemId, MediaItem};
use tracing::{debug, trace};

/// Root view over an immutable list of media items.
pub struct GalleryView {
    items: Vec<MediaItem>,
}

/// One render of the gallery, split into its three regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub top_bar: TopBar,
    pub grid: MediaGrid,
    pub side_nav: SideNav,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopBar {
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaGrid {
    pub cards: Vec<Card>,
}

/// What a card shows. The author is not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: ItemId,
    pub name: String,
    pub thumbnail_ref: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link(&'static str),
    Separator,
    Status(&'static str),
}

impl NavEntry {
    pub fn label(&self) -> Option<&'static str> {
        match *self {
            NavEntry::Link(label) | NavEntry::Status(label) => Some(label),
            NavEntry::Separator => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SideNav {
    pub entries: [NavEntry; 4],
}

impl Default for SideNav {
    fn default() -> Self {
        Self {
            entries: [
                NavEntry::Link(NAV_VISUALIZATIONS),
                NavEntry::Link(NAV_SETTINGS),
                NavEntry::Separator,
                NavEntry::Status(NAV_LOGGED_IN),
            ],
        }
    }
}

impl GalleryView {
    pub fn new(items: Vec<MediaItem>) -> Self {
        debug!(count = items.len(), "Gallery view initialized");
        for (idx, item) in items.iter().enumerate() {
            trace!(idx, name = item.name(), author = item.author(), "Media item");
        }
        Self { items }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn render(&self) -> Page {
        let cards = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| Card {
                id: ItemId(idx),
                name: item.name().to_string(),
                thumbnail_ref: item.thumbnail_ref().to_string(),
            })
            .collect();

        Page {
            top_bar: TopBar { title: HOME_TITLE },
            grid: MediaGrid { cards },
            side_nav: SideNav::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;

    fn card_names(page: &Page) -> Vec<&str> {
        page.grid.cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn one_card_per_item_in_input_order() {
        let items: Vec<MediaItem> = ["zeta", "alpha", "mid", "alpha"]
            .iter()
            .map(|n| MediaItem::new(*n, "someone", format!("/static/{}.png", n)))
            .collect();
        let page = GalleryView::new(items.clone()).render();

        assert_eq!(page.grid.cards.len(), items.len());
        assert_eq!(card_names(&page), ["zeta", "alpha", "mid", "alpha"]);
        for (card, item) in page.grid.cards.iter().zip(&items) {
            assert_eq!(card.thumbnail_ref, item.thumbnail_ref());
        }
    }

    #[test]
    fn duplicates_get_distinct_ids() {
        let page = GalleryView::new(Dataset::Home.items()).render();
        let ids: Vec<ItemId> = page.grid.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, (0..9).map(ItemId).collect::<Vec<_>>());
    }

    #[test]
    fn render_is_idempotent() {
        let view = GalleryView::new(Dataset::Home.items());
        assert_eq!(view.render(), view.render());
    }

    #[test]
    fn card_carries_literal_name_and_thumbnail() {
        let view = GalleryView::new(vec![MediaItem::new("One", "Person", "/static/placeholder.png")]);
        let page = view.render();
        let card = &page.grid.cards[0];
        assert_eq!(card.name, "One");
        assert_eq!(card.thumbnail_ref, "/static/placeholder.png");
    }

    #[test]
    fn side_nav_ignores_content() {
        let empty = GalleryView::new(Vec::new()).render();
        let one = GalleryView::new(vec![MediaItem::new("x", "y", "z")]).render();
        let home = GalleryView::new(Dataset::Home.items()).render();
        assert_eq!(empty.side_nav, one.side_nav);
        assert_eq!(one.side_nav, home.side_nav);

        let labels: Vec<&str> = home.side_nav.entries.iter().filter_map(NavEntry::label).collect();
        assert_eq!(labels, ["Visualizations", "Settings", "Logged in as Anonymous"]);
        assert_eq!(home.side_nav.entries[2], NavEntry::Separator);
    }

    #[test]
    fn empty_input_still_has_chrome() {
        let page = GalleryView::new(Vec::new()).render();
        assert!(page.grid.cards.is_empty());
        assert_eq!(page.top_bar.title, "Kibitz Home");
        assert_eq!(page.side_nav, SideNav::default());
    }

    #[test]
    fn missing_fields_render_empty() {
        let item: MediaItem = serde_json::from_str("{}").unwrap();
        let page = GalleryView::new(vec![item]).render();
        assert_eq!(page.grid.cards[0].name, "");
        assert_eq!(page.grid.cards[0].thumbnail_ref, "");
    }

    #[test]
    fn datasets_do_not_cross_contaminate() {
        let home = GalleryView::new(Dataset::Home.items());
        let vis = GalleryView::new(Dataset::Visualizations.items());
        let home_page = home.render();
        let vis_page = vis.render();

        assert_eq!(home_page.grid.cards.len(), 9);
        assert_eq!(
            card_names(&home_page)[..3],
            ["Me at the zoo", "Never gonna give you up", "One"]
        );
        assert_eq!(
            card_names(&vis_page),
            ["Regional sales word cloud", "Store simulation", "Live transactions map"]
        );
        assert!(card_names(&vis_page)
            .iter()
            .all(|n| !card_names(&home_page).contains(n)));

        // Rendering one view leaves the other untouched
        assert_eq!(home.render(), home_page);
        assert_eq!(home.items().len(), 9);
    }
}
