//! Application constants and configuration

pub const APP_NAME: &str = "Kibitz Gallery";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label shown in the top navigation bar
pub const HOME_TITLE: &str = "Kibitz Home";

pub const NAV_VISUALIZATIONS: &str = "Visualizations";
pub const NAV_SETTINGS: &str = "Settings";
pub const NAV_LOGGED_IN: &str = "Logged in as Anonymous";

pub const PLACEHOLDER_THUMBNAIL: &str = "/static/placeholder.png";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "kibitz-gallery.log";
