//! UI module - contains UI rendering components
//!
//! Small widgets and layout helpers shared by the views in `app`.

pub mod components;
