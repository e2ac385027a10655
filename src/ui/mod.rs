//! Terminal shell around the gallery store.

pub mod app;
pub mod detail_view;
pub mod events;
pub mod footer;
pub mod gallery_view;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
