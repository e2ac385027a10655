//! Terminal browser for the Lorem Picsum photo catalog.
//!
//! The heart of the crate is [`gallery::GalleryStore`], which pages
//! through the listing API one page at a time. The [`ui`] module is a
//! thin ratatui shell that renders store snapshots and sends commands.

pub mod api;
pub mod config;
pub mod gallery;
pub mod logging;
pub mod mvi;
pub mod ui;
