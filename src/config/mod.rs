//! Configuration loading for the gallery.
//!
//! Settings live in a TOML file under the platform config directory.
//! A missing file is not an error: defaults point at the public
//! Lorem Picsum API with 20 images per page.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, PaginationConfig};
