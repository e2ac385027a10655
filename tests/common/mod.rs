//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;
pub mod mock_source;

use picsum_gallery::api::Image;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_source::ScriptedSource;

/// Build an image the way the listing endpoint would return it.
pub fn sample_image(id: &str) -> Image {
    Image {
        id: id.to_string(),
        author: format!("Test Author {}", id),
        width: 1920,
        height: 1080,
        url: format!("https://example.com/{}", id),
        download_url: format!("https://example.com/download/{}", id),
    }
}

pub fn sample_images(ids: &[&str]) -> Vec<Image> {
    ids.iter().map(|id| sample_image(id)).collect()
}

/// JSON body for a listing response.
pub fn listing_json(images: &[Image]) -> String {
    serde_json::to_string(images).expect("Failed to serialize images")
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
