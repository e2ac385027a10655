//! Seam between the gallery store and the listing transport.

use async_trait::async_trait;

use super::error::FetchError;
use super::types::Image;

/// Anything that can return one page of the photo listing.
///
/// The store only ever talks to this trait, so tests can script
/// responses without a network.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch page `page` (1-based) holding at most `limit` images.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<Image>, FetchError>;
}
