use reqwest::Url;
use serde::{Deserialize, Serialize};

const DEFAULT_ORIGIN: &str = "https://picsum.photos";

/// One entry of the photo listing.
///
/// `id` is only unique within the page it was fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    /// Page on the photo site for this image.
    pub url: String,
    /// Direct link to the full-size file.
    pub download_url: String,
}

impl Image {
    /// Resized variant served by the same host as `download_url`.
    pub fn thumbnail_url(&self, width: u32, height: u32) -> String {
        let origin = origin_of(&self.download_url);
        let origin = origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
        format!("{}/id/{}/{}/{}", origin, self.id, width, height)
    }

    /// Width divided by height, or 0 for a degenerate image.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        f64::from(self.width) / f64::from(self.height)
    }
}

/// `scheme://host[:port]` of an absolute URL; `None` for opaque origins.
fn origin_of(url: &str) -> Option<String> {
    let origin = Url::parse(url).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
