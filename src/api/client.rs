use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;

use super::error::FetchError;
use super::source::ImageSource;
use super::types::Image;

/// HTTP client for the Lorem Picsum listing endpoint.
pub struct PicsumClient {
    client: Client,
    base_url: String,
}

impl PicsumClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full listing URL for one page.
    pub fn list_url(&self, page: u32, limit: u32) -> String {
        format!("{}/v2/list?page={}&limit={}", self.base_url, page, limit)
    }
}

#[async_trait]
impl ImageSource for PicsumClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<Image>, FetchError> {
        let url = self.list_url(page, limit);
        tracing::debug!(%url, "Requesting image page");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let images: Vec<Image> = serde_json::from_slice(&body)?;
        Ok(images)
    }
}
