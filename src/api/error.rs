//! Fetch failures and the messages shown for them.

use thiserror::Error;

/// Message shown for any non-success HTTP status.
pub const STATUS_ERROR_MESSAGE: &str = "Failed to fetch images";

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Errors that can occur while fetching a page of images.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with a non-2xx status. The body is ignored.
    #[error("Failed to fetch images")]
    Status { status: u16 },

    /// Connection, timeout or body read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body was not a JSON array of images.
    #[error("Invalid listing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure from an [`ImageSource`](super::ImageSource) that is not HTTP
    /// based. [`PicsumClient`](super::PicsumClient) never returns it; other
    /// sources use it to surface their own message, which may be empty.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Text stored on the gallery state for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
