//! Photo listing API: image model, source trait and the HTTP client.

mod client;
mod error;
mod source;
mod types;

pub use client::PicsumClient;
pub use error::{FetchError, FALLBACK_ERROR_MESSAGE, STATUS_ERROR_MESSAGE};
pub use source::ImageSource;
pub use types::Image;
