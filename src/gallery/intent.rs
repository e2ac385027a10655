use crate::api::Image;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// A fetch began: raise the loading flag, drop the previous error.
    FetchStarted,
    /// A page arrived and replaces the current one.
    FetchSucceeded { page: u32, images: Vec<Image> },
    /// The fetch failed; images and page stay as they were.
    FetchFailed { message: String },
    SelectImage { id: Option<String> },
}

impl Intent for GalleryIntent {}
