use crate::api::Image;
use crate::config::PaginationConfig;
use crate::mvi::UiState;

/// Observable gallery state.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    /// Images of the current page, replaced on every successful fetch.
    pub images: Vec<Image>,
    /// 1-based page the images belong to.
    pub current_page: u32,
    pub selected_image_id: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            current_page: 1,
            selected_image_id: None,
            is_loading: false,
            error: None,
        }
    }
}

impl UiState for GalleryState {}

impl GalleryState {
    /// Linear search of the loaded page. Other pages are never consulted.
    pub fn image_by_id(&self, id: &str) -> Option<&Image> {
        self.images.iter().find(|image| image.id == id)
    }

    /// The selected image, if it is on the loaded page.
    pub fn selected_image(&self) -> Option<&Image> {
        self.selected_image_id
            .as_deref()
            .and_then(|id| self.image_by_id(id))
    }
}

/// Snapshot of where the gallery is in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub total_images: u32,
    pub total_pages: u32,
}

impl PaginationInfo {
    pub fn new(config: PaginationConfig, current_page: u32) -> Self {
        Self {
            current_page,
            per_page: config.per_page,
            total_images: config.total_images,
            total_pages: config.total_pages(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}
