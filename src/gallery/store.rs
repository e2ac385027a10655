use tokio::sync::watch;

use crate::api::{Image, ImageSource};
use crate::config::PaginationConfig;
use crate::mvi::Reducer;

use super::intent::GalleryIntent;
use super::reducer::GalleryReducer;
use super::state::{GalleryState, PaginationInfo};

/// Owns the gallery state and the source pages are fetched from.
///
/// One store exists per running application. Every transition is
/// published on a watch channel; views read snapshots from
/// [`GalleryStore::subscribe`] and never mutate the store directly.
pub struct GalleryStore<S> {
    source: S,
    pagination: PaginationConfig,
    state: GalleryState,
    publisher: watch::Sender<GalleryState>,
}

impl<S: ImageSource> GalleryStore<S> {
    pub fn new(source: S, pagination: PaginationConfig) -> Self {
        Self::with_state(source, pagination, GalleryState::default())
    }

    /// Create a store starting from an existing state, e.g. a restored page.
    pub fn with_state(source: S, pagination: PaginationConfig, state: GalleryState) -> Self {
        let (publisher, _) = watch::channel(state.clone());
        Self {
            source,
            pagination,
            state,
            publisher,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<GalleryState> {
        self.publisher.subscribe()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        PaginationInfo::new(self.pagination, self.state.current_page)
    }

    fn dispatch(&mut self, intent: GalleryIntent) {
        self.state = GalleryReducer::reduce(std::mem::take(&mut self.state), intent);
        self.publisher.send_replace(self.state.clone());
    }

    /// Fetch `page` and make it the current page.
    ///
    /// Failures end up in `state().error`; this never returns an error.
    /// The loading flag is lowered on every path.
    pub async fn fetch_images(&mut self, page: u32) {
        self.dispatch(GalleryIntent::FetchStarted);

        match self.source.fetch_page(page, self.pagination.per_page).await {
            Ok(images) => {
                tracing::info!(page, count = images.len(), "Fetched image page");
                self.dispatch(GalleryIntent::FetchSucceeded { page, images });
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(page, error = %err, "Error fetching images");
                self.dispatch(GalleryIntent::FetchFailed { message });
            }
        }
    }

    /// Step forward one page. No-op on the last page.
    pub async fn next_page(&mut self) {
        if self.state.current_page < self.total_pages() {
            self.fetch_images(self.state.current_page + 1).await;
        }
    }

    /// Step back one page. No-op on the first page.
    pub async fn previous_page(&mut self) {
        if self.state.current_page > 1 {
            self.fetch_images(self.state.current_page - 1).await;
        }
    }

    /// Fetch the current page again.
    pub async fn refresh(&mut self) {
        self.fetch_images(self.state.current_page).await;
    }

    pub fn image_by_id(&self, id: &str) -> Option<&Image> {
        self.state.image_by_id(id)
    }

    pub fn selected_image(&self) -> Option<&Image> {
        self.state.selected_image()
    }

    pub fn set_selected_image_id(&mut self, id: Option<String>) {
        self.dispatch(GalleryIntent::SelectImage { id });
    }
}
