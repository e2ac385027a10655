//! Scripted image source for store tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use picsum_gallery::api::{FetchError, Image, ImageSource};
use picsum_gallery::gallery::GalleryState;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::watch;

/// What the next `fetch_page` call should produce.
pub enum Scripted {
    Images(Vec<Image>),
    Status(u16),
    Message(String),
}

/// Image source that replays scripted responses and records requests.
///
/// Clones share the same script and log, so a test can keep one clone
/// while the store owns the other.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<(u32, u32)>>>,
    watcher: Arc<Mutex<Option<watch::Receiver<GalleryState>>>>,
    in_flight: Arc<Mutex<Vec<GalleryState>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_images(&self, images: Vec<Image>) -> &Self {
        self.responses.lock().push_back(Scripted::Images(images));
        self
    }

    pub fn push_status(&self, status: u16) -> &Self {
        self.responses.lock().push_back(Scripted::Status(status));
        self
    }

    pub fn push_message(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .push_back(Scripted::Message(message.to_string()));
        self
    }

    /// `(page, limit)` for every call so far.
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.lock().clone()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().iter().map(|(page, _)| *page).collect()
    }

    /// Record the published store state at the moment each request is made.
    pub fn watch_store(&self, updates: watch::Receiver<GalleryState>) {
        *self.watcher.lock() = Some(updates);
    }

    /// States seen while requests were in flight, one per call.
    pub fn states_in_flight(&self) -> Vec<GalleryState> {
        self.in_flight.lock().clone()
    }
}

#[async_trait]
impl ImageSource for ScriptedSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<Image>, FetchError> {
        self.requests.lock().push((page, limit));
        if let Some(updates) = self.watcher.lock().as_ref() {
            let state = updates.borrow().clone();
            self.in_flight.lock().push(state);
        }
        let next = self.responses.lock().pop_front();
        match next {
            Some(Scripted::Images(images)) => Ok(images),
            Some(Scripted::Status(status)) => Err(FetchError::Status { status }),
            Some(Scripted::Message(message)) => Err(FetchError::Other(message)),
            None => Ok(Vec::new()),
        }
    }
}
