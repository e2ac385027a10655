//! Background task that owns the store and applies UI commands in order.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::api::ImageSource;

use super::state::GalleryState;
use super::store::GalleryStore;

pub const COMMAND_QUEUE_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryCommand {
    Fetch { page: u32 },
    NextPage,
    PreviousPage,
    Refresh,
    Select { id: Option<String> },
}

pub type GalleryCommandSender = mpsc::Sender<GalleryCommand>;

/// Handle to a running gallery worker.
///
/// Dropping every sender stops the worker once the queue drains.
pub struct GalleryHandle {
    sender: GalleryCommandSender,
    state: watch::Receiver<GalleryState>,
    task: JoinHandle<()>,
}

impl GalleryHandle {
    /// Move `store` onto a tokio task. Must be called inside a runtime.
    pub fn spawn<S>(store: GalleryStore<S>) -> Self
    where
        S: ImageSource + 'static,
    {
        let (sender, receiver) = mpsc::channel(COMMAND_QUEUE_SIZE);
        let state = store.subscribe();
        let task = tokio::spawn(run_worker(store, receiver));
        Self {
            sender,
            state,
            task,
        }
    }

    pub fn sender(&self) -> GalleryCommandSender {
        self.sender.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GalleryState> {
        self.state.clone()
    }

    /// Latest published state.
    pub fn state(&self) -> GalleryState {
        self.state.borrow().clone()
    }

    /// Close the command queue and wait for the worker to finish.
    pub async fn shutdown(self) {
        drop(self.sender);
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "Gallery worker ended abnormally");
        }
    }
}

async fn run_worker<S: ImageSource>(
    mut store: GalleryStore<S>,
    mut commands: mpsc::Receiver<GalleryCommand>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "Gallery command");
        match command {
            GalleryCommand::Fetch { page } => store.fetch_images(page).await,
            GalleryCommand::NextPage => store.next_page().await,
            GalleryCommand::PreviousPage => store.previous_page().await,
            GalleryCommand::Refresh => store.refresh().await,
            GalleryCommand::Select { id } => store.set_selected_image_id(id),
        }
    }
    tracing::debug!("Gallery worker stopped");
}
