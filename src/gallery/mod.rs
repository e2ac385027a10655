//! The gallery store: current page, pagination cursor, loading/error
//! status and the selected image.
//!
//! State transitions go through [`GalleryReducer`]; [`GalleryStore`]
//! wraps the reducer with the one side effect it needs (fetching a page)
//! and publishes every new state on a watch channel.

mod intent;
mod reducer;
mod state;
mod store;
mod worker;

pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::{GalleryState, PaginationInfo};
pub use store::GalleryStore;
pub use worker::{GalleryCommand, GalleryCommandSender, GalleryHandle, COMMAND_QUEUE_SIZE};
