//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents describe something that happened: a fetch started, a page
/// arrived, the user picked an image. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
