//! Base trait for observable state.

/// Marker trait for state snapshots.
///
/// States are cloned into the watch channel on every transition, so they
/// must be `Clone` and cheap enough to compare.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
