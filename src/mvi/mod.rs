//! Model-View-Intent (MVI) primitives.
//!
//! The gallery store is built on these traits: every change to the
//! observable state goes through a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ watch channel ──→ View
//!    ↑                                                 │
//!    └──────────────── GalleryCommand ─────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot handed to views
//! - **Intent**: Fetch lifecycle events and user selections
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
