//! Model-View-Intent primitives shared by every page.
//!
//! ```text
//! key press / fetch settled ──→ Intent ──→ Reducer ──→ State ──→ view::render
//! ```
//!
//! Reducers are pure. Network calls happen in the app shell, and their
//! results come back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
