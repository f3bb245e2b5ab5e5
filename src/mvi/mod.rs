//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for the unidirectional
//! state-and-effect engine.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Observers
//!    ↑          │
//!    │          └──→ Effect (command) ──→ collaborator
//!    └───────────────────────────────────────┘
//! ```
//!
//! - **State**: Snapshot of everything the view layer renders
//! - **Intent**: User actions, lifecycle events, operation completions
//! - **Reducer**: Pure function that transforms state and may emit one effect

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
