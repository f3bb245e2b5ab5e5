//! Pagination with auto-continuation, shared by every list domain.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - One `ListRecord` per domain, or per (domain, index)
//! - `intent.rs` - Fetch / FetchMore, continuations and completions
//! - `reducer.rs` - Guards, page bookkeeping and continuation scheduling
//!
//! ```text
//! Idle ──Fetch──→ Loading ──Done──→ Loaded ──FetchMore──→ LoadingMore
//!                    │                                        │
//!                    ├─ empty, more pages ─→ (200ms) Continue  ←┤
//!                    ├─ empty, last page ──→ NotFound          │
//!                    └─ hard failure ──────→ Failed      MoreFailed
//! ```
//!
//! Every request gets a [`RequestId`]. Completions and continuations that
//! refer to anything but the record's latest request are dropped, so a
//! reset (logout, host switch) or a newer search cannot be answered by an
//! older request.

mod intent;
mod reducer;
mod state;

use std::time::Duration;

pub use intent::ListIntent;
pub use reducer::ListsReducer;
pub use state::{ListDomain, ListRecord, ListStatus, ListsState, RequestId};

/// Pause before re-requesting after a page came back empty.
pub const AUTO_CONTINUATION_DELAY: Duration = Duration::from_millis(200);
