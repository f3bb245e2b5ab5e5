//! Per-gallery cache of detail pages, preview/thumbnail/content URLs and
//! multi-page-viewer keys.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `DetailCache` holding one `DetailRecord` per gallery
//! - `intent.rs` - Fetches, their completions and gallery mutations
//! - `reducer.rs` - Loading guards, append-only merges, MPV switch
//!
//! URL maps only ever grow: a completion inserts the indices it carries that
//! are not cached yet. `RefetchContents` is the one way to replace an entry.

mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailCache, DetailRecord, MpvKeys, UrlPages};
