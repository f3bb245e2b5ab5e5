//! Navigation state and the deep-link resolver.
//!
//! ```text
//! HandleUrl ──normalize/parse──→ (detail open? tear down, retry after settle)
//!     │
//!     └──→ Hud ──ResolveGallery──→ ResolveDone(Ok) ──→ Detail(gid)
//!                                  ResolveDone(Err) ─→ None
//! ```

mod intent;
pub mod link;
mod reducer;
mod state;

use std::time::Duration;

pub use intent::RouteIntent;
pub use link::{GalleryLink, LinkIntent};
pub use reducer::RouteReducer;
pub use state::{DetailViewState, Route, RouteState};

/// Pause between tearing down an open detail and resolving the next link.
pub const ROUTE_SETTLE_DELAY: Duration = Duration::from_millis(600);
