//! Inactivity lock.
//!
//! ```text
//! Active ──BecameInactive──→ Blurred ──BecameActive (elapsed ≤ policy)──→ Active
//!                               │
//!                               └─BecameActive (elapsed > policy)──→ Locked
//! Locked ──AuthorizeDone(true)──→ Active
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::AppLockIntent;
pub use reducer::AppLockReducer;
pub use state::{AppLockState, BLUR_EPSILON};
