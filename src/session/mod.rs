//! Signed-in session: identity, user info, daily greeting and the names of
//! the favorites categories.

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::SessionState;
