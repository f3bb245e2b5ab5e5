//! Root of the state tree: the action set, the state and the reducer that
//! routes each action to its feature.

mod action;
mod reducer;
mod state;

pub use action::AppAction;
pub use reducer::AppReducer;
pub use state::AppState;
