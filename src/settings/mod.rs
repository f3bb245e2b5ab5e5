//! User preferences.
//!
//! Settings are replaced wholesale; switching the gallery host also resets
//! every list record since their pages belong to the previous host.

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{AutoLockPolicy, ListDisplayMode, Settings};
