use crate::app_lock::AppLockState;
use crate::detail::DetailCache;
use crate::lists::ListsState;
use crate::mvi::UiState;
use crate::route::RouteState;
use crate::session::SessionState;
use crate::settings::Settings;

/// The whole state tree. Owned by the store; observers get `&AppState`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub session: SessionState,
    pub settings: Settings,
    pub lists: ListsState,
    pub detail: DetailCache,
    pub app_lock: AppLockState,
    pub route: RouteState,
}

impl UiState for AppState {}

impl AppState {
    /// Initial state for a configured app.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }
}
