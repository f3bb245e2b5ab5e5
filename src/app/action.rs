use crate::app_lock::AppLockIntent;
use crate::detail::DetailIntent;
use crate::lists::ListIntent;
use crate::mvi::Intent;
use crate::route::RouteIntent;
use crate::session::SessionIntent;
use crate::settings::SettingsIntent;

/// Every way the state tree can change.
#[derive(Debug, Clone)]
pub enum AppAction {
    List(ListIntent),
    Detail(DetailIntent),
    Session(SessionIntent),
    Settings(SettingsIntent),
    AppLock(AppLockIntent),
    Route(RouteIntent),
}

impl Intent for AppAction {}

impl AppAction {
    /// Feature name for logs.
    pub fn feature(&self) -> &'static str {
        match self {
            AppAction::List(_) => "list",
            AppAction::Detail(_) => "detail",
            AppAction::Session(_) => "session",
            AppAction::Settings(_) => "settings",
            AppAction::AppLock(_) => "app_lock",
            AppAction::Route(_) => "route",
        }
    }
}

impl From<ListIntent> for AppAction {
    fn from(intent: ListIntent) -> Self {
        AppAction::List(intent)
    }
}

impl From<DetailIntent> for AppAction {
    fn from(intent: DetailIntent) -> Self {
        AppAction::Detail(intent)
    }
}

impl From<SessionIntent> for AppAction {
    fn from(intent: SessionIntent) -> Self {
        AppAction::Session(intent)
    }
}

impl From<SettingsIntent> for AppAction {
    fn from(intent: SettingsIntent) -> Self {
        AppAction::Settings(intent)
    }
}

impl From<AppLockIntent> for AppAction {
    fn from(intent: AppLockIntent) -> Self {
        AppAction::AppLock(intent)
    }
}

impl From<RouteIntent> for AppAction {
    fn from(intent: RouteIntent) -> Self {
        AppAction::Route(intent)
    }
}
