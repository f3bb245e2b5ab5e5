use std::mem;

use crate::app_lock::AppLockReducer;
use crate::command::AppCommand;
use crate::detail::DetailReducer;
use crate::lists::ListsReducer;
use crate::mvi::Reducer;
use crate::route::RouteReducer;
use crate::session::SessionReducer;
use crate::settings::SettingsReducer;

use super::action::AppAction;
use super::state::AppState;

/// Runs a feature reducer on one slice of [`AppState`] in place and yields
/// its command.
macro_rules! dispatch_mvi {
    ($state:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (slice, command) = <$reducer>::reduce(mem::take(&mut $state.$field), $intent);
        $state.$field = slice;
        command
    }};
}

/// Root transition function.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppAction;
    type Effect = AppCommand;

    fn reduce(mut state: Self::State, action: Self::Intent) -> (Self::State, Option<AppCommand>) {
        match action {
            AppAction::List(intent) => ListsReducer::reduce(state, intent),
            AppAction::Session(intent) => SessionReducer::reduce(state, intent),
            AppAction::Settings(intent) => SettingsReducer::reduce(state, intent),
            AppAction::Route(intent) => RouteReducer::reduce(state, intent),
            AppAction::Detail(intent) => {
                let command = dispatch_mvi!(state, detail, DetailReducer, intent);
                (state, command)
            }
            AppAction::AppLock(intent) => {
                let command = dispatch_mvi!(state, app_lock, AppLockReducer, intent);
                (state, command)
            }
        }
    }
}
