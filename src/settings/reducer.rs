use crate::app::AppState;
use crate::command::AppCommand;
use crate::mvi::Reducer;

use super::intent::SettingsIntent;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = AppState;
    type Intent = SettingsIntent;
    type Effect = AppCommand;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<AppCommand>) {
        match intent {
            SettingsIntent::UpdateSetting(settings) => {
                if settings.gallery_host != state.settings.gallery_host {
                    tracing::info!(
                        old_host = state.settings.gallery_host.domain(),
                        new_host = settings.gallery_host.domain(),
                        "Gallery host switched, resetting lists"
                    );
                    state.lists.reset();
                }
                state.settings = settings;
                (state, None)
            }
        }
    }
}
