use crate::app::AppState;
use crate::command::AppCommand;
use crate::detail::DetailCache;
use crate::error::ErrorKind;
use crate::model::Greeting;
use crate::mvi::Reducer;
use crate::route::{Route, RouteState};

use super::intent::SessionIntent;
use super::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = AppState;
    type Intent = SessionIntent;
    type Effect = AppCommand;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<AppCommand>) {
        match intent {
            SessionIntent::SignedIn { tokens } => {
                tracing::info!(member_id = %tokens.member_id, "Signed in");
                state.session.tokens = Some(tokens);
                fetch_user_info(state)
            }

            SessionIntent::Logout => {
                tracing::info!("Logged out, clearing user state");
                state.session = SessionState::default();
                state.lists.reset_personal();
                state.detail = DetailCache::default();
                state.route = RouteState::default();
                (state, Some(AppCommand::ClearCredentials))
            }

            SessionIntent::FetchUserInfo => fetch_user_info(state),

            SessionIntent::FetchUserInfoDone(result) => {
                state.session.user_loading = false;
                match result {
                    Ok(user) => state.session.user = Some(user),
                    Err(error) => tracing::warn!(%error, "User info fetch failed"),
                }
                (state, None)
            }

            SessionIntent::FetchGreeting => {
                if !state.session.is_logged_in() || state.session.greeting_loading {
                    return (state, None);
                }
                state.session.greeting_loading = true;
                (state, Some(AppCommand::FetchGreeting))
            }

            SessionIntent::FetchGreetingDone(result) => {
                state.session.greeting_loading = false;
                let greeting = match result {
                    Ok(greeting) => greeting,
                    // The greeting page changes layout often; treat unreadable as "nothing gained".
                    Err(ErrorKind::ParseFailed) => Greeting::no_gain(),
                    Err(error) => {
                        tracing::warn!(%error, "Greeting fetch failed");
                        return (state, None);
                    }
                };
                if state.settings.show_new_dawn_greeting
                    && greeting.gained_anything()
                    && state.route.route == Route::None
                {
                    state.route.route = Route::NewDawn(greeting.clone());
                }
                state.session.greeting = Some(greeting);
                (state, None)
            }

            SessionIntent::FetchFavoriteNames => {
                if !state.session.is_logged_in() || state.session.favorite_names_loading {
                    return (state, None);
                }
                state.session.favorite_names_loading = true;
                (state, Some(AppCommand::FetchFavoriteNames))
            }

            SessionIntent::FetchFavoriteNamesDone(result) => {
                state.session.favorite_names_loading = false;
                match result {
                    Ok(names) => state.session.favorite_names = names,
                    Err(error) => tracing::warn!(%error, "Favorite names fetch failed"),
                }
                (state, None)
            }
        }
    }
}

fn fetch_user_info(mut state: AppState) -> (AppState, Option<AppCommand>) {
    if state.session.user_loading {
        return (state, None);
    }
    let Some(user_id) = state.session.member_id().map(str::to_string) else {
        return (state, None);
    };
    state.session.user_loading = true;
    (state, Some(AppCommand::FetchUserInfo { user_id }))
}
