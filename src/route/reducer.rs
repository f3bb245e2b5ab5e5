use url::Url;

use crate::app::{AppAction, AppState};
use crate::command::AppCommand;
use crate::model::GalleryId;
use crate::mvi::Reducer;

use super::intent::RouteIntent;
use super::link::{self, LinkIntent};
use super::state::{DetailViewState, Route};
use super::ROUTE_SETTLE_DELAY;

pub struct RouteReducer;

impl Reducer for RouteReducer {
    type State = AppState;
    type Intent = RouteIntent;
    type Effect = AppCommand;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<AppCommand>) {
        match intent {
            RouteIntent::HandleUrl(url) => handle_url(state, url),

            RouteIntent::CheckClipboard => {
                if !state.settings.detects_links_from_clipboard {
                    return (state, None);
                }
                (state, Some(AppCommand::ReadClipboard))
            }

            RouteIntent::ClipboardChecked(Some(url)) => handle_url(state, url),
            RouteIntent::ClipboardChecked(None) => (state, None),

            RouteIntent::ResolveDone { link, result } => {
                if state.route.route != Route::Hud {
                    tracing::debug!(gid = %link.gid, "Stale link resolution ignored");
                    return (state, None);
                }
                match result {
                    Ok(gallery) => {
                        tracing::info!(gid = %gallery.gid, "Link resolved, opening detail");
                        let mut view = DetailViewState::new(gallery.gid.clone());
                        let command = match link.intent {
                            LinkIntent::Gallery => None,
                            LinkIntent::Page(page) => {
                                view.reading_page = Some(page);
                                Some(AppCommand::UpdateReadingProgress {
                                    gid: gallery.gid.clone(),
                                    page,
                                })
                            }
                            LinkIntent::Comment(comment_id) => {
                                view.comment_jump = Some(comment_id);
                                None
                            }
                        };
                        state.route.route = Route::Detail(gallery.gid);
                        state.route.detail = Some(view);
                        (state, command)
                    }
                    Err(error) => {
                        tracing::warn!(url = %link.url, %error, "Link resolution failed");
                        state.route.route = Route::None;
                        (state, None)
                    }
                }
            }

            RouteIntent::ShowDetail(gid) => (show_detail(state, gid), None),

            RouteIntent::ShowNewDawn => {
                let greeting = state.session.greeting.clone().unwrap_or_default();
                state.route.route = Route::NewDawn(greeting);
                (state, None)
            }

            RouteIntent::Dismiss => {
                state.route.route = Route::None;
                state.route.detail = None;
                (state, None)
            }
        }
    }
}

fn handle_url(mut state: AppState, url: Url) -> (AppState, Option<AppCommand>) {
    let redirect_to = state
        .settings
        .redirects_links_to_selected_host
        .then_some(state.settings.gallery_host);
    let Some(url) = link::normalize(&url, redirect_to) else {
        tracing::debug!(%url, "Ignoring link outside the gallery hosts");
        return (state, None);
    };
    let Some(link) = link::parse(&url) else {
        tracing::debug!(%url, "Ignoring unrecognized gallery link");
        return (state, None);
    };

    match state.route.route {
        Route::Hud => {
            tracing::debug!(%url, "Link rejected: another link is resolving");
            (state, None)
        }
        Route::Detail(_) => {
            tracing::info!(%url, "Closing open detail before handling link");
            state.route.route = Route::None;
            state.route.detail = None;
            let retry = AppCommand::Delayed {
                delay: ROUTE_SETTLE_DELAY,
                action: Box::new(AppAction::Route(RouteIntent::HandleUrl(url))),
            };
            (state, Some(retry))
        }
        Route::None | Route::NewDawn(_) => {
            state.route.route = Route::Hud;
            (state, Some(AppCommand::ResolveGallery { link }))
        }
    }
}

fn show_detail(mut state: AppState, gid: GalleryId) -> AppState {
    if state.route.detail.as_ref().map(|view| &view.gid) != Some(&gid) {
        state.route.detail = Some(DetailViewState::new(gid.clone()));
    }
    state.route.route = Route::Detail(gid);
    state
}
