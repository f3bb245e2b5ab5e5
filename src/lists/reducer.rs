//! Reducer for the pagination records.

use crate::app::{AppAction, AppState};
use crate::command::AppCommand;
use crate::error::ErrorKind;
use crate::model::{ListPage, PageNumber};
use crate::mvi::Reducer;
use crate::services::{ListRequest, PageCursor};

use super::intent::ListIntent;
use super::state::{ListDomain, RequestId};
use super::AUTO_CONTINUATION_DELAY;

/// Reducer for every list domain.
///
/// Guard rejections (request already in flight, logged out, no more pages)
/// leave the state untouched and emit nothing. Page counters are copied
/// from completed payloads, never advanced here.
pub struct ListsReducer;

impl Reducer for ListsReducer {
    type State = AppState;
    type Intent = ListIntent;
    type Effect = AppCommand;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<AppCommand>) {
        match intent {
            ListIntent::Search { keyword } => {
                if state.lists.search.is_busy() {
                    tracing::debug!(%keyword, "Search rejected: request in flight");
                    return (state, None);
                }
                let mut state = state;
                state.lists.search_keyword = keyword;
                fetch(state, ListDomain::Search)
            }
            ListIntent::Fetch { domain } => fetch(state, domain),
            ListIntent::FetchMore { domain } => fetch_more(state, domain),
            ListIntent::Continue { domain, after } => {
                if state.lists.record(&domain).last_request != Some(after) {
                    tracing::debug!(%domain, %after, "Continuation dropped: list changed since it was scheduled");
                    return (state, None);
                }
                fetch_more(state, domain)
            }
            ListIntent::FetchDone {
                domain,
                request,
                result,
            } => fetch_done(state, domain, request, result),
            ListIntent::FetchMoreDone {
                domain,
                request,
                result,
            } => fetch_more_done(state, domain, request, result),
        }
    }
}

fn fetch(mut state: AppState, domain: ListDomain) -> (AppState, Option<AppCommand>) {
    if domain.requires_login() && !state.session.is_logged_in() {
        tracing::debug!(%domain, "Fetch rejected: not logged in");
        return (state, None);
    }

    let record = state.lists.record_mut(&domain);
    if record.is_busy() {
        tracing::debug!(%domain, "Fetch rejected: request in flight");
        return (state, None);
    }
    record.page = PageNumber::default();
    record.is_loading = true;
    record.not_found = false;
    record.load_failed = false;
    record.more_load_failed = false;

    let id = state.lists.issue_request(&domain);
    let request = list_request(&state, domain, id, None);
    (state, Some(AppCommand::FetchListPage(request)))
}

fn fetch_more(mut state: AppState, domain: ListDomain) -> (AppState, Option<AppCommand>) {
    if !domain.supports_more() {
        tracing::debug!(%domain, "FetchMore rejected: single-page list");
        return (state, None);
    }
    if domain.requires_login() && !state.session.is_logged_in() {
        tracing::debug!(%domain, "FetchMore rejected: not logged in");
        return (state, None);
    }

    let record = state.lists.record_mut(&domain);
    if record.is_busy() {
        tracing::debug!(%domain, "FetchMore rejected: request in flight");
        return (state, None);
    }
    let next_page = record.page.current.saturating_add(1);
    if next_page > record.page.maximum {
        tracing::debug!(
            %domain,
            current = record.page.current,
            maximum = record.page.maximum,
            "FetchMore rejected: no more pages"
        );
        return (state, None);
    }
    record.is_loading_more = true;
    record.more_load_failed = false;
    let cursor = PageCursor {
        page_num: next_page,
        last_id: record.last_id().cloned(),
    };

    let id = state.lists.issue_request(&domain);
    let request = list_request(&state, domain, id, Some(cursor));
    (state, Some(AppCommand::FetchListPage(request)))
}

fn fetch_done(
    mut state: AppState,
    domain: ListDomain,
    request: RequestId,
    result: Result<ListPage, ErrorKind>,
) -> (AppState, Option<AppCommand>) {
    let record = state.lists.record_mut(&domain);
    if !record.is_loading || record.last_request != Some(request) {
        tracing::debug!(%domain, %request, "Stale first-page completion ignored");
        return (state, None);
    }
    record.is_loading = false;

    let command = match result {
        Ok(ListPage { page, galleries }) => {
            record.page = page;
            let kept = record.replace_items(galleries);
            if !kept.is_empty() {
                Some(AppCommand::CacheGalleries(kept))
            } else if domain.supports_more() && page.has_more() {
                tracing::debug!(%domain, current = page.current, maximum = page.maximum, "Empty page, continuing");
                Some(continuation(domain, request))
            } else {
                record.mark_not_found();
                None
            }
        }
        Err(ErrorKind::NotFound) => {
            record.mark_not_found();
            None
        }
        Err(error) => {
            tracing::warn!(%domain, %error, "List fetch failed");
            record.load_failed = true;
            None
        }
    };
    (state, command)
}

fn fetch_more_done(
    mut state: AppState,
    domain: ListDomain,
    request: RequestId,
    result: Result<ListPage, ErrorKind>,
) -> (AppState, Option<AppCommand>) {
    let record = state.lists.record_mut(&domain);
    if !record.is_loading_more || record.last_request != Some(request) {
        tracing::debug!(%domain, %request, "Stale next-page completion ignored");
        return (state, None);
    }
    record.is_loading_more = false;

    let command = match result {
        Ok(ListPage { page, galleries }) => {
            let advanced = page.current > record.page.current;
            record.page = page;
            let appended = record.append_items(galleries);
            if !appended.is_empty() {
                Some(AppCommand::CacheGalleries(appended))
            } else if advanced && page.has_more() {
                tracing::debug!(%domain, current = page.current, maximum = page.maximum, "Empty page, continuing");
                Some(continuation(domain, request))
            } else {
                if record.items.is_empty() {
                    record.mark_not_found();
                }
                None
            }
        }
        Err(ErrorKind::NotFound) => {
            if record.items.is_empty() {
                record.mark_not_found();
            }
            None
        }
        Err(error) => {
            tracing::warn!(%domain, %error, "List fetch-more failed");
            record.more_load_failed = true;
            None
        }
    };
    (state, command)
}

fn continuation(domain: ListDomain, after: RequestId) -> AppCommand {
    AppCommand::Delayed {
        delay: AUTO_CONTINUATION_DELAY,
        action: Box::new(AppAction::List(ListIntent::Continue { domain, after })),
    }
}

fn list_request(
    state: &AppState,
    domain: ListDomain,
    id: RequestId,
    cursor: Option<PageCursor>,
) -> ListRequest {
    let keyword = match domain {
        ListDomain::Search => Some(state.lists.search_keyword.clone()),
        _ => None,
    };
    ListRequest {
        id,
        domain,
        keyword,
        host: state.settings.gallery_host,
        filter: state.settings.search_filter.clone(),
        cursor,
    }
}
