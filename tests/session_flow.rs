//! Session lifecycle through the running store.

mod common;

use common::{logged_in, page, reduce, spawn_store, tokens, ScriptedRequests};
use panda_engine::app::AppState;
use panda_engine::command::AppCommand;
use panda_engine::lists::{ListDomain, ListIntent};
use panda_engine::model::{GalleryHost, Greeting};
use panda_engine::services::{CredentialStore, Dependencies, MemoryCredentials};
use panda_engine::session::SessionIntent;
use panda_engine::settings::{Settings, SettingsIntent};
use panda_engine::store::Store;
use std::sync::Arc;

#[tokio::test]
async fn sign_in_loads_user_info() {
    let requests = ScriptedRequests::new();
    let mut store = spawn_store(AppState::default(), Dependencies::in_memory(requests));

    store.dispatcher.submit(SessionIntent::SignedIn { tokens: tokens() });
    let state = store.wait_for(|state| state.session.user.is_some()).await;
    assert_eq!(state.session.user.unwrap().user_id, "4242");
    assert!(!state.session.user_loading);
    store.stop().await;
}

#[tokio::test]
async fn unparsable_greeting_falls_back_to_no_gain() {
    let requests = ScriptedRequests::new();
    let mut store = spawn_store(logged_in(), Dependencies::in_memory(requests));

    store.dispatcher.submit(SessionIntent::FetchGreeting);
    let state = store.wait_for(|state| state.session.greeting.is_some()).await;
    assert_eq!(state.session.greeting, Some(Greeting::no_gain()));
    store.stop().await;
}

#[tokio::test]
async fn logout_clears_credentials_and_personal_lists() {
    let requests = ScriptedRequests::new();
    requests.script(ListDomain::Watched, Ok(page(1, 1, &["1"])));
    let credentials = Arc::new(MemoryCredentials::with_session(tokens()));
    let deps = Dependencies {
        credentials: credentials.clone(),
        ..Dependencies::in_memory(requests)
    };
    let mut store = spawn_store(logged_in(), deps);

    store.dispatcher.submit(ListIntent::Fetch { domain: ListDomain::Watched });
    store.wait_for(|state| state.lists.watched.items.len() == 1).await;

    store.dispatcher.submit(SessionIntent::Logout);
    let state = store.wait_for(|state| !state.session.is_logged_in()).await;
    assert!(state.lists.watched.items.is_empty());

    for _ in 0..10 {
        if !credentials.is_logged_in() {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(credentials.session().is_none());
    store.stop().await;
}

#[test]
fn host_switch_resets_lists_and_tags_requests() {
    let (state, _) = reduce(AppState::default(), ListIntent::Fetch { domain: ListDomain::Frontpage });
    assert!(state.lists.frontpage.is_loading);

    let settings = Settings {
        gallery_host: GalleryHost::ExHentai,
        ..Settings::default()
    };
    let (state, _) = reduce(state, SettingsIntent::UpdateSetting(settings));
    assert!(!state.lists.frontpage.is_loading);

    let (_, command) = reduce(state, ListIntent::Fetch { domain: ListDomain::Frontpage });
    match command {
        Some(AppCommand::FetchListPage(request)) => assert_eq!(request.host, GalleryHost::ExHentai),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn stored_session_is_restored_on_startup() {
    let credentials = Arc::new(MemoryCredentials::with_session(tokens()));
    let deps = Dependencies {
        credentials,
        ..Dependencies::in_memory(ScriptedRequests::new())
    };
    let store = Store::new(AppState::default(), deps);
    assert!(store.state().session.is_logged_in());
    assert_eq!(store.state().session.member_id(), Some("4242"));
}

#[test]
fn without_stored_session_startup_is_logged_out() {
    let store = Store::new(AppState::default(), Dependencies::in_memory(ScriptedRequests::new()));
    assert!(!store.state().session.is_logged_in());
}
