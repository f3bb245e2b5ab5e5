//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use url::Url;

use panda_engine::app::{AppAction, AppReducer, AppState};
use panda_engine::command::AppCommand;
use panda_engine::error::ErrorKind;
use panda_engine::lists::ListDomain;
use panda_engine::model::{
    Gallery, GalleryDetail, GalleryId, GalleryMutation, Greeting, ListPage, PageNumber, UserInfo,
};
use panda_engine::mvi::Reducer;
use panda_engine::route::link;
use panda_engine::services::{
    Dependencies, ListRequest, RequestClient, SecureString, SessionTokens,
};
use panda_engine::shutdown::ShutdownCoordinator;
use panda_engine::store::{Dispatcher, Store};

pub fn gallery(gid: &str) -> Gallery {
    Gallery {
        gid: GalleryId::new(gid),
        token: format!("token{}", gid),
        title: format!("Gallery {}", gid),
        category: "Doujinshi".to_string(),
        uploader: None,
        page_count: 24,
        rating: 4.0,
        cover_url: None,
    }
}

pub fn page(current: u32, maximum: u32, gids: &[&str]) -> ListPage {
    ListPage::new(
        PageNumber::new(current, maximum),
        gids.iter().map(|gid| gallery(gid)).collect(),
    )
}

pub fn tokens() -> SessionTokens {
    SessionTokens {
        member_id: "4242".to_string(),
        pass_hash: SecureString::new("hash"),
        igneous: None,
    }
}

pub fn logged_in() -> AppState {
    let mut state = AppState::default();
    state.session.tokens = Some(tokens());
    state
}

/// Runs the root reducer.
pub fn reduce(state: AppState, action: impl Into<AppAction>) -> (AppState, Option<AppCommand>) {
    AppReducer::reduce(state, action.into())
}

/// Request client with scripted answers per list domain.
///
/// List calls pop the next scripted result for their domain and answer
/// `NotFound` once the script runs out. Every list request is recorded.
#[derive(Default)]
pub struct ScriptedRequests {
    lists: Mutex<HashMap<ListDomain, VecDeque<Result<ListPage, ErrorKind>>>>,
    list_requests: Mutex<Vec<ListRequest>>,
    galleries: Mutex<HashMap<GalleryId, Gallery>>,
    lookups: Mutex<usize>,
    mutation_result: Mutex<Option<ErrorKind>>,
}

impl ScriptedRequests {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script(&self, domain: ListDomain, result: Result<ListPage, ErrorKind>) {
        self.lists.lock().entry(domain).or_default().push_back(result);
    }

    pub fn add_gallery(&self, gallery: Gallery) {
        self.galleries.lock().insert(gallery.gid.clone(), gallery);
    }

    pub fn fail_mutations(&self, error: ErrorKind) {
        *self.mutation_result.lock() = Some(error);
    }

    pub fn list_requests(&self) -> Vec<ListRequest> {
        self.list_requests.lock().clone()
    }

    /// Number of reverse lookups performed.
    pub fn lookups(&self) -> usize {
        *self.lookups.lock()
    }
}

#[async_trait]
impl RequestClient for ScriptedRequests {
    async fn fetch_list(&self, request: &ListRequest) -> Result<ListPage, ErrorKind> {
        self.list_requests.lock().push(request.clone());
        self.lists
            .lock()
            .get_mut(&request.domain)
            .and_then(|script| script.pop_front())
            .unwrap_or(Err(ErrorKind::NotFound))
    }

    async fn fetch_gallery_detail(&self, gid: &GalleryId) -> Result<GalleryDetail, ErrorKind> {
        let gallery = self.galleries.lock().get(gid).cloned().ok_or(ErrorKind::NotFound)?;
        Ok(GalleryDetail {
            gallery,
            rating_count: 1,
            favorited_count: 0,
            favorite_category: None,
            user_rating: None,
            comments: Vec::new(),
        })
    }

    async fn fetch_gallery_by_url(&self, url: &Url) -> Result<Gallery, ErrorKind> {
        *self.lookups.lock() += 1;
        let link = link::parse(url).ok_or(ErrorKind::ParseFailed)?;
        self.galleries
            .lock()
            .get(&link.gid)
            .cloned()
            .ok_or(ErrorKind::NotFound)
    }

    async fn fetch_previews(
        &self,
        _gid: &GalleryId,
        _page: u32,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        Err(ErrorKind::NotFound)
    }

    async fn fetch_thumbnails(
        &self,
        _gid: &GalleryId,
        _page: u32,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        Err(ErrorKind::NotFound)
    }

    async fn fetch_contents(
        &self,
        _gid: &GalleryId,
        index: usize,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        Err(ErrorKind::MpvActivated {
            mpv_key: "mpvkey".to_string(),
            image_keys: BTreeMap::from([(index, format!("img{}", index))]),
        })
    }

    async fn fetch_mpv_contents(
        &self,
        _gid: &GalleryId,
        _mpv_key: &str,
        image_key: &str,
        index: usize,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        let url = Url::parse(&format!("https://img.example/{}", image_key))
            .map_err(|_| ErrorKind::ParseFailed)?;
        Ok(BTreeMap::from([(index, url)]))
    }

    async fn fetch_user_info(&self, user_id: &str) -> Result<UserInfo, ErrorKind> {
        Ok(UserInfo {
            user_id: user_id.to_string(),
            display_name: Some("tester".to_string()),
            avatar_url: None,
        })
    }

    async fn fetch_greeting(&self) -> Result<Greeting, ErrorKind> {
        Err(ErrorKind::ParseFailed)
    }

    async fn fetch_favorite_names(&self) -> Result<BTreeMap<i32, String>, ErrorKind> {
        Ok(BTreeMap::new())
    }

    async fn submit_mutation(&self, _mutation: &GalleryMutation) -> Result<(), ErrorKind> {
        match self.mutation_result.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// A store running on its own task, observed through a watch channel.
pub struct RunningStore {
    pub dispatcher: Dispatcher,
    pub states: watch::Receiver<AppState>,
    pub shutdown: ShutdownCoordinator,
    pub task: JoinHandle<AppState>,
}

pub fn spawn_store(state: AppState, deps: Dependencies) -> RunningStore {
    let store = Store::new(state.clone(), deps);
    let (tx, states) = watch::channel(state);
    store.observers().subscribe(move |state| {
        tx.send_replace(state.clone());
    });
    let dispatcher = store.dispatcher();
    let shutdown = ShutdownCoordinator::new();
    let task = tokio::spawn(store.run(shutdown.handle()));
    RunningStore {
        dispatcher,
        states,
        shutdown,
        task,
    }
}

impl RunningStore {
    /// Waits until an observed snapshot satisfies `predicate`.
    pub async fn wait_for(&mut self, predicate: impl Fn(&AppState) -> bool) -> AppState {
        let wait = async {
            loop {
                {
                    let state = self.states.borrow_and_update();
                    if predicate(&state) {
                        return state.clone();
                    }
                }
                self.states.changed().await.expect("store stopped");
            }
        };
        tokio::time::timeout(Duration::from_secs(30), wait)
            .await
            .expect("state never matched")
    }

    pub async fn stop(self) -> AppState {
        self.shutdown.signal();
        self.task.await.expect("store task panicked")
    }
}
