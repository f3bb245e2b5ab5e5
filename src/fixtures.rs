//! Request client answering from a JSON fixture file.
//!
//! Drives the engine without a network, for the CLI and for reproducing
//! pagination behaviour. List pages are looked up by domain (`Display`
//! form) and page number; anything absent answers `NotFound`.
//!
//! ```json
//! {
//!   "lists": {
//!     "frontpage": [
//!       { "page": { "current": 1, "maximum": 2 }, "galleries": [] },
//!       { "page": { "current": 2, "maximum": 2 }, "galleries": [ ... ] }
//!     ]
//!   },
//!   "galleries": [ ... ],
//!   "greeting": { "gains": [ { "currency": "credits", "amount": 30 } ] }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::error::ErrorKind;
use crate::model::{
    Gallery, GalleryDetail, GalleryId, GalleryMutation, Greeting, ListPage, UserInfo,
};
use crate::route::link;
use crate::services::{ListRequest, RequestClient};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fixture {
    /// Pages per list domain, in request order.
    pub lists: BTreeMap<String, Vec<ListPage>>,
    /// Galleries known to reverse lookup.
    pub galleries: Vec<Gallery>,
    pub details: Vec<GalleryDetail>,
    pub greeting: Option<Greeting>,
    pub favorite_names: BTreeMap<i32, String>,
}

pub struct FixtureRequests {
    fixture: Fixture,
    calls: AtomicUsize,
}

impl FixtureRequests {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|e| FixtureError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fixture = serde_json::from_str(&content).map_err(|e| FixtureError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(fixture))
    }

    /// Number of requests answered so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn gallery(&self, gid: &GalleryId) -> Option<&Gallery> {
        self.fixture.galleries.iter().find(|gallery| &gallery.gid == gid)
    }
}

#[async_trait]
impl RequestClient for FixtureRequests {
    async fn fetch_list(&self, request: &ListRequest) -> Result<ListPage, ErrorKind> {
        self.count();
        let pages = self
            .fixture
            .lists
            .get(&request.domain.to_string())
            .ok_or(ErrorKind::NotFound)?;
        let page = match &request.cursor {
            None => pages.first(),
            Some(cursor) => pages.iter().find(|page| page.page.current == cursor.page_num),
        };
        page.cloned().ok_or(ErrorKind::NotFound)
    }

    async fn fetch_gallery_detail(&self, gid: &GalleryId) -> Result<GalleryDetail, ErrorKind> {
        self.count();
        self.fixture
            .details
            .iter()
            .find(|detail| &detail.gallery.gid == gid)
            .cloned()
            .ok_or(ErrorKind::NotFound)
    }

    async fn fetch_gallery_by_url(&self, url: &Url) -> Result<Gallery, ErrorKind> {
        self.count();
        let link = link::parse(url).ok_or(ErrorKind::ParseFailed)?;
        self.gallery(&link.gid).cloned().ok_or(ErrorKind::NotFound)
    }

    async fn fetch_previews(
        &self,
        _gid: &GalleryId,
        _page: u32,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        self.count();
        Err(ErrorKind::NotFound)
    }

    async fn fetch_thumbnails(
        &self,
        _gid: &GalleryId,
        _page: u32,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        self.count();
        Err(ErrorKind::NotFound)
    }

    async fn fetch_contents(
        &self,
        _gid: &GalleryId,
        _index: usize,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        self.count();
        Err(ErrorKind::NotFound)
    }

    async fn fetch_mpv_contents(
        &self,
        _gid: &GalleryId,
        _mpv_key: &str,
        _image_key: &str,
        _index: usize,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind> {
        self.count();
        Err(ErrorKind::NotFound)
    }

    async fn fetch_user_info(&self, user_id: &str) -> Result<UserInfo, ErrorKind> {
        self.count();
        Ok(UserInfo {
            user_id: user_id.to_string(),
            ..UserInfo::default()
        })
    }

    async fn fetch_greeting(&self) -> Result<Greeting, ErrorKind> {
        self.count();
        self.fixture.greeting.clone().ok_or(ErrorKind::ParseFailed)
    }

    async fn fetch_favorite_names(&self) -> Result<BTreeMap<i32, String>, ErrorKind> {
        self.count();
        Ok(self.fixture.favorite_names.clone())
    }

    async fn submit_mutation(&self, _mutation: &GalleryMutation) -> Result<(), ErrorKind> {
        self.count();
        Ok(())
    }
}
