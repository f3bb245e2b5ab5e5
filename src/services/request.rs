//! Request collaborator: one async call per site operation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use url::Url;

use crate::error::ErrorKind;
use crate::lists::{ListDomain, RequestId};
use crate::model::{
    Gallery, GalleryDetail, GalleryHost, GalleryId, GalleryMutation, Greeting, ListPage,
    SearchFilter, UserInfo,
};

/// Position to continue a list from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Page to request (`current + 1` of the record).
    pub page_num: u32,
    /// Id of the last gallery already shown, if any.
    pub last_id: Option<GalleryId>,
}

/// Parameters of a list page request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    /// Echoed back in the completion so stale answers can be told apart.
    pub id: RequestId,
    pub domain: ListDomain,
    pub keyword: Option<String>,
    pub host: GalleryHost,
    pub filter: SearchFilter,
    /// `None` requests the first page.
    pub cursor: Option<PageCursor>,
}

impl ListRequest {
    pub fn is_first_page(&self) -> bool {
        self.cursor.is_none()
    }
}

/// The HTML-scraping request layer. Each call yields exactly one result.
#[async_trait]
pub trait RequestClient: Send + Sync {
    async fn fetch_list(&self, request: &ListRequest) -> Result<ListPage, ErrorKind>;

    async fn fetch_gallery_detail(&self, gid: &GalleryId) -> Result<GalleryDetail, ErrorKind>;

    /// Reverse lookup of a gallery from one of its links.
    async fn fetch_gallery_by_url(&self, url: &Url) -> Result<Gallery, ErrorKind>;

    async fn fetch_previews(
        &self,
        gid: &GalleryId,
        page: u32,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind>;

    async fn fetch_thumbnails(
        &self,
        gid: &GalleryId,
        page: u32,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind>;

    /// Image URLs around `index`. May answer `Err(MpvActivated)`.
    async fn fetch_contents(
        &self,
        gid: &GalleryId,
        index: usize,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind>;

    async fn fetch_mpv_contents(
        &self,
        gid: &GalleryId,
        mpv_key: &str,
        image_key: &str,
        index: usize,
    ) -> Result<BTreeMap<usize, Url>, ErrorKind>;

    async fn fetch_user_info(&self, user_id: &str) -> Result<UserInfo, ErrorKind>;

    async fn fetch_greeting(&self) -> Result<Greeting, ErrorKind>;

    async fn fetch_favorite_names(&self) -> Result<BTreeMap<i32, String>, ErrorKind>;

    async fn submit_mutation(&self, mutation: &GalleryMutation) -> Result<(), ErrorKind>;
}
