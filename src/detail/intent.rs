use std::collections::BTreeMap;

use url::Url;

use crate::error::ErrorKind;
use crate::model::{GalleryDetail, GalleryId, GalleryMutation};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    FetchDetail {
        gid: GalleryId,
    },
    FetchDetailDone {
        gid: GalleryId,
        result: Result<GalleryDetail, ErrorKind>,
    },

    FetchPreviews {
        gid: GalleryId,
        page: u32,
    },
    FetchPreviewsDone {
        gid: GalleryId,
        page: u32,
        result: Result<BTreeMap<usize, Url>, ErrorKind>,
    },

    FetchThumbnails {
        gid: GalleryId,
        page: u32,
    },
    FetchThumbnailsDone {
        gid: GalleryId,
        page: u32,
        result: Result<BTreeMap<usize, Url>, ErrorKind>,
    },

    FetchContents {
        gid: GalleryId,
        index: usize,
    },
    /// Drops the cached URL for `index` and requests it again.
    RefetchContents {
        gid: GalleryId,
        index: usize,
    },
    /// Completion of either content path (regular or multi-page viewer).
    FetchContentsDone {
        gid: GalleryId,
        index: usize,
        result: Result<BTreeMap<usize, Url>, ErrorKind>,
    },

    Mutate(GalleryMutation),
    MutateDone {
        mutation: GalleryMutation,
        result: Result<(), ErrorKind>,
    },
}

impl Intent for DetailIntent {}
