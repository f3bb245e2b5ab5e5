use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use url::Url;

use crate::model::{GalleryDetail, GalleryId};
use crate::mvi::UiState;

/// Keys needed to request contents through the multi-page viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpvKeys {
    pub mpv_key: String,
    pub image_keys: BTreeMap<usize, String>,
}

/// URLs keyed by page index, with per-request loading and failure sets.
///
/// `K` is whatever the request is keyed by: the preview page for previews
/// and thumbnails, the image index for contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlPages<K: Ord> {
    pub urls: BTreeMap<usize, Url>,
    pub loading: BTreeSet<K>,
    pub failed: BTreeSet<K>,
}

impl<K: Ord + Copy> UrlPages<K> {
    /// Marks `key` as in flight. Returns `false` if it already was.
    pub(crate) fn begin(&mut self, key: K) -> bool {
        if !self.loading.insert(key) {
            return false;
        }
        self.failed.remove(&key);
        true
    }

    /// Clears the in-flight mark. Returns `false` for a stale completion.
    pub(crate) fn settle(&mut self, key: K) -> bool {
        self.loading.remove(&key)
    }

    /// Inserts indices not cached yet and returns how many were new.
    pub(crate) fn merge(&mut self, incoming: BTreeMap<usize, Url>) -> usize {
        let mut added = 0;
        for (index, url) in incoming {
            if let Entry::Vacant(slot) = self.urls.entry(index) {
                slot.insert(url);
                added += 1;
            }
        }
        added
    }

    pub(crate) fn fail(&mut self, key: K) {
        self.failed.insert(key);
    }

    pub fn is_loading(&self, key: &K) -> bool {
        self.loading.contains(key)
    }

    pub fn has_failed(&self, key: &K) -> bool {
        self.failed.contains(key)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailRecord {
    pub detail: Option<GalleryDetail>,
    pub detail_loading: bool,
    pub detail_failed: bool,
    /// A mutation landed while the detail was loading; fetch again once it settles.
    pub detail_refetch_queued: bool,
    pub previews: UrlPages<u32>,
    pub thumbnails: UrlPages<u32>,
    pub contents: UrlPages<usize>,
    /// Set once the site switched this gallery to the multi-page viewer.
    pub mpv: Option<MpvKeys>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailCache {
    records: BTreeMap<GalleryId, DetailRecord>,
}

impl UiState for DetailCache {}

impl DetailCache {
    pub fn record(&self, gid: &GalleryId) -> Option<&DetailRecord> {
        self.records.get(gid)
    }

    pub(crate) fn record_mut(&mut self, gid: &GalleryId) -> &mut DetailRecord {
        self.records.entry(gid.clone()).or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
