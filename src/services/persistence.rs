//! Persistence collaborator used to deduplicate and to resolve deep links
//! without a network round-trip.

use std::collections::HashMap;
use std::time::SystemTime;

use parking_lot::RwLock;

use crate::model::{Gallery, GalleryId};

/// Single field update on a stored gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryField {
    ReadingProgress(usize),
    LastOpened(SystemTime),
}

pub trait Persistence: Send + Sync {
    fn fetch_gallery(&self, gid: &GalleryId) -> Option<Gallery>;

    /// Inserts new galleries and refreshes existing ones, keeping their
    /// locally tracked fields.
    fn cache_galleries(&self, galleries: &[Gallery]);

    fn update_field(&self, gid: &GalleryId, field: GalleryField);
}

#[derive(Debug, Clone)]
struct StoredGallery {
    gallery: Gallery,
    reading_progress: Option<usize>,
    last_opened: Option<SystemTime>,
}

/// Process-local store behind a read-write lock.
#[derive(Default)]
pub struct MemoryPersistence {
    galleries: RwLock<HashMap<GalleryId, StoredGallery>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.galleries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.read().is_empty()
    }

    pub fn reading_progress(&self, gid: &GalleryId) -> Option<usize> {
        self.galleries
            .read()
            .get(gid)
            .and_then(|stored| stored.reading_progress)
    }

    pub fn last_opened(&self, gid: &GalleryId) -> Option<SystemTime> {
        self.galleries.read().get(gid).and_then(|stored| stored.last_opened)
    }
}

impl Persistence for MemoryPersistence {
    fn fetch_gallery(&self, gid: &GalleryId) -> Option<Gallery> {
        self.galleries
            .read()
            .get(gid)
            .map(|stored| stored.gallery.clone())
    }

    fn cache_galleries(&self, galleries: &[Gallery]) {
        let mut guard = self.galleries.write();
        for gallery in galleries {
            guard
                .entry(gallery.gid.clone())
                .and_modify(|stored| stored.gallery = gallery.clone())
                .or_insert_with(|| StoredGallery {
                    gallery: gallery.clone(),
                    reading_progress: None,
                    last_opened: None,
                });
        }
    }

    fn update_field(&self, gid: &GalleryId, field: GalleryField) {
        let mut guard = self.galleries.write();
        let Some(stored) = guard.get_mut(gid) else {
            tracing::debug!(gid = %gid, ?field, "Field update for uncached gallery ignored");
            return;
        };
        match field {
            GalleryField::ReadingProgress(page) => stored.reading_progress = Some(page),
            GalleryField::LastOpened(at) => stored.last_opened = Some(at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(gid: &str, title: &str) -> Gallery {
        Gallery {
            gid: GalleryId::new(gid),
            token: "tok".into(),
            title: title.into(),
            category: String::new(),
            uploader: None,
            page_count: 10,
            rating: 4.5,
            cover_url: None,
        }
    }

    #[test]
    fn cache_refreshes_gallery_and_keeps_progress() {
        let store = MemoryPersistence::new();
        store.cache_galleries(&[gallery("1", "old")]);
        store.update_field(&GalleryId::new("1"), GalleryField::ReadingProgress(4));
        store.cache_galleries(&[gallery("1", "new")]);

        let stored = store.fetch_gallery(&GalleryId::new("1")).unwrap();
        assert_eq!(stored.title, "new");
        assert_eq!(store.reading_progress(&GalleryId::new("1")), Some(4));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_on_missing_gallery_is_ignored() {
        let store = MemoryPersistence::new();
        store.update_field(&GalleryId::new("9"), GalleryField::ReadingProgress(1));
        assert!(store.is_empty());
        assert_eq!(store.reading_progress(&GalleryId::new("9")), None);
    }
}
