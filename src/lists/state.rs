//! Pagination records.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::model::{Gallery, GalleryId, PageNumber};

/// A list the engine paginates independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListDomain {
    Search,
    Frontpage,
    /// Single page, no "more".
    Popular,
    Watched,
    /// Favorites category; `-1` is "all categories".
    Favorites(i32),
    /// Toplist type.
    Toplists(i32),
}

impl ListDomain {
    pub fn supports_more(&self) -> bool {
        !matches!(self, ListDomain::Popular)
    }

    pub fn requires_login(&self) -> bool {
        matches!(self, ListDomain::Watched | ListDomain::Favorites(_))
    }
}

impl fmt::Display for ListDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListDomain::Search => write!(f, "search"),
            ListDomain::Frontpage => write!(f, "frontpage"),
            ListDomain::Popular => write!(f, "popular"),
            ListDomain::Watched => write!(f, "watched"),
            ListDomain::Favorites(index) => write!(f, "favorites[{}]", index),
            ListDomain::Toplists(index) => write!(f, "toplists[{}]", index),
        }
    }
}

impl FromStr for ListDomain {
    type Err = String;

    /// Parses the `Display` form, e.g. `frontpage` or `favorites[3]`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let indexed = |prefix: &str| -> Option<Result<i32, String>> {
            let index = value.strip_prefix(prefix)?.strip_prefix('[')?.strip_suffix(']')?;
            Some(index.parse().map_err(|_| format!("invalid index in '{}'", value)))
        };
        match value {
            "search" => Ok(ListDomain::Search),
            "frontpage" => Ok(ListDomain::Frontpage),
            "popular" => Ok(ListDomain::Popular),
            "watched" => Ok(ListDomain::Watched),
            _ => {
                if let Some(index) = indexed("favorites") {
                    return index.map(ListDomain::Favorites);
                }
                if let Some(index) = indexed("toplists") {
                    return index.map(ListDomain::Toplists);
                }
                Err(format!("unknown list domain '{}'", value))
            }
        }
    }
}

/// Identity of one list request, unique for the lifetime of the state tree.
///
/// Completions carry the id of the request they answer; a record only
/// accepts the answer to the request it issued last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse view of a record, for rendering and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    LoadingMore,
    NotFound,
    Failed,
    MoreFailed,
}

/// Loading state and accumulated items of one list.
///
/// Invariants kept by the reducer:
/// - `is_loading` and `is_loading_more` are never both set
/// - `items` never holds two galleries with the same id
/// - `not_found` implies `items` is empty and `page.current >= page.maximum`
#[derive(Debug, Clone, PartialEq)]
pub struct ListRecord {
    pub items: Vec<Gallery>,
    pub page: PageNumber,
    /// Latest request issued for this record, in flight or settled.
    pub last_request: Option<RequestId>,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub not_found: bool,
    pub load_failed: bool,
    pub more_load_failed: bool,
}

static EMPTY_RECORD: ListRecord = ListRecord::EMPTY;

impl ListRecord {
    pub const EMPTY: ListRecord = ListRecord {
        items: Vec::new(),
        page: PageNumber {
            current: 0,
            maximum: 0,
        },
        last_request: None,
        is_loading: false,
        is_loading_more: false,
        not_found: false,
        load_failed: false,
        more_load_failed: false,
    };

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_more
    }

    /// True if a `FetchMore` would pass its guard.
    pub fn can_load_more(&self) -> bool {
        !self.is_busy() && self.page.current.saturating_add(1) <= self.page.maximum
    }

    pub fn contains(&self, gid: &GalleryId) -> bool {
        self.items.iter().any(|gallery| &gallery.gid == gid)
    }

    pub fn last_id(&self) -> Option<&GalleryId> {
        self.items.last().map(|gallery| &gallery.gid)
    }

    pub fn status(&self) -> ListStatus {
        if self.is_loading {
            ListStatus::Loading
        } else if self.is_loading_more {
            ListStatus::LoadingMore
        } else if self.not_found {
            ListStatus::NotFound
        } else if self.load_failed {
            ListStatus::Failed
        } else if self.more_load_failed {
            ListStatus::MoreFailed
        } else {
            ListStatus::Idle
        }
    }

    /// Marks the list as having nothing to show.
    pub(crate) fn mark_not_found(&mut self) {
        self.items.clear();
        self.page.maximum = self.page.current;
        self.not_found = true;
    }

    /// Replaces the items with the page, dropping duplicate ids.
    /// Returns the galleries kept.
    pub(crate) fn replace_items(&mut self, galleries: Vec<Gallery>) -> Vec<Gallery> {
        self.items.clear();
        self.append_items(galleries)
    }

    /// Appends galleries not already present. Returns the ones appended.
    pub(crate) fn append_items(&mut self, galleries: Vec<Gallery>) -> Vec<Gallery> {
        let mut seen: HashSet<GalleryId> =
            self.items.iter().map(|gallery| gallery.gid.clone()).collect();
        let mut appended = Vec::new();
        for gallery in galleries {
            if seen.insert(gallery.gid.clone()) {
                appended.push(gallery.clone());
                self.items.push(gallery);
            }
        }
        appended
    }
}

impl Default for ListRecord {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Every list record plus the active search keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListsState {
    pub search_keyword: String,
    pub search: ListRecord,
    pub frontpage: ListRecord,
    pub popular: ListRecord,
    pub watched: ListRecord,
    pub favorites: BTreeMap<i32, ListRecord>,
    pub toplists: BTreeMap<i32, ListRecord>,
    /// Survives resets so ids are never reused.
    next_request: u64,
}

impl ListsState {
    /// Record for `domain`; indexed domains never fetched read as empty.
    pub fn record(&self, domain: &ListDomain) -> &ListRecord {
        match domain {
            ListDomain::Search => &self.search,
            ListDomain::Frontpage => &self.frontpage,
            ListDomain::Popular => &self.popular,
            ListDomain::Watched => &self.watched,
            ListDomain::Favorites(index) => self.favorites.get(index).unwrap_or(&EMPTY_RECORD),
            ListDomain::Toplists(index) => self.toplists.get(index).unwrap_or(&EMPTY_RECORD),
        }
    }

    pub fn record_mut(&mut self, domain: &ListDomain) -> &mut ListRecord {
        match domain {
            ListDomain::Search => &mut self.search,
            ListDomain::Frontpage => &mut self.frontpage,
            ListDomain::Popular => &mut self.popular,
            ListDomain::Watched => &mut self.watched,
            ListDomain::Favorites(index) => self.favorites.entry(*index).or_default(),
            ListDomain::Toplists(index) => self.toplists.entry(*index).or_default(),
        }
    }

    /// Allocates a request id and records it as the latest for `domain`.
    pub(crate) fn issue_request(&mut self, domain: &ListDomain) -> RequestId {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.record_mut(domain).last_request = Some(id);
        id
    }

    /// Empties every record and the keyword. Completions of requests issued
    /// before the reset no longer match any record.
    pub fn reset(&mut self) {
        *self = ListsState {
            next_request: self.next_request,
            ..ListsState::default()
        };
    }

    /// Records that belong to the signed-in user.
    pub fn reset_personal(&mut self) {
        self.watched = ListRecord::default();
        self.favorites.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(gid: &str) -> Gallery {
        Gallery {
            gid: GalleryId::new(gid),
            token: "t".into(),
            title: format!("Gallery {}", gid),
            category: String::new(),
            uploader: None,
            page_count: 1,
            rating: 0.0,
            cover_url: None,
        }
    }

    #[test]
    fn append_skips_known_and_repeated_ids() {
        let mut record = ListRecord::default();
        record.append_items(vec![gallery("1"), gallery("2")]);
        let appended = record.append_items(vec![gallery("2"), gallery("3"), gallery("3")]);

        assert_eq!(appended.len(), 1);
        let ids: Vec<_> = record.items.iter().map(|g| g.gid.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn replace_drops_previous_items() {
        let mut record = ListRecord::default();
        record.append_items(vec![gallery("1")]);
        record.replace_items(vec![gallery("5"), gallery("5")]);
        assert_eq!(record.items.len(), 1);
        assert!(record.contains(&GalleryId::new("5")));
        assert!(!record.contains(&GalleryId::new("1")));
    }

    #[test]
    fn can_load_more_respects_counters_and_flags() {
        let mut record = ListRecord::default();
        assert!(!record.can_load_more());

        record.page = PageNumber::new(1, 3);
        assert!(record.can_load_more());

        record.is_loading = true;
        assert!(!record.can_load_more());

        record.is_loading = false;
        record.page = PageNumber::new(3, 3);
        assert!(!record.can_load_more());
    }

    #[test]
    fn indexed_records_are_independent() {
        let mut lists = ListsState::default();
        lists.record_mut(&ListDomain::Favorites(0)).is_loading = true;

        assert!(lists.record(&ListDomain::Favorites(0)).is_loading);
        assert!(!lists.record(&ListDomain::Favorites(1)).is_loading);
        assert!(!lists.record(&ListDomain::Toplists(0)).is_loading);
    }

    #[test]
    fn request_ids_are_not_reused_after_reset() {
        let mut lists = ListsState::default();
        let first = lists.issue_request(&ListDomain::Frontpage);
        lists.reset();
        assert_eq!(lists.frontpage.last_request, None);

        let second = lists.issue_request(&ListDomain::Frontpage);
        assert_ne!(first, second);
        assert_eq!(lists.frontpage.last_request, Some(second));
    }

    #[test]
    fn not_found_clamps_maximum_to_current() {
        let mut record = ListRecord::default();
        record.append_items(vec![gallery("1")]);
        record.page = PageNumber::new(1, 3);
        record.mark_not_found();
        assert!(record.items.is_empty());
        assert_eq!(record.page, PageNumber::new(1, 1));
        assert!(!record.can_load_more());
    }

    #[test]
    fn status_priority() {
        let mut record = ListRecord::default();
        assert_eq!(record.status(), ListStatus::Idle);
        record.more_load_failed = true;
        assert_eq!(record.status(), ListStatus::MoreFailed);
        record.not_found = true;
        assert_eq!(record.status(), ListStatus::NotFound);
        record.is_loading_more = true;
        assert_eq!(record.status(), ListStatus::LoadingMore);
    }

    #[test]
    fn domain_capabilities() {
        assert!(!ListDomain::Popular.supports_more());
        assert!(ListDomain::Toplists(2).supports_more());
        assert!(ListDomain::Favorites(-1).requires_login());
        assert!(!ListDomain::Search.requires_login());
        assert_eq!(ListDomain::Favorites(3).to_string(), "favorites[3]");
    }

    #[test]
    fn domain_parses_display_form() {
        for domain in [
            ListDomain::Search,
            ListDomain::Popular,
            ListDomain::Favorites(-1),
            ListDomain::Toplists(15),
        ] {
            assert_eq!(domain.to_string().parse::<ListDomain>(), Ok(domain));
        }
        assert!("favorites[x]".parse::<ListDomain>().is_err());
        assert!("recent".parse::<ListDomain>().is_err());
    }
}
