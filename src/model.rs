//! Domain records exchanged between the engine and its collaborators.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Gallery identifier as assigned by the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(String);

impl GalleryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GalleryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub gid: GalleryId,
    pub token: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub cover_url: Option<Url>,
}

/// Page counters reported by the site for a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageNumber {
    pub current: u32,
    pub maximum: u32,
}

impl PageNumber {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// True while at least one more page can be requested.
    pub fn has_more(&self) -> bool {
        self.current < self.maximum
    }
}

/// A fetched list page: counters plus the galleries on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListPage {
    pub page: PageNumber,
    #[serde(default)]
    pub galleries: Vec<Gallery>,
}

impl ListPage {
    pub fn new(page: PageNumber, galleries: Vec<Gallery>) -> Self {
        Self { page, galleries }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryComment {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub votable: bool,
    #[serde(default)]
    pub editable: bool,
}

/// Detail page of a gallery, including server-side derived fields
/// (rating counts, favorite state) that mutations change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryDetail {
    pub gallery: Gallery,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub favorited_count: u32,
    #[serde(default)]
    pub favorite_category: Option<i32>,
    #[serde(default)]
    pub user_rating: Option<u8>,
    #[serde(default)]
    pub comments: Vec<GalleryComment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingGain {
    pub currency: String,
    pub amount: u64,
}

/// Daily "new dawn" greeting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(default)]
    pub gains: Vec<GreetingGain>,
}

impl Greeting {
    /// Greeting that reports nothing gained.
    pub fn no_gain() -> Self {
        Self::default()
    }

    pub fn gained_anything(&self) -> bool {
        self.gains.iter().any(|gain| gain.amount > 0)
    }
}

/// Which mirror of the site requests go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryHost {
    #[default]
    EHentai,
    ExHentai,
}

impl GalleryHost {
    pub const ALL: [GalleryHost; 2] = [GalleryHost::EHentai, GalleryHost::ExHentai];

    pub fn domain(&self) -> &'static str {
        match self {
            GalleryHost::EHentai => "e-hentai.org",
            GalleryHost::ExHentai => "exhentai.org",
        }
    }

    pub fn from_domain(domain: &str) -> Option<Self> {
        let domain = domain.strip_prefix("www.").unwrap_or(domain);
        Self::ALL.into_iter().find(|host| host.domain() == domain)
    }
}

/// Filter applied to every list request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    pub excluded_categories: BTreeSet<String>,
    pub minimum_rating: Option<u8>,
    pub language: Option<String>,
    pub show_expunged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentVote {
    Up,
    Down,
}

/// Server-side mutations of a gallery. Success triggers a detail refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryMutation {
    Rate { gid: GalleryId, rating: u8 },
    Favor { gid: GalleryId, category: i32 },
    Unfavor { gid: GalleryId },
    Comment { gid: GalleryId, content: String },
    EditComment { gid: GalleryId, comment_id: String, content: String },
    VoteComment { gid: GalleryId, comment_id: String, vote: CommentVote },
}

impl GalleryMutation {
    pub fn gid(&self) -> &GalleryId {
        match self {
            GalleryMutation::Rate { gid, .. }
            | GalleryMutation::Favor { gid, .. }
            | GalleryMutation::Unfavor { gid }
            | GalleryMutation::Comment { gid, .. }
            | GalleryMutation::EditComment { gid, .. }
            | GalleryMutation::VoteComment { gid, .. } => gid,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            GalleryMutation::Rate { .. } => "rate",
            GalleryMutation::Favor { .. } => "favor",
            GalleryMutation::Unfavor { .. } => "unfavor",
            GalleryMutation::Comment { .. } => "comment",
            GalleryMutation::EditComment { .. } => "edit_comment",
            GalleryMutation::VoteComment { .. } => "vote_comment",
        }
    }

    /// Rejects payloads the site would refuse anyway.
    pub fn is_well_formed(&self) -> bool {
        match self {
            GalleryMutation::Rate { rating, .. } => (1..=10).contains(rating),
            GalleryMutation::Favor { category, .. } => (0..=9).contains(category),
            GalleryMutation::Comment { content, .. }
            | GalleryMutation::EditComment { content, .. } => !content.trim().is_empty(),
            GalleryMutation::Unfavor { .. } | GalleryMutation::VoteComment { .. } => true,
        }
    }
}
