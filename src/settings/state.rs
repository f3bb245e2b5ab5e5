use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{GalleryHost, SearchFilter};

/// Inactivity threshold after which the app locks. Negative disables locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutoLockPolicy(i64);

impl AutoLockPolicy {
    pub const NEVER: AutoLockPolicy = AutoLockPolicy(-1);
    pub const INSTANTLY: AutoLockPolicy = AutoLockPolicy(0);

    pub fn seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// `None` when locking is disabled.
    pub fn threshold(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_secs)
    }
}

impl Default for AutoLockPolicy {
    fn default() -> Self {
        Self::NEVER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListDisplayMode {
    #[default]
    Detail,
    Thumbnail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gallery_host: GalleryHost,
    pub search_filter: SearchFilter,
    pub list_display_mode: ListDisplayMode,
    pub auto_lock_policy: AutoLockPolicy,
    /// Blur applied to the window while inactive or locked.
    pub background_blur_radius: f64,
    pub show_new_dawn_greeting: bool,
    pub detects_links_from_clipboard: bool,
    pub redirects_links_to_selected_host: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gallery_host: GalleryHost::default(),
            search_filter: SearchFilter::default(),
            list_display_mode: ListDisplayMode::default(),
            auto_lock_policy: AutoLockPolicy::default(),
            background_blur_radius: 10.0,
            show_new_dawn_greeting: false,
            detects_links_from_clipboard: false,
            redirects_links_to_selected_host: false,
        }
    }
}
