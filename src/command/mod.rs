//! Descriptions of external work and the code that performs it.
//!
//! Reducers return an [`AppCommand`] as plain data; the store hands it to
//! [`AppCommand::run`] on a tokio task. A command reports back through its
//! [`CompletionToken`], which can deliver at most one action.

mod runner;
mod token;

use std::time::Duration;

use crate::app::AppAction;
use crate::model::{Gallery, GalleryId, GalleryMutation};
use crate::route::GalleryLink;
use crate::services::ListRequest;

pub use runner::CommandContext;
pub use token::CompletionToken;

#[derive(Debug, Clone)]
pub enum AppCommand {
    FetchListPage(ListRequest),
    CacheGalleries(Vec<Gallery>),
    /// Sleep, then submit `action`.
    Delayed {
        delay: Duration,
        action: Box<AppAction>,
    },

    FetchGalleryDetail {
        gid: GalleryId,
    },
    FetchPreviews {
        gid: GalleryId,
        page: u32,
    },
    FetchThumbnails {
        gid: GalleryId,
        page: u32,
    },
    FetchContents {
        gid: GalleryId,
        index: usize,
    },
    FetchMpvContents {
        gid: GalleryId,
        mpv_key: String,
        image_key: String,
        index: usize,
    },
    SubmitMutation(GalleryMutation),

    FetchUserInfo {
        user_id: String,
    },
    FetchGreeting,
    FetchFavoriteNames,
    ClearCredentials,

    Authorize {
        reason: String,
    },

    ResolveGallery {
        link: GalleryLink,
    },
    UpdateReadingProgress {
        gid: GalleryId,
        page: usize,
    },
    ReadClipboard,
}

impl AppCommand {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::FetchListPage(_) => "fetch_list_page",
            AppCommand::CacheGalleries(_) => "cache_galleries",
            AppCommand::Delayed { .. } => "delayed",
            AppCommand::FetchGalleryDetail { .. } => "fetch_gallery_detail",
            AppCommand::FetchPreviews { .. } => "fetch_previews",
            AppCommand::FetchThumbnails { .. } => "fetch_thumbnails",
            AppCommand::FetchContents { .. } => "fetch_contents",
            AppCommand::FetchMpvContents { .. } => "fetch_mpv_contents",
            AppCommand::SubmitMutation(_) => "submit_mutation",
            AppCommand::FetchUserInfo { .. } => "fetch_user_info",
            AppCommand::FetchGreeting => "fetch_greeting",
            AppCommand::FetchFavoriteNames => "fetch_favorite_names",
            AppCommand::ClearCredentials => "clear_credentials",
            AppCommand::Authorize { .. } => "authorize",
            AppCommand::ResolveGallery { .. } => "resolve_gallery",
            AppCommand::UpdateReadingProgress { .. } => "update_reading_progress",
            AppCommand::ReadClipboard => "read_clipboard",
        }
    }
}
