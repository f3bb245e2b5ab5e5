use std::sync::Arc;
use std::time::SystemTime;

use crate::app_lock::AppLockIntent;
use crate::detail::DetailIntent;
use crate::lists::ListIntent;
use crate::route::RouteIntent;
use crate::services::{Dependencies, GalleryField, ListRequest};
use crate::session::SessionIntent;

use super::token::CompletionToken;
use super::AppCommand;

/// What a running command gets to work with.
pub struct CommandContext {
    pub deps: Arc<Dependencies>,
    pub token: CompletionToken,
}

impl AppCommand {
    /// Performs the operation and reports through the token.
    pub async fn run(self, ctx: CommandContext) {
        let CommandContext { deps, token } = ctx;
        let requests = &deps.requests;

        match self {
            AppCommand::FetchListPage(request) => {
                let ListRequest { id, domain, .. } = request;
                let result = requests.fetch_list(&request).await;
                if request.is_first_page() {
                    token.complete(ListIntent::FetchDone { domain, request: id, result });
                } else {
                    token.complete(ListIntent::FetchMoreDone { domain, request: id, result });
                }
            }

            AppCommand::CacheGalleries(galleries) => {
                deps.persistence.cache_galleries(&galleries);
                token.finish();
            }

            AppCommand::Delayed { delay, action } => {
                tokio::time::sleep(delay).await;
                token.complete(*action);
            }

            AppCommand::FetchGalleryDetail { gid } => {
                let result = requests.fetch_gallery_detail(&gid).await;
                token.complete(DetailIntent::FetchDetailDone { gid, result });
            }

            AppCommand::FetchPreviews { gid, page } => {
                let result = requests.fetch_previews(&gid, page).await;
                token.complete(DetailIntent::FetchPreviewsDone { gid, page, result });
            }

            AppCommand::FetchThumbnails { gid, page } => {
                let result = requests.fetch_thumbnails(&gid, page).await;
                token.complete(DetailIntent::FetchThumbnailsDone { gid, page, result });
            }

            AppCommand::FetchContents { gid, index } => {
                let result = requests.fetch_contents(&gid, index).await;
                token.complete(DetailIntent::FetchContentsDone { gid, index, result });
            }

            AppCommand::FetchMpvContents {
                gid,
                mpv_key,
                image_key,
                index,
            } => {
                let result = requests
                    .fetch_mpv_contents(&gid, &mpv_key, &image_key, index)
                    .await;
                token.complete(DetailIntent::FetchContentsDone { gid, index, result });
            }

            AppCommand::SubmitMutation(mutation) => {
                let result = requests.submit_mutation(&mutation).await;
                token.complete(DetailIntent::MutateDone { mutation, result });
            }

            AppCommand::FetchUserInfo { user_id } => {
                let result = requests.fetch_user_info(&user_id).await;
                token.complete(SessionIntent::FetchUserInfoDone(result));
            }

            AppCommand::FetchGreeting => {
                let result = requests.fetch_greeting().await;
                token.complete(SessionIntent::FetchGreetingDone(result));
            }

            AppCommand::FetchFavoriteNames => {
                let result = requests.fetch_favorite_names().await;
                token.complete(SessionIntent::FetchFavoriteNamesDone(result));
            }

            AppCommand::ClearCredentials => {
                deps.credentials.clear();
                token.finish();
            }

            AppCommand::Authorize { reason } => {
                let authorized = deps.authorizer.authorize(&reason).await;
                token.complete(AppLockIntent::AuthorizeDone { authorized });
            }

            AppCommand::ResolveGallery { link } => {
                let result = match deps.persistence.fetch_gallery(&link.gid) {
                    Some(gallery) => {
                        tracing::debug!(gid = %link.gid, "Link resolved from persistence");
                        Ok(gallery)
                    }
                    None => {
                        let result = requests.fetch_gallery_by_url(&link.url).await;
                        if let Ok(gallery) = &result {
                            deps.persistence.cache_galleries(std::slice::from_ref(gallery));
                        }
                        result
                    }
                };
                if let Ok(gallery) = &result {
                    deps.persistence
                        .update_field(&gallery.gid, GalleryField::LastOpened(SystemTime::now()));
                }
                token.complete(RouteIntent::ResolveDone { link, result });
            }

            AppCommand::UpdateReadingProgress { gid, page } => {
                deps.persistence
                    .update_field(&gid, GalleryField::ReadingProgress(page));
                token.finish();
            }

            AppCommand::ReadClipboard => {
                let clipboard = &deps.clipboard;
                let url = if clipboard.has_changed() {
                    clipboard.url()
                } else {
                    None
                };
                token.complete(RouteIntent::ClipboardChecked(url));
            }
        }
    }
}
