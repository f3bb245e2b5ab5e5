//! Reducer for the detail cache.

use std::collections::BTreeMap;

use url::Url;

use crate::command::AppCommand;
use crate::error::ErrorKind;
use crate::model::{GalleryDetail, GalleryId};
use crate::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::{DetailCache, MpvKeys, UrlPages};

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailCache;
    type Intent = DetailIntent;
    type Effect = AppCommand;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<AppCommand>) {
        let command = match intent {
            DetailIntent::FetchDetail { gid } => fetch_detail(&mut state, gid),
            DetailIntent::FetchDetailDone { gid, result } => fetch_detail_done(&mut state, &gid, result),

            DetailIntent::FetchPreviews { gid, page } => {
                if state.record_mut(&gid).previews.begin(page) {
                    Some(AppCommand::FetchPreviews { gid, page })
                } else {
                    tracing::debug!(%gid, page, "Previews fetch rejected: request in flight");
                    None
                }
            }
            DetailIntent::FetchPreviewsDone { gid, page, result } => {
                let previews = &mut state.record_mut(&gid).previews;
                if previews.settle(page) {
                    match result {
                        Ok(urls) => {
                            previews.merge(urls);
                        }
                        Err(error) => {
                            tracing::warn!(%gid, page, %error, "Previews fetch failed");
                            previews.fail(page);
                        }
                    }
                }
                None
            }

            DetailIntent::FetchThumbnails { gid, page } => {
                if state.record_mut(&gid).thumbnails.begin(page) {
                    Some(AppCommand::FetchThumbnails { gid, page })
                } else {
                    tracing::debug!(%gid, page, "Thumbnails fetch rejected: request in flight");
                    None
                }
            }
            DetailIntent::FetchThumbnailsDone { gid, page, result } => {
                let thumbnails = &mut state.record_mut(&gid).thumbnails;
                if thumbnails.settle(page) {
                    match result {
                        Ok(urls) => {
                            thumbnails.merge(urls);
                        }
                        Err(error) => {
                            tracing::warn!(%gid, page, %error, "Thumbnails fetch failed");
                            thumbnails.fail(page);
                        }
                    }
                }
                None
            }

            DetailIntent::FetchContents { gid, index } => fetch_contents(&mut state, gid, index),
            DetailIntent::RefetchContents { gid, index } => {
                let contents = &mut state.record_mut(&gid).contents;
                if contents.is_loading(&index) {
                    tracing::debug!(%gid, index, "Refetch rejected: request in flight");
                    None
                } else {
                    contents.urls.remove(&index);
                    fetch_contents(&mut state, gid, index)
                }
            }
            DetailIntent::FetchContentsDone { gid, index, result } => {
                fetch_contents_done(&mut state, gid, index, result)
            }

            DetailIntent::Mutate(mutation) => {
                if mutation.is_well_formed() {
                    Some(AppCommand::SubmitMutation(mutation))
                } else {
                    tracing::debug!(gid = %mutation.gid(), kind = mutation.label(), "Malformed mutation dropped");
                    None
                }
            }
            DetailIntent::MutateDone { mutation, result } => match result {
                Ok(()) => {
                    let gid = mutation.gid().clone();
                    let record = state.record_mut(&gid);
                    if record.detail_loading {
                        tracing::info!(%gid, kind = mutation.label(), "Mutation applied, refetch queued behind loading detail");
                        record.detail_refetch_queued = true;
                        None
                    } else {
                        tracing::info!(%gid, kind = mutation.label(), "Mutation applied, refreshing detail");
                        fetch_detail(&mut state, gid)
                    }
                }
                Err(error) => {
                    tracing::warn!(gid = %mutation.gid(), kind = mutation.label(), %error, "Mutation failed");
                    None
                }
            },
        };
        (state, command)
    }
}

fn fetch_detail(state: &mut DetailCache, gid: GalleryId) -> Option<AppCommand> {
    let record = state.record_mut(&gid);
    if record.detail_loading {
        tracing::debug!(%gid, "Detail fetch rejected: request in flight");
        return None;
    }
    record.detail_loading = true;
    record.detail_failed = false;
    Some(AppCommand::FetchGalleryDetail { gid })
}

fn fetch_detail_done(
    state: &mut DetailCache,
    gid: &GalleryId,
    result: Result<GalleryDetail, ErrorKind>,
) -> Option<AppCommand> {
    let record = state.record_mut(gid);
    if !record.detail_loading {
        tracing::debug!(%gid, "Stale detail completion ignored");
        return None;
    }
    record.detail_loading = false;
    if record.detail_refetch_queued {
        // The answer predates a mutation; keep it for display and ask again.
        record.detail_refetch_queued = false;
        if let Ok(detail) = result {
            record.detail = Some(detail);
        }
        return fetch_detail(state, gid.clone());
    }
    match result {
        Ok(detail) => {
            let gallery = detail.gallery.clone();
            record.detail = Some(detail);
            Some(AppCommand::CacheGalleries(vec![gallery]))
        }
        Err(error) => {
            tracing::warn!(%gid, %error, "Detail fetch failed");
            record.detail_failed = true;
            None
        }
    }
}

fn fetch_contents(state: &mut DetailCache, gid: GalleryId, index: usize) -> Option<AppCommand> {
    let record = state.record_mut(&gid);
    if !record.contents.begin(index) {
        tracing::debug!(%gid, index, "Contents fetch rejected: request in flight");
        return None;
    }
    match record.mpv.clone() {
        Some(keys) => mpv_request(&mut record.contents, gid, index, &keys),
        None => Some(AppCommand::FetchContents { gid, index }),
    }
}

fn mpv_request(
    contents: &mut UrlPages<usize>,
    gid: GalleryId,
    index: usize,
    keys: &MpvKeys,
) -> Option<AppCommand> {
    match keys.image_keys.get(&index) {
        Some(image_key) => Some(AppCommand::FetchMpvContents {
            gid,
            mpv_key: keys.mpv_key.clone(),
            image_key: image_key.clone(),
            index,
        }),
        None => {
            tracing::warn!(%gid, index, "No multi-page viewer image key for index");
            contents.settle(index);
            contents.fail(index);
            None
        }
    }
}

fn fetch_contents_done(
    state: &mut DetailCache,
    gid: GalleryId,
    index: usize,
    result: Result<BTreeMap<usize, Url>, ErrorKind>,
) -> Option<AppCommand> {
    let record = state.record_mut(&gid);
    if !record.contents.is_loading(&index) {
        tracing::debug!(%gid, index, "Stale contents completion ignored");
        return None;
    }

    match result {
        Ok(urls) => {
            record.contents.settle(index);
            record.contents.merge(urls);
            None
        }
        Err(ErrorKind::MpvActivated { mpv_key, image_keys }) if record.mpv.is_none() => {
            tracing::info!(%gid, index, "Switching to multi-page viewer");
            let keys = MpvKeys {
                mpv_key,
                image_keys,
            };
            record.mpv = Some(keys.clone());
            // Index stays in flight across the switch.
            mpv_request(&mut record.contents, gid, index, &keys)
        }
        Err(error) => {
            tracing::warn!(%gid, index, %error, "Contents fetch failed");
            record.contents.settle(index);
            record.contents.fail(index);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gallery, GalleryMutation};

    fn gid() -> GalleryId {
        GalleryId::new("2001")
    }

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://img.example/{path}")).unwrap()
    }

    fn detail() -> GalleryDetail {
        GalleryDetail {
            gallery: Gallery {
                gid: gid(),
                token: "abcdef".into(),
                title: "Title".into(),
                category: "Manga".into(),
                uploader: None,
                page_count: 20,
                rating: 4.5,
                cover_url: None,
            },
            rating_count: 10,
            favorited_count: 3,
            favorite_category: None,
            user_rating: None,
            comments: Vec::new(),
        }
    }

    fn reduce(state: DetailCache, intent: DetailIntent) -> (DetailCache, Option<AppCommand>) {
        DetailReducer::reduce(state, intent)
    }

    #[test]
    fn detail_fetch_is_guarded_and_cached() {
        let (state, command) = reduce(DetailCache::default(), DetailIntent::FetchDetail { gid: gid() });
        assert!(matches!(command, Some(AppCommand::FetchGalleryDetail { .. })));

        let (state, command) = reduce(state, DetailIntent::FetchDetail { gid: gid() });
        assert!(command.is_none());

        let (state, command) = reduce(
            state,
            DetailIntent::FetchDetailDone {
                gid: gid(),
                result: Ok(detail()),
            },
        );
        let record = state.record(&gid()).unwrap();
        assert!(!record.detail_loading);
        assert_eq!(record.detail, Some(detail()));
        assert!(matches!(command, Some(AppCommand::CacheGalleries(ref g)) if g.len() == 1));
    }

    #[test]
    fn detail_failure_sets_flag() {
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchDetail { gid: gid() });
        let (state, _) = reduce(
            state,
            DetailIntent::FetchDetailDone {
                gid: gid(),
                result: Err(ErrorKind::NetworkingFailed),
            },
        );
        assert!(state.record(&gid()).unwrap().detail_failed);
    }

    #[test]
    fn contents_merge_is_append_only() {
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchContents { gid: gid(), index: 0 });
        let (state, _) = reduce(
            state,
            DetailIntent::FetchContentsDone {
                gid: gid(),
                index: 0,
                result: Ok(BTreeMap::from([(0, url("0")), (1, url("1"))])),
            },
        );
        let (state, _) = reduce(state, DetailIntent::FetchContents { gid: gid(), index: 1 });
        let (state, _) = reduce(
            state,
            DetailIntent::FetchContentsDone {
                gid: gid(),
                index: 1,
                result: Ok(BTreeMap::from([(1, url("new")), (2, url("2"))])),
            },
        );
        let contents = &state.record(&gid()).unwrap().contents;
        assert_eq!(contents.urls[&1], url("1"));
        assert_eq!(contents.urls.len(), 3);
    }

    #[test]
    fn refetch_replaces_one_entry() {
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchContents { gid: gid(), index: 0 });
        let (state, _) = reduce(
            state,
            DetailIntent::FetchContentsDone {
                gid: gid(),
                index: 0,
                result: Ok(BTreeMap::from([(0, url("old")), (1, url("1"))])),
            },
        );
        let (state, command) = reduce(state, DetailIntent::RefetchContents { gid: gid(), index: 0 });
        assert!(matches!(command, Some(AppCommand::FetchContents { index: 0, .. })));
        let (state, _) = reduce(
            state,
            DetailIntent::FetchContentsDone {
                gid: gid(),
                index: 0,
                result: Ok(BTreeMap::from([(0, url("fresh")), (1, url("other"))])),
            },
        );
        let contents = &state.record(&gid()).unwrap().contents;
        assert_eq!(contents.urls[&0], url("fresh"));
        assert_eq!(contents.urls[&1], url("1"));
    }

    #[test]
    fn mpv_activation_switches_delivery_path() {
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchContents { gid: gid(), index: 4 });
        let (state, command) = reduce(
            state,
            DetailIntent::FetchContentsDone {
                gid: gid(),
                index: 4,
                result: Err(ErrorKind::MpvActivated {
                    mpv_key: "mpv".into(),
                    image_keys: BTreeMap::from([(4, "img4".to_string())]),
                }),
            },
        );
        match command {
            Some(AppCommand::FetchMpvContents {
                mpv_key,
                image_key,
                index,
                ..
            }) => {
                assert_eq!(mpv_key, "mpv");
                assert_eq!(image_key, "img4");
                assert_eq!(index, 4);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        let record = state.record(&gid()).unwrap();
        assert!(record.mpv.is_some());
        assert!(record.contents.is_loading(&4));
        assert!(!record.contents.has_failed(&4));
    }

    #[test]
    fn contents_after_mpv_go_through_viewer() {
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchContents { gid: gid(), index: 0 });
        let (state, _) = reduce(
            state,
            DetailIntent::FetchContentsDone {
                gid: gid(),
                index: 0,
                result: Err(ErrorKind::MpvActivated {
                    mpv_key: "mpv".into(),
                    image_keys: BTreeMap::from([(0, "a".to_string()), (1, "b".to_string())]),
                }),
            },
        );
        let (state, command) = reduce(state, DetailIntent::FetchContents { gid: gid(), index: 1 });
        assert!(matches!(command, Some(AppCommand::FetchMpvContents { index: 1, .. })));

        let (state, command) = reduce(state, DetailIntent::FetchContents { gid: gid(), index: 9 });
        assert!(command.is_none());
        assert!(state.record(&gid()).unwrap().contents.has_failed(&9));
    }

    #[test]
    fn repeated_mpv_activation_is_a_failure() {
        let activated = || ErrorKind::MpvActivated {
            mpv_key: "mpv".into(),
            image_keys: BTreeMap::from([(0, "a".to_string())]),
        };
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchContents { gid: gid(), index: 0 });
        let (state, _) = reduce(
            state,
            DetailIntent::FetchContentsDone { gid: gid(), index: 0, result: Err(activated()) },
        );
        let (state, command) = reduce(
            state,
            DetailIntent::FetchContentsDone { gid: gid(), index: 0, result: Err(activated()) },
        );
        assert!(command.is_none());
        assert!(state.record(&gid()).unwrap().contents.has_failed(&0));
    }

    #[test]
    fn previews_failure_and_guard() {
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchPreviews { gid: gid(), page: 1 });
        let (state, command) = reduce(state, DetailIntent::FetchPreviews { gid: gid(), page: 1 });
        assert!(command.is_none());
        let (state, _) = reduce(
            state,
            DetailIntent::FetchPreviewsDone {
                gid: gid(),
                page: 1,
                result: Err(ErrorKind::ParseFailed),
            },
        );
        let previews = &state.record(&gid()).unwrap().previews;
        assert!(previews.has_failed(&1));
        assert!(!previews.is_loading(&1));
    }

    #[test]
    fn malformed_mutation_is_dropped() {
        let (state, command) = reduce(
            DetailCache::default(),
            DetailIntent::Mutate(GalleryMutation::Rate { gid: gid(), rating: 11 }),
        );
        assert!(command.is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn mutation_success_refetches_detail_and_failure_changes_nothing() {
        let mutation = GalleryMutation::Favor { gid: gid(), category: 2 };
        let (state, command) = reduce(DetailCache::default(), DetailIntent::Mutate(mutation.clone()));
        assert!(matches!(command, Some(AppCommand::SubmitMutation(_))));

        let before = state.clone();
        let (state, command) = reduce(
            state,
            DetailIntent::MutateDone {
                mutation: mutation.clone(),
                result: Err(ErrorKind::NetworkingFailed),
            },
        );
        assert!(command.is_none());
        assert_eq!(state, before);

        let (state, command) = reduce(
            state,
            DetailIntent::MutateDone {
                mutation,
                result: Ok(()),
            },
        );
        assert!(matches!(command, Some(AppCommand::FetchGalleryDetail { .. })));
        assert!(state.record(&gid()).unwrap().detail_loading);
    }

    #[test]
    fn mutation_during_detail_load_queues_a_refetch() {
        let mutation = GalleryMutation::Rate { gid: gid(), rating: 9 };
        let (state, _) = reduce(DetailCache::default(), DetailIntent::FetchDetail { gid: gid() });
        let (state, command) = reduce(
            state,
            DetailIntent::MutateDone {
                mutation,
                result: Ok(()),
            },
        );
        assert!(command.is_none());
        assert!(state.record(&gid()).unwrap().detail_refetch_queued);

        // The in-flight answer predates the mutation: shown, then fetched again.
        let (state, command) = reduce(
            state,
            DetailIntent::FetchDetailDone {
                gid: gid(),
                result: Ok(detail()),
            },
        );
        assert!(matches!(command, Some(AppCommand::FetchGalleryDetail { .. })));
        let record = state.record(&gid()).unwrap();
        assert!(record.detail.is_some());
        assert!(record.detail_loading);
        assert!(!record.detail_refetch_queued);

        let (state, command) = reduce(
            state,
            DetailIntent::FetchDetailDone {
                gid: gid(),
                result: Ok(detail()),
            },
        );
        assert!(matches!(command, Some(AppCommand::CacheGalleries(_))));
        assert!(!state.record(&gid()).unwrap().detail_loading);
    }
}
