use url::Url;

use crate::error::ErrorKind;
use crate::model::{Gallery, GalleryId};
use crate::mvi::Intent;

use super::link::GalleryLink;

#[derive(Debug, Clone)]
pub enum RouteIntent {
    /// Open a link handed to the app (universal link, app scheme, clipboard).
    HandleUrl(Url),
    /// Look for a link on the clipboard, if detection is enabled.
    CheckClipboard,
    ClipboardChecked(Option<Url>),
    ResolveDone {
        link: GalleryLink,
        result: Result<Gallery, ErrorKind>,
    },
    ShowDetail(GalleryId),
    /// Show the daily greeting held by the session.
    ShowNewDawn,
    Dismiss,
}

impl Intent for RouteIntent {}
