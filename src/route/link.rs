//! Deep-link grammar.
//!
//! Accepted shapes, on either gallery host (or the app scheme in place of
//! `https`):
//!
//! ```text
//! https://{host}/g/{gid}/{token}/            gallery
//! https://{host}/g/{gid}/{token}/#c{id}      gallery, scrolled to a comment
//! https://{host}/s/{imgkey}/{gid}-{page}     gallery, opened at a page
//! ehpanda://{host}/...                       same as https
//! ```

use url::Url;

use crate::model::{GalleryHost, GalleryId};

pub const APP_SCHEME: &str = "ehpanda";

/// What the link asks for beyond opening the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIntent {
    Gallery,
    /// 1-based reading page.
    Page(usize),
    /// Comment id to scroll to.
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLink {
    pub url: Url,
    pub gid: GalleryId,
    pub intent: LinkIntent,
}

/// Maps app-scheme links to `https` and rejects foreign hosts.
///
/// With `redirect_to`, links pointing at the other gallery host are
/// rewritten to it.
pub fn normalize(url: &Url, redirect_to: Option<GalleryHost>) -> Option<Url> {
    let mut url = match url.scheme() {
        // `set_scheme` cannot switch a non-special scheme to a special one.
        APP_SCHEME => {
            let rest = url.as_str().strip_prefix(APP_SCHEME)?.strip_prefix("://")?;
            Url::parse(&format!("https://{rest}")).ok()?
        }
        "http" | "https" => url.clone(),
        _ => return None,
    };

    let host = GalleryHost::from_domain(url.host_str()?)?;
    if let Some(target) = redirect_to {
        if target != host {
            url.set_host(Some(target.domain())).ok()?;
        }
    }
    Some(url)
}

/// Extracts the gallery a normalized URL points at.
pub fn parse(url: &Url) -> Option<GalleryLink> {
    let segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();

    let (gid, intent) = match segments.as_slice() {
        ["g", gid, _token] => {
            let intent = match url.fragment().and_then(|f| f.strip_prefix('c')) {
                Some(comment) if is_numeric(comment) => LinkIntent::Comment(comment.to_string()),
                _ => LinkIntent::Gallery,
            };
            (*gid, intent)
        }
        ["s", _imgkey, gid_page] => {
            let (gid, page) = gid_page.split_once('-')?;
            (gid, LinkIntent::Page(page.parse().ok()?))
        }
        _ => return None,
    };

    if !is_numeric(gid) {
        return None;
    }
    Some(GalleryLink {
        url: url.clone(),
        gid: GalleryId::new(gid),
        intent,
    })
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
