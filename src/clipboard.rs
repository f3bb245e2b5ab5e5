//! System clipboard as a link source.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arboard::Clipboard;
use parking_lot::Mutex;
use url::Url;

use crate::services::ClipboardWatcher;

/// Clipboard watcher backed by the OS clipboard.
///
/// Change detection compares a hash of the current text against the text
/// seen on the previous `has_changed` call.
pub struct SystemClipboard {
    clipboard: Mutex<Clipboard>,
    last_seen: Mutex<Option<u64>>,
}

impl SystemClipboard {
    /// Create a new clipboard watcher.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
            last_seen: Mutex::new(None),
        })
    }

    fn text(&self) -> Option<String> {
        match self.clipboard.lock().get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::trace!(error = %e, "Clipboard has no text");
                None
            }
        }
    }
}

impl ClipboardWatcher for SystemClipboard {
    fn has_changed(&self) -> bool {
        let current = self.text().map(|text| hash_text(&text));
        let mut last_seen = self.last_seen.lock();
        let changed = current.is_some() && current != *last_seen;
        *last_seen = current;
        changed
    }

    fn url(&self) -> Option<Url> {
        parse_url(&self.text()?)
    }
}

fn hash_text(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn parse_url(text: &str) -> Option<Url> {
    Url::parse(text.trim()).ok()
}
