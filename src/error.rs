//! Failure kinds delivered by every asynchronous operation.
//!
//! The taxonomy is deliberately closed: reducers match on it to decide
//! between "show a retry affordance", "render an empty state" and
//! "switch content delivery path".

use std::collections::BTreeMap;

use thiserror::Error;

/// Outcome classification for a completed external operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Transport-level failure (no usable response).
    #[error("Networking failed")]
    NetworkingFailed,

    /// A response arrived but could not be decoded.
    #[error("Failed to parse response")]
    ParseFailed,

    /// Well-formed but empty result. Drives auto-continuation, not retry.
    #[error("Nothing found")]
    NotFound,

    /// Catch-all.
    #[error("Unknown error")]
    Unknown,

    /// The site switched this gallery to the multi-page viewer.
    ///
    /// Not a failure: the caller must re-request the contents through the
    /// multi-page-viewer path using the carried keys.
    #[error("Multi-page viewer activated")]
    MpvActivated {
        /// Viewer session key.
        mpv_key: String,
        /// Per-page image keys, keyed by page index.
        image_keys: BTreeMap<usize, String>,
    },
}

impl ErrorKind {
    /// Hard failures set a `*_failed` flag and are never retried by the engine.
    pub fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            ErrorKind::NetworkingFailed | ErrorKind::ParseFailed | ErrorKind::Unknown
        )
    }
}
