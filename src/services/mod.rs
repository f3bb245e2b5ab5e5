//! Contracts of the collaborators the engine consumes.
//!
//! The engine never reaches for globals: every command receives the
//! [`Dependencies`] bundle the store was constructed with.

mod credentials;
mod persistence;
mod request;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

pub use credentials::{CredentialStore, MemoryCredentials, SecureString, SessionTokens};
pub use persistence::{GalleryField, MemoryPersistence, Persistence};
pub use request::{ListRequest, PageCursor, RequestClient};

/// Source of links copied by the user.
pub trait ClipboardWatcher: Send + Sync {
    /// True if the clipboard content changed since the previous call.
    fn has_changed(&self) -> bool;

    /// URL currently on the clipboard, if the content parses as one.
    fn url(&self) -> Option<Url>;
}

/// Clipboard that never reports anything (headless runs, tests).
pub struct DisabledClipboard;

impl ClipboardWatcher for DisabledClipboard {
    fn has_changed(&self) -> bool {
        false
    }

    fn url(&self) -> Option<Url> {
        None
    }
}

/// Biometric / device-credential re-authorization.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Prompts the user; resolves to `true` when access is granted.
    async fn authorize(&self, reason: &str) -> bool;
}

/// Authorizer that grants every request (platforms without a lock screen).
pub struct AlwaysAuthorize;

#[async_trait]
impl Authorizer for AlwaysAuthorize {
    async fn authorize(&self, _reason: &str) -> bool {
        true
    }
}

/// Everything a command may talk to.
#[derive(Clone)]
pub struct Dependencies {
    pub requests: Arc<dyn RequestClient>,
    pub persistence: Arc<dyn Persistence>,
    pub credentials: Arc<dyn CredentialStore>,
    pub clipboard: Arc<dyn ClipboardWatcher>,
    pub authorizer: Arc<dyn Authorizer>,
}

impl Dependencies {
    /// Bundle with in-memory persistence and credentials, no clipboard and
    /// an authorizer that always grants.
    pub fn in_memory(requests: Arc<dyn RequestClient>) -> Self {
        Self {
            requests,
            persistence: Arc::new(MemoryPersistence::new()),
            credentials: Arc::new(MemoryCredentials::default()),
            clipboard: Arc::new(DisabledClipboard),
            authorizer: Arc::new(AlwaysAuthorize),
        }
    }
}
