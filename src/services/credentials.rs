//! Session credentials.
//!
//! Cookie plumbing lives outside the engine; this module only carries the
//! opaque identifiers the guards and the logout path need.

use parking_lot::RwLock;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for requests.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the site.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Identifiers of a signed-in session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub member_id: String,
    pub pass_hash: SecureString,
    pub igneous: Option<SecureString>,
}

pub trait CredentialStore: Send + Sync {
    /// Session restored on startup; read once when the store is built.
    fn session(&self) -> Option<SessionTokens>;

    fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    /// Forget the stored session (logout).
    fn clear(&self);
}

#[derive(Default)]
pub struct MemoryCredentials {
    session: RwLock<Option<SessionTokens>>,
}

impl MemoryCredentials {
    pub fn with_session(tokens: SessionTokens) -> Self {
        Self {
            session: RwLock::new(Some(tokens)),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn session(&self) -> Option<SessionTokens> {
        self.session.read().clone()
    }

    fn clear(&self) {
        *self.session.write() = None;
    }
}
