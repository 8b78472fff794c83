//! API key storage for a server session.
//!
//! The key lives for the lifetime of the owning server instance and is
//! shared behind an `Arc<RwLock<...>>` by the tool surface. Concurrent
//! `set` against an in-flight `search` is an accepted race: the search
//! observes whichever key was current when it read the store (last write
//! wins). This is documented behavior, not a guarantee to rely on.

use crate::error::{ClientError, ClientResult};

/// Holds the AUTO.RIA API key for a session. Set once, read per call,
/// overwritable at any time.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    api_key: Option<String>,
}

impl CredentialStore {
    /// Create an empty store (no key set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
        }
    }

    /// Store a key, replacing any previous one. Always succeeds.
    pub fn set(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    /// The current key, if one has been set.
    pub fn get(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The current key, or `MissingApiKey` when none has been set.
    pub fn require(&self) -> ClientResult<&str> {
        self.api_key.as_deref().ok_or(ClientError::MissingApiKey)
    }
}
