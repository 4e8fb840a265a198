//! In-memory auth token store.

use std::sync::RwLock;

use crate::domain::api::AuthTokenStore;
use tracing::debug;

/// Process-local token storage behind [`AuthTokenStore`].
///
/// The browser build of the console keeps the token in cookie storage;
/// this implementation serves embedding hosts and tests, where a plain
/// lock around an optional string is all that is needed.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for an already-authenticated store.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl AuthTokenStore for InMemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn set(&self, token: String) {
        debug!("auth token stored");
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    fn remove(&self) {
        debug!("auth token removed");
        *self.token.write().expect("token lock poisoned") = None;
    }
}
