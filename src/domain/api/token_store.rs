//! Auth token presence capability consumed by the router guard.

/// Storage for the session auth token.
///
/// The guard only ever asks whether a token is present; `set` and `remove`
/// exist for the login/logout flows of the embedding application. All
/// operations are synchronous: the guard decision must be total and must
/// not suspend.
///
/// # Implementations
///
/// - [`crate::infrastructure::InMemoryTokenStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait AuthTokenStore: Send + Sync {
    /// Returns the current auth token, if any.
    fn get(&self) -> Option<String>;

    /// Stores a new auth token, replacing any previous one.
    fn set(&self, token: String);

    /// Removes the stored token (logout).
    fn remove(&self);
}
