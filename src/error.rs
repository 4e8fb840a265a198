//! Library error type surfaced by remote delegations.

use serde::Serialize;
use serde_json::Value;

/// Error returned when a remote console API call fails.
///
/// This layer defines exactly one error kind: the remote call failed. The
/// underlying cause is carried verbatim in `message` and `details` and is
/// never retried or recovered here; the UI layer owns presentation.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("remote call failed: {message}")]
pub struct ApiError {
    pub message: String,
    pub details: Value,
}

impl ApiError {
    /// Creates a remote-call failure with structured context.
    pub fn remote(message: impl Into<String>, details: Value) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }
}
