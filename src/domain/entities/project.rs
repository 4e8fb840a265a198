//! Project identifier owned by the surrounding application state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the currently selected project.
///
/// Project selection lives outside this crate; operations that touch the
/// remote membership API take the id as an explicit parameter instead of
/// reading it from shared application state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a project id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
