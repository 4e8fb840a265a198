//! Project member entity representing a user's membership in a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's membership in a project.
///
/// The `is_selected` flag is transient UI state: it marks the member as
/// chosen for a bulk action and is never sent to the remote API, which only
/// ever receives ids and emails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub id: String,
    pub full_name: String,
    pub short_name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    #[serde(skip)]
    pub is_selected: bool,
}

impl ProjectMember {
    /// Creates a new, unselected member.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        short_name: impl Into<String>,
        email: impl Into<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            short_name: short_name.into(),
            email: email.into(),
            joined_at,
            is_selected: false,
        }
    }

    /// Name shown in roster rows: the short name when present, otherwise
    /// the full name.
    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.full_name
        } else {
            &self.short_name
        }
    }
}
