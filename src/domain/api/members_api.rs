//! Remote membership API capability.

use crate::domain::entities::{ProjectId, ProjectMember};
use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default number of members per roster page.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// First page of any paginated roster query.
pub const FIRST_PAGE: u32 = 1;

/// Field the remote API sorts members by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberOrderBy {
    #[default]
    Name,
    Email,
    CreatedAt,
}

/// Direction of the roster sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Query parameters for fetching one roster page.
///
/// The cursor is the single source of truth for what the UI is looking at:
/// page changes, search input, and sort changes all mutate it, and every
/// fetch sends the whole cursor to the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCursor {
    pub page: u32,
    pub search: String,
    pub order: MemberOrderBy,
    pub direction: SortDirection,
    pub limit: u32,
}

impl Default for MemberCursor {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            search: String::new(),
            order: MemberOrderBy::default(),
            direction: SortDirection::default(),
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MemberCursor {
    /// Overrides the page size, keeping the other defaults.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// One materialized page of the project roster.
///
/// Replaced wholesale on every fetch; pagination metadata mirrors what the
/// remote API reports, the client never derives it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMembersPage {
    pub members: Vec<ProjectMember>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl Default for ProjectMembersPage {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 0,
        }
    }
}

/// Remote membership API consumed by the roster store.
///
/// Pagination semantics and totals are opaque to the client: whatever the
/// remote reports is committed as-is. Errors surface verbatim to callers,
/// with no retry or partial-failure recovery at this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::InMemoryMembersApi`] - in-process implementation
///   for embedding and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectMembersApi: Send + Sync {
    /// Invites the given emails to the project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the remote rejects the invitation; no local
    /// state is touched in that case.
    async fn add(&self, project_id: &ProjectId, emails: &[String]) -> Result<(), ApiError>;

    /// Removes the members matching the given emails from the project.
    ///
    /// The caller is expected to re-fetch the page afterwards; this call
    /// never mutates local state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the remote rejects the removal.
    async fn delete(&self, project_id: &ProjectId, emails: &[String]) -> Result<(), ApiError>;

    /// Fetches one roster page for the full cursor (page, search, sort).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the query fails remotely.
    async fn get(
        &self,
        project_id: &ProjectId,
        cursor: &MemberCursor,
    ) -> Result<ProjectMembersPage, ApiError>;
}
