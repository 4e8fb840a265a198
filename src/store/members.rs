//! Team roster store: mediates UI intents and the remote membership API.

use std::sync::Arc;

use crate::domain::api::{
    DEFAULT_PAGE_SIZE, MemberOrderBy, ProjectMembersApi, ProjectMembersPage, SortDirection,
};
use crate::domain::entities::{ProjectId, ProjectMember};
use crate::error::ApiError;
use crate::store::state::{Mutation, ProjectMembersState};

/// Holds the authoritative local view of the current roster page and
/// selection, and delegates every remote operation to the injected
/// [`ProjectMembersApi`].
///
/// The store performs no retry and no optimistic updates: remote failures
/// surface verbatim and leave local state exactly as it was. Concurrent
/// fetches are not synchronized; a caller that initiates overlapping
/// fetches must discard results it no longer wants.
pub struct ProjectMembersStore<A: ProjectMembersApi> {
    api: Arc<A>,
    state: ProjectMembersState,
}

impl<A: ProjectMembersApi> ProjectMembersStore<A> {
    /// Creates a store with the default page size.
    pub fn new(api: Arc<A>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Creates a store whose cursor uses the given page size.
    pub fn with_page_size(api: Arc<A>, page_size: u32) -> Self {
        Self {
            api,
            state: ProjectMembersState::with_page_size(page_size),
        }
    }

    /// Current state, for reactive reads by the UI layer.
    pub fn state(&self) -> &ProjectMembersState {
        &self.state
    }

    /// The page currently shown.
    pub fn page(&self) -> &ProjectMembersPage {
        &self.state.page
    }

    fn commit(&mut self, mutation: Mutation) {
        self.state = self.state.apply(mutation);
    }

    /// Invites the given emails to the project.
    ///
    /// No local state is updated; the caller re-fetches once the remote
    /// confirms.
    ///
    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unmodified.
    pub async fn add_members(
        &self,
        project_id: &ProjectId,
        emails: &[String],
    ) -> Result<(), ApiError> {
        tracing::debug!(project = %project_id, count = emails.len(), "adding project members");
        self.api.add(project_id, emails).await
    }

    /// Removes members from the project by email.
    ///
    /// No local state is updated; the caller re-fetches once the remote
    /// confirms.
    ///
    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unmodified.
    pub async fn delete_members(
        &self,
        project_id: &ProjectId,
        emails: &[String],
    ) -> Result<(), ApiError> {
        tracing::debug!(project = %project_id, count = emails.len(), "removing project members");
        self.api.delete(project_id, emails).await
    }

    /// Fetches the given page and commits it as the current view.
    ///
    /// The cursor's page number is committed before the query is issued, so
    /// the query always carries the full, current cursor (page, search,
    /// sort field, sort direction).
    ///
    /// # Errors
    ///
    /// Returns the remote [`ApiError`] unmodified; the cursor keeps the new
    /// page number but the previous page stays committed.
    pub async fn fetch_page(
        &mut self,
        project_id: &ProjectId,
        page: u32,
    ) -> Result<ProjectMembersPage, ApiError> {
        self.commit(Mutation::SetCursorPage(page));

        tracing::debug!(project = %project_id, page, "fetching project members page");
        let fetched = self.api.get(project_id, &self.state.cursor).await?;

        self.commit(Mutation::SetPage(fetched.clone()));

        Ok(fetched)
    }

    /// Updates the cursor's search string. Does not fetch.
    pub fn set_search_query(&mut self, search: impl Into<String>) {
        self.commit(Mutation::SetSearchQuery(search.into()));
    }

    /// Updates the cursor's sort field. Does not fetch.
    pub fn set_order(&mut self, order: MemberOrderBy) {
        self.commit(Mutation::SetOrder(order));
    }

    /// Updates the cursor's sort direction. Does not fetch.
    pub fn set_order_direction(&mut self, direction: SortDirection) {
        self.commit(Mutation::SetOrderDirection(direction));
    }

    /// Resets cursor and page to fresh defaults (project switch, logout).
    pub fn clear(&mut self) {
        self.commit(Mutation::Clear);
    }

    /// Flips the selection flag of exactly the member with the given id.
    pub fn toggle_selection(&mut self, member_id: &str) {
        self.commit(Mutation::ToggleSelection(member_id.to_owned()));
    }

    /// Deselects every member on the current page.
    pub fn clear_selection(&mut self) {
        self.commit(Mutation::ClearSelection);
    }

    /// Members currently marked for a bulk action, recomputed per access.
    pub fn selected_members(&self) -> Vec<&ProjectMember> {
        self.state.selected_members()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api::{MemberCursor, MockProjectMembersApi};
    use chrono::Utc;
    use serde_json::json;

    fn project() -> ProjectId {
        ProjectId::new("project-1")
    }

    fn emails(list: &[&str]) -> Vec<String> {
        list.iter().map(|e| e.to_string()).collect()
    }

    fn fetched_page() -> ProjectMembersPage {
        ProjectMembersPage {
            members: vec![ProjectMember::new(
                "1",
                "First Member",
                "f1",
                "1@example.com",
                Utc::now(),
            )],
            page: 2,
            page_size: 6,
            total_items: 7,
            total_pages: 2,
        }
    }

    #[tokio::test]
    async fn test_fetch_page_sets_cursor_before_querying() {
        let mut mock_api = MockProjectMembersApi::new();

        mock_api
            .expect_get()
            .withf(|_, cursor| cursor.page == 2 && cursor.search == "bob")
            .times(1)
            .returning(|_, _| Ok(fetched_page()));

        let mut store = ProjectMembersStore::new(Arc::new(mock_api));
        store.set_search_query("bob");

        let page = store.fetch_page(&project(), 2).await.unwrap();

        assert_eq!(store.state().cursor.page, 2);
        assert_eq!(store.page(), &page);
        assert_eq!(page.members.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_page_failure_keeps_previous_page() {
        let mut mock_api = MockProjectMembersApi::new();

        mock_api
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(fetched_page()));
        mock_api
            .expect_get()
            .times(1)
            .returning(|_, _| Err(ApiError::remote("query failed", json!({}))));

        let mut store = ProjectMembersStore::new(Arc::new(mock_api));

        store.fetch_page(&project(), 2).await.unwrap();
        let err = store.fetch_page(&project(), 3).await.unwrap_err();

        assert_eq!(err.message, "query failed");
        // Cursor moved, page did not.
        assert_eq!(store.state().cursor.page, 3);
        assert_eq!(store.page().page, 2);
    }

    #[tokio::test]
    async fn test_add_members_delegates_with_project_and_emails() {
        let mut mock_api = MockProjectMembersApi::new();

        mock_api
            .expect_add()
            .withf(|id, emails| id.as_str() == "project-1" && emails == ["new@example.com"])
            .times(1)
            .returning(|_, _| Ok(()));

        let store = ProjectMembersStore::new(Arc::new(mock_api));

        store
            .add_members(&project(), &emails(&["new@example.com"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_members_surfaces_the_remote_error_verbatim() {
        let mut mock_api = MockProjectMembersApi::new();

        mock_api.expect_add().times(1).returning(|_, _| {
            Err(ApiError::remote(
                "user not found",
                json!({ "email": "ghost@example.com" }),
            ))
        });

        let store = ProjectMembersStore::new(Arc::new(mock_api));

        let err = store
            .add_members(&project(), &emails(&["ghost@example.com"]))
            .await
            .unwrap_err();

        assert_eq!(err.message, "user not found");
        assert_eq!(err.details["email"], "ghost@example.com");
    }

    #[tokio::test]
    async fn test_delete_members_leaves_local_state_alone() {
        let mut mock_api = MockProjectMembersApi::new();

        mock_api
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(fetched_page()));
        mock_api.expect_delete().times(1).returning(|_, _| Ok(()));

        let mut store = ProjectMembersStore::new(Arc::new(mock_api));
        store.fetch_page(&project(), 2).await.unwrap();
        let before = store.state().clone();

        store
            .delete_members(&project(), &emails(&["1@example.com"]))
            .await
            .unwrap();

        assert_eq!(store.state(), &before);
    }

    #[tokio::test]
    async fn test_cursor_setters_do_not_fetch() {
        // The mock would panic on any unexpected `get` call.
        let mock_api = MockProjectMembersApi::new();
        let mut store = ProjectMembersStore::new(Arc::new(mock_api));

        store.set_search_query("bob");
        store.set_order(MemberOrderBy::Email);
        store.set_order_direction(SortDirection::Descending);

        let cursor = &store.state().cursor;
        assert_eq!(cursor.search, "bob");
        assert_eq!(cursor.order, MemberOrderBy::Email);
        assert_eq!(cursor.direction, SortDirection::Descending);
        assert_eq!(cursor.page, 1);
    }

    #[tokio::test]
    async fn test_selection_round_trip() {
        let mut mock_api = MockProjectMembersApi::new();
        mock_api.expect_get().times(1).returning(|_, _| {
            Ok(ProjectMembersPage {
                members: vec![
                    ProjectMember::new("1", "First", "f1", "1@example.com", Utc::now()),
                    ProjectMember::new("2", "Second", "f2", "2@example.com", Utc::now()),
                ],
                page: 1,
                page_size: 6,
                total_items: 2,
                total_pages: 1,
            })
        });

        let mut store = ProjectMembersStore::new(Arc::new(mock_api));
        store.fetch_page(&project(), 1).await.unwrap();

        store.toggle_selection("2");
        let selected: Vec<_> = store.selected_members().iter().map(|m| m.id.clone()).collect();
        assert_eq!(selected, ["2"]);

        store.toggle_selection("2");
        assert!(store.selected_members().is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_to_the_configured_page_size() {
        let mock_api = MockProjectMembersApi::new();
        let mut store = ProjectMembersStore::with_page_size(Arc::new(mock_api), 25);

        store.set_search_query("bob");
        store.clear();

        assert_eq!(store.state().cursor, MemberCursor::default().with_limit(25));
        assert_eq!(store.page(), &ProjectMembersPage::default());
    }
}
