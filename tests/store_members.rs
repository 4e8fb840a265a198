use std::sync::Arc;

use chrono::Utc;
use console_dashboard::domain::api::{
    MemberCursor, MemberOrderBy, ProjectMembersApi, SortDirection,
};
use console_dashboard::domain::entities::{ProjectId, ProjectMember};
use console_dashboard::infrastructure::InMemoryMembersApi;
use console_dashboard::store::ProjectMembersStore;

fn project() -> ProjectId {
    ProjectId::new("project-1")
}

fn emails(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

/// Store over a seeded in-memory API with the three-member roster the
/// component tests use: f1/f2/f3 with numbered example.com addresses.
fn make_store() -> ProjectMembersStore<InMemoryMembersApi> {
    let api = InMemoryMembersApi::new();
    api.seed(
        &project(),
        vec![
            ProjectMember::new("1", "First Member", "f1", "1@example.com", Utc::now()),
            ProjectMember::new("2", "Second Member", "f2", "2@example.com", Utc::now()),
            ProjectMember::new("3", "Third Member", "f3", "3@example.com", Utc::now()),
        ],
    );
    ProjectMembersStore::new(Arc::new(api))
}

#[tokio::test]
async fn test_fetch_commits_the_returned_page() {
    let mut store = make_store();

    let page = store.fetch_page(&project(), 1).await.unwrap();

    assert_eq!(page.total_items, 3);
    assert_eq!(store.page(), &page);
    assert_eq!(store.state().cursor.page, 1);
}

#[tokio::test]
async fn test_search_applies_on_the_next_fetch_only() {
    let mut store = make_store();
    store.fetch_page(&project(), 1).await.unwrap();

    store.set_search_query("f2");

    // The cursor changed, the committed page did not.
    assert_eq!(store.state().cursor.search, "f2");
    assert_eq!(store.page().members.len(), 3);

    let page = store.fetch_page(&project(), 1).await.unwrap();
    assert_eq!(page.members.len(), 1);
    assert_eq!(page.members[0].email, "2@example.com");
}

#[tokio::test]
async fn test_sort_field_and_direction_drive_the_query() {
    let mut store = make_store();

    store.set_order(MemberOrderBy::Email);
    store.set_order_direction(SortDirection::Descending);
    let page = store.fetch_page(&project(), 1).await.unwrap();

    let got: Vec<&str> = page.members.iter().map(|m| m.email.as_str()).collect();
    assert_eq!(got, ["3@example.com", "2@example.com", "1@example.com"]);
}

#[tokio::test]
async fn test_selection_scenario() {
    let mut store = make_store();
    store.fetch_page(&project(), 1).await.unwrap();

    store.toggle_selection("2");
    let selected: Vec<String> = store
        .selected_members()
        .iter()
        .map(|m| m.id.clone())
        .collect();
    assert_eq!(selected, ["2"]);

    store.toggle_selection("2");
    assert!(store.selected_members().is_empty());
}

#[tokio::test]
async fn test_selection_does_not_survive_a_refetch() {
    let mut store = make_store();
    store.fetch_page(&project(), 1).await.unwrap();
    store.toggle_selection("1");

    // The page is replaced wholesale; selection is transient UI state.
    store.fetch_page(&project(), 1).await.unwrap();

    assert!(store.selected_members().is_empty());
}

#[tokio::test]
async fn test_add_members_shows_up_on_refetch() {
    let mut store = make_store();

    store
        .add_members(&project(), &emails(&["4@example.com"]))
        .await
        .unwrap();
    let page = store.fetch_page(&project(), 1).await.unwrap();

    assert_eq!(page.total_items, 4);
    assert!(page.members.iter().any(|m| m.email == "4@example.com"));
}

#[tokio::test]
async fn test_delete_members_requires_a_refetch_to_show() {
    let mut store = make_store();
    store.fetch_page(&project(), 1).await.unwrap();

    store
        .delete_members(&project(), &emails(&["2@example.com"]))
        .await
        .unwrap();

    // Deletion never touches local state.
    assert_eq!(store.page().members.len(), 3);

    let page = store.fetch_page(&project(), 1).await.unwrap();
    assert_eq!(page.total_items, 2);
    assert!(page.members.iter().all(|m| m.email != "2@example.com"));
}

#[tokio::test]
async fn test_duplicate_invite_error_propagates_and_leaves_state_alone() {
    let mut store = make_store();
    store.fetch_page(&project(), 1).await.unwrap();
    let before = store.state().clone();

    let err = store
        .add_members(&project(), &emails(&["1@example.com"]))
        .await
        .unwrap_err();

    assert_eq!(err.details["email"], "1@example.com");
    assert_eq!(store.state(), &before);
}

#[tokio::test]
async fn test_page_changes_route_through_the_cursor() {
    let api = InMemoryMembersApi::new();
    let invited: Vec<String> = (0..5).map(|n| format!("user{n}@example.com")).collect();
    api.add(&project(), &invited).await.unwrap();

    let mut store = ProjectMembersStore::with_page_size(Arc::new(api), 2);

    let first = store.fetch_page(&project(), 1).await.unwrap();
    assert_eq!(first.members.len(), 2);
    assert_eq!(first.total_pages, 3);

    let last = store.fetch_page(&project(), 3).await.unwrap();
    assert_eq!(last.members.len(), 1);
    assert_eq!(store.state().cursor.page, 3);
    assert_eq!(store.page().page, 3);
}

#[tokio::test]
async fn test_clear_resets_the_whole_module() {
    let mut store = make_store();
    store.fetch_page(&project(), 1).await.unwrap();
    store.set_search_query("f1");
    store.toggle_selection("1");

    store.clear();

    assert_eq!(store.state().cursor, MemberCursor::default());
    assert!(store.page().members.is_empty());
    assert!(store.selected_members().is_empty());
}
