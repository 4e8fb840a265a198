//! Roster state aggregate and its mutation set.

use crate::domain::api::{
    MemberCursor, MemberOrderBy, ProjectMembersPage, SortDirection,
};
use crate::domain::entities::ProjectMember;
use serde::Serialize;

/// A single state transition of the roster.
///
/// Every change to [`ProjectMembersState`] goes through exactly one of
/// these variants; there is no other mutation path.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Commit a freshly fetched page, replacing the previous one.
    SetPage(ProjectMembersPage),
    /// Move the cursor to the given page number.
    SetCursorPage(u32),
    /// Replace the cursor's search string.
    SetSearchQuery(String),
    /// Replace the cursor's sort field.
    SetOrder(MemberOrderBy),
    /// Replace the cursor's sort direction.
    SetOrderDirection(SortDirection),
    /// Flip the selection flag of the member with the given id.
    ToggleSelection(String),
    /// Deselect every member on the current page.
    ClearSelection,
    /// Reset cursor and page to fresh defaults (project switch, logout).
    Clear,
}

/// The roster's full local state: one cursor plus one materialized page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectMembersState {
    pub cursor: MemberCursor,
    pub page: ProjectMembersPage,
}

impl ProjectMembersState {
    /// Fresh state with a non-default page size on the cursor.
    pub fn with_page_size(limit: u32) -> Self {
        Self {
            cursor: MemberCursor::default().with_limit(limit),
            ..Self::default()
        }
    }

    /// Applies a mutation, producing the next state.
    ///
    /// The previous state is left untouched; callers commit by replacing
    /// their copy with the returned value.
    #[must_use]
    pub fn apply(&self, mutation: Mutation) -> Self {
        let mut next = self.clone();

        match mutation {
            Mutation::SetPage(page) => next.page = page,
            Mutation::SetCursorPage(page) => next.cursor.page = page,
            Mutation::SetSearchQuery(search) => next.cursor.search = search,
            Mutation::SetOrder(order) => next.cursor.order = order,
            Mutation::SetOrderDirection(direction) => next.cursor.direction = direction,
            Mutation::ToggleSelection(member_id) => {
                for member in &mut next.page.members {
                    if member.id == member_id {
                        member.is_selected = !member.is_selected;
                    }
                }
            }
            Mutation::ClearSelection => {
                for member in &mut next.page.members {
                    member.is_selected = false;
                }
            }
            Mutation::Clear => {
                // Page size is configuration, not user state: it survives
                // the reset.
                next = Self::with_page_size(self.cursor.limit);
            }
        }

        next
    }

    /// Members currently marked for a bulk action.
    ///
    /// Recomputed on every access so it can never drift from the page.
    pub fn selected_members(&self) -> Vec<&ProjectMember> {
        self.page
            .members
            .iter()
            .filter(|member| member.is_selected)
            .collect()
    }
}
