//! In-memory implementation of the remote membership API.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::api::{MemberCursor, MemberOrderBy, ProjectMembersApi, ProjectMembersPage, SortDirection};
use crate::domain::entities::{ProjectId, ProjectMember};
use crate::error::ApiError;

/// In-process membership API over a mutex-held roster per project.
///
/// Behaves like the remote side as far as this crate can observe it:
/// duplicate invitations and removals of unknown members fail, queries
/// honor the full cursor (search, sort, pagination) and report totals.
/// Used by embedding hosts without a backend and by the integration tests.
#[derive(Default)]
pub struct InMemoryMembersApi {
    inner: Mutex<Rosters>,
}

#[derive(Default)]
struct Rosters {
    members: HashMap<ProjectId, Vec<ProjectMember>>,
    next_id: u64,
}

impl InMemoryMembersApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a project's roster, bypassing the invitation flow.
    pub fn seed(&self, project_id: &ProjectId, members: Vec<ProjectMember>) {
        let mut inner = self.inner.lock().expect("roster lock poisoned");
        // Keep later invitations from minting ids that collide with the
        // seeded ones.
        inner.next_id += members.len() as u64;
        inner
            .members
            .entry(project_id.clone())
            .or_default()
            .extend(members);
    }
}

#[async_trait]
impl ProjectMembersApi for InMemoryMembersApi {
    async fn add(&self, project_id: &ProjectId, emails: &[String]) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().expect("roster lock poisoned");
        let roster = inner.members.entry(project_id.clone()).or_default();

        for email in emails {
            if roster.iter().any(|member| member.email == *email) {
                return Err(ApiError::remote(
                    "member is already on the project",
                    json!({ "project_id": project_id, "email": email }),
                ));
            }
        }

        let mut next_id = inner.next_id;
        let roster = inner.members.entry(project_id.clone()).or_default();
        for email in emails {
            next_id += 1;
            let local = email.split('@').next().unwrap_or(email.as_str());
            roster.push(ProjectMember::new(
                next_id.to_string(),
                local,
                "",
                email.clone(),
                Utc::now(),
            ));
        }
        inner.next_id = next_id;

        Ok(())
    }

    async fn delete(&self, project_id: &ProjectId, emails: &[String]) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().expect("roster lock poisoned");
        let roster = inner.members.entry(project_id.clone()).or_default();

        for email in emails {
            if !roster.iter().any(|member| member.email == *email) {
                return Err(ApiError::remote(
                    "member not found on the project",
                    json!({ "project_id": project_id, "email": email }),
                ));
            }
        }

        roster.retain(|member| !emails.contains(&member.email));

        Ok(())
    }

    async fn get(
        &self,
        project_id: &ProjectId,
        cursor: &MemberCursor,
    ) -> Result<ProjectMembersPage, ApiError> {
        if cursor.page == 0 {
            return Err(ApiError::remote(
                "page numbers start at 1",
                json!({ "page": cursor.page }),
            ));
        }
        if cursor.limit == 0 {
            return Err(ApiError::remote(
                "page size must be positive",
                json!({ "limit": cursor.limit }),
            ));
        }

        let inner = self.inner.lock().expect("roster lock poisoned");
        let roster = inner.members.get(project_id);

        let needle = cursor.search.to_lowercase();
        let mut filtered: Vec<ProjectMember> = roster
            .map(|members| {
                members
                    .iter()
                    .filter(|member| matches_search(member, &needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        filtered.sort_by(|a, b| {
            let ordering = compare(a, b, cursor.order);
            match cursor.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let total_items = filtered.len() as i64;
        let total_pages = filtered.len().div_ceil(cursor.limit as usize) as u32;
        let offset = (cursor.page - 1) as usize * cursor.limit as usize;
        let members: Vec<ProjectMember> = filtered
            .into_iter()
            .skip(offset)
            .take(cursor.limit as usize)
            .collect();

        Ok(ProjectMembersPage {
            members,
            page: cursor.page,
            page_size: cursor.limit,
            total_items,
            total_pages,
        })
    }
}

fn matches_search(member: &ProjectMember, needle: &str) -> bool {
    needle.is_empty()
        || member.full_name.to_lowercase().contains(needle)
        || member.short_name.to_lowercase().contains(needle)
        || member.email.to_lowercase().contains(needle)
}

fn compare(a: &ProjectMember, b: &ProjectMember, order: MemberOrderBy) -> Ordering {
    match order {
        MemberOrderBy::Name => a
            .full_name
            .to_lowercase()
            .cmp(&b.full_name.to_lowercase())
            .then_with(|| a.email.cmp(&b.email)),
        MemberOrderBy::Email => a.email.cmp(&b.email),
        MemberOrderBy::CreatedAt => a.joined_at.cmp(&b.joined_at),
    }
}
