//! Top-level console state container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::api::{AuthTokenStore, ProjectMembersApi};
use crate::navigation::{GuardDecision, RouteTable, RouterGuard};
use crate::store::ProjectMembersStore;

/// Explicitly-owned state of the dashboard core.
///
/// Bundles the route table, the guard, and the roster store so the UI
/// layer receives a single container by reference instead of reaching for
/// ambient singletons. Capabilities are injected at construction.
pub struct ConsoleState<A: ProjectMembersApi> {
    pub routes: RouteTable,
    pub guard: RouterGuard,
    pub project_members: ProjectMembersStore<A>,
}

impl<A: ProjectMembersApi> ConsoleState<A> {
    pub fn new(config: &Config, api: Arc<A>, tokens: Arc<dyn AuthTokenStore>) -> Self {
        Self {
            routes: RouteTable::standard(),
            guard: RouterGuard::new(tokens),
            project_members: ProjectMembersStore::with_page_size(api, config.member_page_size),
        }
    }

    /// Resolves a navigation attempt and runs the guard over it.
    pub fn check_navigation(&self, path: &str) -> GuardDecision {
        self.guard.check(&self.routes.resolve(path))
    }
}
