//! Router guard: gates every navigation transition.

use std::sync::Arc;

use crate::domain::api::AuthTokenStore;
use crate::navigation::link::NavigationLink;
use crate::navigation::routes::{DEFAULT_ROUTE_NAME, MatchedRoute, ResolvedRoute, RouteConfig};

/// Outcome of a guard check. Synchronous and total: every navigation gets
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Navigate to the given path instead.
    Redirect(String),
}

/// Decides, for every prospective navigation, whether to redirect or let
/// it proceed.
pub struct RouterGuard {
    tokens: Arc<dyn AuthTokenStore>,
}

impl RouterGuard {
    pub fn new(tokens: Arc<dyn AuthTokenStore>) -> Self {
        Self { tokens }
    }

    /// Applies the guard rules to a resolved navigation, in order:
    ///
    /// 1. any matched record requires auth and no token is stored →
    ///    redirect to login, nothing else is checked;
    /// 2. the navigation lands on a bare tab (Account, Overview) →
    ///    redirect to the tab's default sub-tab;
    /// 3. the navigation resolved to the synthetic `default` alias →
    ///    redirect to the overview's default sub-tab;
    /// 4. otherwise allow.
    pub fn check(&self, route: &ResolvedRoute) -> GuardDecision {
        if route.matched.iter().any(|record| record.requires_auth)
            && self.tokens.get().is_none()
        {
            tracing::debug!(path = %route.path, "unauthenticated navigation, redirecting to login");
            return GuardDecision::Redirect(RouteConfig::login().path().to_owned());
        }

        if lands_on_bare_tab(&route.matched, &RouteConfig::account()) {
            return GuardDecision::Redirect(
                RouteConfig::account().with(&RouteConfig::profile()).path().to_owned(),
            );
        }

        if lands_on_bare_tab(&route.matched, &RouteConfig::project_overview()) {
            return GuardDecision::Redirect(overview_details_path());
        }

        if route.name == DEFAULT_ROUTE_NAME {
            return GuardDecision::Redirect(overview_details_path());
        }

        GuardDecision::Allow
    }
}

fn overview_details_path() -> String {
    RouteConfig::project_overview()
        .with(&RouteConfig::project_details())
        .path()
        .to_owned()
}

/// True when the navigation is a tab with no sub-tab selected: the matched
/// chain is exactly two records deep (dashboard root + the tab itself) and
/// the second record is the tab in question.
///
/// Deeper chains mean a sub-tab is already selected; redirecting those
/// would loop in-tab navigation back to the default sub-tab.
fn lands_on_bare_tab(matched: &[MatchedRoute], tab: &NavigationLink) -> bool {
    matched.len() == 2 && matched[1].name == tab.name()
}
