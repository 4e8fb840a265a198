//! Static route registry and nested route table.

use crate::navigation::link::NavigationLink;

/// Name of the synthetic alias record that maps the bare dashboard root
/// onto the overview tab.
pub const DEFAULT_ROUTE_NAME: &str = "default";

/// Name of the catch-all record unknown paths resolve to.
pub const NOT_FOUND_ROUTE_NAME: &str = "404";

/// Registry of every reachable route.
///
/// Other parts of the UI build their links from these constructors, so
/// path strings live in exactly one place.
pub struct RouteConfig;

impl RouteConfig {
    // root paths
    pub fn root() -> NavigationLink {
        NavigationLink::new("/", "Root")
    }
    pub fn login() -> NavigationLink {
        NavigationLink::new("/login", "Login")
    }
    pub fn register() -> NavigationLink {
        NavigationLink::new("/register", "Register")
    }
    pub fn forgot_password() -> NavigationLink {
        NavigationLink::new("/forgot-password", "Forgot Password")
    }
    pub fn account() -> NavigationLink {
        NavigationLink::new("/account", "Account")
    }
    pub fn project_overview() -> NavigationLink {
        NavigationLink::new("/project-overview", "Overview")
    }
    pub fn team() -> NavigationLink {
        NavigationLink::new("/project-members", "Team")
    }
    pub fn api_keys() -> NavigationLink {
        NavigationLink::new("/api-keys", "API Keys")
    }
    pub fn buckets() -> NavigationLink {
        NavigationLink::new("/buckets", "Buckets")
    }

    // child paths
    pub fn project_details() -> NavigationLink {
        NavigationLink::new("details", "Project Details")
    }
    pub fn billing_history() -> NavigationLink {
        NavigationLink::new("billing-history", "Billing History")
    }
    pub fn usage_report() -> NavigationLink {
        NavigationLink::new("usage-report", "Usage Report")
    }
    pub fn payment_methods() -> NavigationLink {
        NavigationLink::new("payment-methods", "Payment Methods")
    }
    pub fn profile() -> NavigationLink {
        NavigationLink::new("profile", "Profile")
    }
}

/// One record of the route tree.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    link: NavigationLink,
    requires_auth: bool,
    children: Vec<RouteRecord>,
}

impl RouteRecord {
    fn new(link: NavigationLink) -> Self {
        Self {
            link,
            requires_auth: false,
            children: Vec::new(),
        }
    }

    fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    fn with_children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

/// One record of a resolved navigation's matched chain.
///
/// Carries exactly what the guard inspects: the record's name and its auth
/// requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub name: String,
    pub requires_auth: bool,
}

/// A prospective navigation after route matching.
///
/// `matched` lists every record on the path from the tree root down to the
/// resolved record, ancestors included; its length is a structural
/// property the guard relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub path: String,
    pub name: String,
    pub matched: Vec<MatchedRoute>,
}

/// The console's nested route tree.
pub struct RouteTable {
    routes: Vec<RouteRecord>,
}

impl RouteTable {
    /// Builds the full dashboard route tree.
    ///
    /// Everything under the dashboard root requires authentication; the
    /// login, register and password-reset routes do not. The root also
    /// carries a synthetic `default` alias so that visiting `/` resolves
    /// two records deep, like any other tab.
    pub fn standard() -> Self {
        let routes = vec![
            RouteRecord::new(RouteConfig::login()),
            RouteRecord::new(RouteConfig::register()),
            RouteRecord::new(RouteConfig::forgot_password()),
            RouteRecord::new(RouteConfig::root())
                .requires_auth()
                .with_children(vec![
                    RouteRecord::new(RouteConfig::account()).with_children(vec![
                        RouteRecord::new(RouteConfig::profile()),
                        RouteRecord::new(RouteConfig::payment_methods()),
                        RouteRecord::new(RouteConfig::billing_history()),
                    ]),
                    RouteRecord::new(RouteConfig::project_overview()).with_children(vec![
                        RouteRecord::new(RouteConfig::usage_report()),
                        RouteRecord::new(RouteConfig::project_details()),
                    ]),
                    RouteRecord::new(NavigationLink::new("/", DEFAULT_ROUTE_NAME)),
                    RouteRecord::new(RouteConfig::team()),
                    RouteRecord::new(RouteConfig::api_keys()),
                    RouteRecord::new(RouteConfig::buckets()),
                ]),
        ];

        Self { routes }
    }

    /// Resolves a path to its matched route chain.
    ///
    /// Prefers the deepest matching record, so `/` lands on the `default`
    /// alias (chain length 2) rather than on the bare root. Unknown paths
    /// resolve to the catch-all record; trailing slashes are tolerated.
    pub fn resolve(&self, path: &str) -> ResolvedRoute {
        let target = normalize(path);

        if let Some(chain) = find_chain(&self.routes, "", &target) {
            let matched: Vec<MatchedRoute> = chain
                .iter()
                .map(|record| MatchedRoute {
                    name: record.link.name().to_owned(),
                    requires_auth: record.requires_auth,
                })
                .collect();
            let name = matched
                .last()
                .map(|m| m.name.clone())
                .unwrap_or_default();

            return ResolvedRoute {
                path: target,
                name,
                matched,
            };
        }

        ResolvedRoute {
            path: target,
            name: NOT_FOUND_ROUTE_NAME.to_owned(),
            matched: vec![MatchedRoute {
                name: NOT_FOUND_ROUTE_NAME.to_owned(),
                requires_auth: false,
            }],
        }
    }
}

fn normalize(path: &str) -> String {
    let mut normalized = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        // Absolute child paths stand on their own, as the tab routes under
        // the dashboard root do.
        return normalize(child);
    }

    format!("{}/{}", parent.trim_end_matches('/'), child)
}

/// Depth-first search for the deepest record whose full path equals the
/// target; returns the chain from tree root to that record.
fn find_chain<'a>(
    records: &'a [RouteRecord],
    parent_path: &str,
    target: &str,
) -> Option<Vec<&'a RouteRecord>> {
    for record in records {
        let full = join(parent_path, record.link.path());

        if let Some(mut chain) = find_chain(&record.children, &full, target) {
            chain.insert(0, record);
            return Some(chain);
        }

        if full == target {
            return Some(vec![record]);
        }
    }

    None
}
