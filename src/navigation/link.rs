//! Navigation link value object.

use serde::Serialize;

/// A reachable UI location: route path plus logical route name.
///
/// Links are immutable after construction; composing a child onto a parent
/// yields a new link rather than modifying either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    path: String,
    name: String,
}

impl NavigationLink {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Composes a child path onto this link, producing the full path for
    /// navigation: `/account` with `profile` yields `/account/profile`.
    ///
    /// The result keeps the child's name, since that is the route actually
    /// being navigated to.
    pub fn with(&self, child: &NavigationLink) -> NavigationLink {
        let path = format!(
            "{}/{}",
            self.path.trim_end_matches('/'),
            child.path.trim_start_matches('/')
        );

        NavigationLink {
            path,
            name: child.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_composes_parent_and_child() {
        let account = NavigationLink::new("/account", "Account");
        let profile = NavigationLink::new("profile", "Profile");

        let composed = account.with(&profile);

        assert_eq!(composed.path(), "/account/profile");
        assert_eq!(composed.name(), "Profile");
    }

    #[test]
    fn test_with_never_doubles_slashes() {
        let root = NavigationLink::new("/", "Root");
        let login = NavigationLink::new("/login", "Login");

        assert_eq!(root.with(&login).path(), "/login");

        let trailing = NavigationLink::new("/account/", "Account");
        let child = NavigationLink::new("profile", "Profile");
        assert_eq!(trailing.with(&child).path(), "/account/profile");
    }
}
