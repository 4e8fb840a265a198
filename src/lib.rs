//! # Console Dashboard
//!
//! Client-side core of a cloud storage account-management dashboard:
//! typed navigation with an auth-aware router guard, and a team roster
//! store over a remote membership API.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - entities and the capability traits
//!   this crate consumes (membership API, token store)
//! - **Store Layer** ([`store`]) - the roster state container and its
//!   closed mutation set
//! - **Navigation Layer** ([`navigation`]) - route table, link
//!   composition, and the router guard
//! - **Infrastructure Layer** ([`infrastructure`]) - in-memory capability
//!   implementations for embedding and tests
//!
//! ## Control Flow
//!
//! The UI resolves a navigation attempt through [`navigation::RouteTable`]
//! and asks [`navigation::RouterGuard`] whether to proceed or redirect.
//! Separately, the UI drives [`store::ProjectMembersStore`] intents, which
//! delegate remote operations to the injected
//! [`domain::api::ProjectMembersApi`] and commit results into local state
//! the UI re-renders from.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use console_dashboard::config::Config;
//! use console_dashboard::infrastructure::{InMemoryMembersApi, InMemoryTokenStore};
//! use console_dashboard::navigation::GuardDecision;
//! use console_dashboard::state::ConsoleState;
//!
//! let config = Config::default();
//! let state = ConsoleState::new(
//!     &config,
//!     Arc::new(InMemoryMembersApi::new()),
//!     Arc::new(InMemoryTokenStore::new()),
//! );
//!
//! // Unauthenticated dashboard navigation bounces to login.
//! assert_eq!(
//!     state.check_navigation("/project-members"),
//!     GuardDecision::Redirect("/login".to_string()),
//! );
//! ```
//!
//! ## Configuration
//!
//! Runtime tunables are loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod navigation;
pub mod state;
pub mod store;

pub use error::ApiError;
pub use state::ConsoleState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::api::{
        AuthTokenStore, MemberCursor, MemberOrderBy, ProjectMembersApi, ProjectMembersPage,
        SortDirection,
    };
    pub use crate::domain::entities::{ProjectId, ProjectMember};
    pub use crate::error::ApiError;
    pub use crate::navigation::{GuardDecision, NavigationLink, RouteConfig, RouteTable, RouterGuard};
    pub use crate::state::ConsoleState;
    pub use crate::store::{Mutation, ProjectMembersState, ProjectMembersStore};
}
