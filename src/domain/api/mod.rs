//! Capability traits for the crate's external collaborators.
//!
//! These traits define the contracts this crate consumes but does not
//! implement itself (beyond in-memory stand-ins):
//!
//! - [`ProjectMembersApi`] - the remote membership API
//! - [`AuthTokenStore`] - session token presence for the router guard
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod members_api;
pub mod token_store;

pub use members_api::{
    DEFAULT_PAGE_SIZE, FIRST_PAGE, MemberCursor, MemberOrderBy, ProjectMembersApi,
    ProjectMembersPage, SortDirection,
};
pub use token_store::AuthTokenStore;

#[cfg(test)]
pub use members_api::MockProjectMembersApi;
#[cfg(test)]
pub use token_store::MockAuthTokenStore;
