//! Core entities of the dashboard domain.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`ProjectMember`] - a user's membership in a project
//! - [`ProjectId`] - opaque identifier of the selected project

pub mod member;
pub mod project;

pub use member::ProjectMember;
pub use project::ProjectId;
