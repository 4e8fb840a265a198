//! Team roster store: local state plus remote delegation.
//!
//! - [`state`] - the cursor+page aggregate and its closed mutation set
//! - [`members`] - the store owning the state and the API capability
//!
//! All state changes flow through [`state::Mutation`] and an exhaustive
//! `apply`, committed by replacing the whole aggregate. Remote operations
//! suspend only on the injected [`crate::domain::api::ProjectMembersApi`].

pub mod members;
pub mod state;

pub use members::ProjectMembersStore;
pub use state::{Mutation, ProjectMembersState};
