//! # Application Book
//!
//! In-memory record of the applications submitted during this session.
//! Applications are never sent to the portal API; they live here until the
//! process exits.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Application`]
//! - [`error`] - [`ApplicationError`]
//! - [`actions`] - [`ApplicationAction`] for review decisions
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ApplicationClient;
use crate::framework::ResourceActor;
use crate::model::Application;

/// Creates a new application actor and its client.
pub fn new() -> (ResourceActor<Application>, ApplicationClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ApplicationClient::new(generic_client))
}
