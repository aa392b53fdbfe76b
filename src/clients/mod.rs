//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod application_client;

pub use actor_client::*;
pub use application_client::*;
