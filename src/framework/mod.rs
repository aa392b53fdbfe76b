//! Generic actor framework for in-memory record collections.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a collection
//! - [`ResourceClient`] - Type-safe handle for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See the [`mock`] module for testing clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
