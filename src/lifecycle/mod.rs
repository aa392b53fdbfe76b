//! Startup, wiring and shutdown.
//!
//! - [`PortalSystem`] - spawns the session store and application book and hands out a [`PortalContext`](crate::views::PortalContext)
//! - [`setup_tracing`] - installs the log subscriber

pub mod portal_system;
pub mod tracing;

pub use portal_system::*;
pub use self::tracing::setup_tracing;
