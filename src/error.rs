//! Top-level error type.

use crate::api::ApiError;
use crate::application_actor::ApplicationError;
use crate::session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Anything that can stop the client from starting or shutting down cleanly.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
