//! Error types for the application book.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApplicationError {
    #[error("Application not found: {0}")]
    NotFound(String),

    /// The payload was rejected before the record was stored.
    #[error("Application validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
