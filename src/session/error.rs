//! Error types for the session layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session store closed")]
    StoreClosed,

    #[error("Session store dropped response channel")]
    StoreDropped,

    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Token file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
