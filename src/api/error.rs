//! Portal API error types.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. `body` is the raw payload exactly as received.
    #[error("Server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("User data missing from response")]
    MissingUser,
}

impl ApiError {
    /// The `message` field of a JSON error body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Server { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_owned)
    }

    /// The raw error payload, when the server sent a non-empty one.
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            ApiError::Server { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }
}
