use super::models::ApiResponse;
use thiserror::Error;

/// Failures of a single provider call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a valid envelope. `body` keeps the raw text.
    #[error("failed to decode provider response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("{message}")]
    Provider {
        message: String,
        response: Box<ApiResponse>,
    },
}

impl ApiError {
    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Decode { body, .. } => Some(body),
            ApiError::Provider { response, .. } => Some(&response.json),
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
