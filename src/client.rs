//! Shared error type for the outbound HTTP clients.

use thiserror::Error;

/// Errors that can occur while talking to an upstream provider.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status code of the upstream response, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status(code) => Some(*code),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
