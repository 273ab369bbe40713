//! Error types for the Clarity SDK.

/// Result type for SDK operations.
pub type ClarityResult<T> = Result<T, ClarityError>;

/// Error types that can occur when calling the Clarity API.
#[derive(Debug, thiserror::Error)]
pub enum ClarityError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("Clarity API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClarityError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}
