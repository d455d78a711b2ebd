//! Journey planner client error types.

/// Errors from the SL journey planner client.
#[derive(Debug, thiserror::Error)]
pub enum SlError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be decoded
    #[error("malformed response: {message}")]
    Json { message: String },

    /// The service reported one or more error messages instead of results
    #[error("{0}")]
    Messages(String),
}

impl SlError {
    /// Whether the service itself reported the failure, as opposed to a
    /// transport or decoding problem.
    pub fn is_service_message(&self) -> bool {
        matches!(self, SlError::Messages(_))
    }
}
