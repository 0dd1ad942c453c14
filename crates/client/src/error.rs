//! Error types for the template client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during template management operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the cluster.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Template not found.
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid response format from the cluster.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) => true,
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// 429 and the transient 5xx gateway statuses qualify; 500 usually
    /// indicates a bug rather than a transient condition and does not.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }
}
