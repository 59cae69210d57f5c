//! Error types for Bitbucket API operations.

use thiserror::Error;

/// Errors that can occur during Bitbucket API operations.
#[derive(Debug, Error)]
pub enum BucketError {
    /// A path segment or other caller-supplied argument is malformed.
    ///
    /// Raised synchronously, before any network I/O. Treat this as a
    /// programming error at the call site, not a runtime condition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration is missing or incomplete.
    #[error("Bitbucket configuration required: {0}")]
    ConfigMissing(String),

    /// API request failed with a non-success status.
    #[error("Bitbucket API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

/// Result type alias for Bitbucket operations.
pub type Result<T> = core::result::Result<T, BucketError>;
