//! Error types for GitHub API operations.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when interacting with the GitHub API.
///
/// None of these are recovered locally except where the adapter documents a
/// fallback; they propagate to the caller unmodified, with no retry and no
/// backoff.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// API returned a non-success status.
    #[error("GitHub API error ({status}) for {path}: {message}")]
    Api {
        status: u16,
        path: String,
        message: String,
    },

    /// Response body did not match the expected schema.
    #[error("failed to decode GitHub response for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Requested position does not exist in the fetched list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
}
