//! Error types for the Apple Music API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Apple Music API.
#[derive(Debug, Error)]
pub enum AppleMusicError {
    /// The base URL and endpoint path did not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status code outside the endpoint's contract.
    ///
    /// Common codes:
    /// - `401` — developer token rejected
    /// - `403` — user token missing, expired, or lacking a subscription
    /// - `404` — unknown resource id
    /// - `500` — upstream failure
    #[error("unexpected HTTP status {code}")]
    UnexpectedStatus {
        /// HTTP status code observed on the response.
        code: u16,
    },

    /// A user-scoped endpoint was called without a `Music-User-Token`.
    #[error("no user token configured")]
    MissingUserToken,

    /// The catalog returned an empty result for a single-song lookup.
    #[error("song not found: {0}")]
    SongNotFound(String),

    /// Failed to encode a request body or decode a response body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppleMusicError {
    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code } => Some(*code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convenience alias for `Result<T, AppleMusicError>`.
pub type Result<T> = std::result::Result<T, AppleMusicError>;
