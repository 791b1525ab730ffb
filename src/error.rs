//! Error types for the relay, the refresher, the token store and config.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the token store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures of a single now-playing lookup.
///
/// Every variant ends up as a 500 at the HTTP boundary, see
/// [`crate::api::now_playing`].
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("The access token is not available.")]
    TokenUnavailable,

    /// Upstream answered with a non-2xx status. Displays the reason phrase.
    #[error("{}", .0.canonical_reason().unwrap_or(.0.as_str()))]
    UpstreamStatus(StatusCode),

    #[error("The response from Spotify was not acceptable")]
    UpstreamBodyUnacceptable,

    #[error("Request to Spotify failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the refresh-token grant.
#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Token request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token exchange rejected with {status}: {reason}")]
    Rejected { status: StatusCode, reason: String },

    #[error("Token exchange response did not contain an access token")]
    MissingToken,

    #[error("Token exchange response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}
