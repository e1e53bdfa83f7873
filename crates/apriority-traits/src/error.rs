//! Error types for collaborator operations.

use thiserror::Error;

/// Failure reported by a collection store, price oracle or community store.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Requested record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Upstream service (oracle, file host, database) could not be reached
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// Upstream call did not answer in time
    #[error("upstream timed out")]
    Timeout,

    /// Upstream is throttling requests
    #[error("rate limited by upstream")]
    RateLimited,

    /// Stored or fetched document could not be decoded
    #[error("parse error: {0}")]
    ParseError(String),

    /// Local file access failed
    #[error("IO error: {0}")]
    IoError(String),

    /// Listing or comment store failed
    #[error("storage error: {0}")]
    StorageError(String),

    /// Request rejected by the collaborator
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TraitError {
    /// Returns true for failures a later attempt may not repeat.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout | Self::RateLimited)
    }
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for TraitError {
    fn from(e: serde_json::Error) -> Self {
        TraitError::ParseError(e.to_string())
    }
}
