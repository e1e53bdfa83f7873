//! Engine error types.

use thiserror::Error;

use apriority_core::error::ApriorityError;
use apriority_traits::TraitError;

use crate::config::ConfigError;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Collection, listing request or history not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Wallet does not hold an item of the collection
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Request rejected before reaching a collaborator
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Yield calculation failed
    #[error(transparent)]
    Yield(#[from] ApriorityError),

    /// Collaborator could not serve the request
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// Collaborator call exceeded the fetch timeout
    #[error("timeout")]
    Timeout,

    /// Collaborator storage failed
    #[error("storage error: {0}")]
    StorageError(String),
}

impl EngineError {
    /// Returns true if the error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true for upstream failures a later attempt may not repeat.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout)
    }
}

impl From<TraitError> for EngineError {
    fn from(e: TraitError) -> Self {
        match e {
            TraitError::NotFound(what) => EngineError::NotFound(what),
            TraitError::InvalidInput(reason) => EngineError::InvalidInput(reason),
            TraitError::Timeout => EngineError::Timeout,
            TraitError::Unavailable(reason) => EngineError::Unavailable(reason),
            TraitError::RateLimited => EngineError::Unavailable("rate limited".into()),
            TraitError::ParseError(_) | TraitError::IoError(_) | TraitError::StorageError(_) => {
                EngineError::StorageError(e.to_string())
            }
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        EngineError::ConfigError(e.to_string())
    }
}
