//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration document could not be parsed.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {0:?}")]
    MultipleValidationErrors(Vec<ValidationError>),
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Returns every violated rule, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> Result<(), ConfigError> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine name, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Timeout applied to every collaborator call, in milliseconds
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Maximum metadata fetches in flight while building a list view
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// List views drop collections without a floor price instead of failing
    #[serde(default = "default_true")]
    pub skip_unpriced_collections: bool,

    /// Full collection views carry payment history and average APR
    #[serde(default = "default_true")]
    pub include_payment_history: bool,

    /// Comments are listed newest first
    #[serde(default = "default_true")]
    pub comments_newest_first: bool,

    /// Maximum comment length in characters
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
}

fn default_name() -> String {
    "apriority".to_string()
}

fn default_fetch_timeout_ms() -> u64 {
    10_000
}

fn default_max_concurrent_fetches() -> usize {
    8
}

fn default_true() -> bool {
    true
}

fn default_max_comment_length() -> usize {
    1_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            skip_unpriced_collections: true,
            include_payment_history: true,
            comments_newest_first: true,
            max_comment_length: default_max_comment_length(),
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Deserialization(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Collaborator call timeout.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "must not be empty"));
        }
        if self.fetch_timeout_ms == 0 {
            errors.push(ValidationError::new("fetch_timeout_ms", "must be at least 1"));
        }
        if self.max_concurrent_fetches == 0 {
            errors.push(ValidationError::new(
                "max_concurrent_fetches",
                "must be at least 1",
            ));
        }
        if self.max_comment_length == 0 {
            errors.push(ValidationError::new("max_comment_length", "must be at least 1"));
        }
        errors
    }
}
