//! Builder pattern for the yield engine.

use std::sync::Arc;

use apriority_traits::DataProvider;

use crate::config::{EngineConfig, Validate};
use crate::error::EngineError;
use crate::YieldEngine;

/// Builder for constructing a [`YieldEngine`].
pub struct YieldEngineBuilder {
    config: Option<EngineConfig>,
    provider: Option<Arc<DataProvider>>,
}

impl YieldEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            provider: None,
        }
    }

    /// Set the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the collaborators.
    pub fn with_data_provider(mut self, provider: Arc<DataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the yield engine.
    pub fn build(self) -> Result<YieldEngine, EngineError> {
        let config = self.config.unwrap_or_default();
        config.validate_or_error()?;

        let provider = self
            .provider
            .ok_or_else(|| EngineError::ConfigError("data provider not configured".into()))?;

        Ok(YieldEngine::new(config, provider))
    }
}

impl Default for YieldEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
