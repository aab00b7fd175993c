//! Builder API for creating engine configuration.

use crate::config::policy::{ConfigError, DuplicatePolicy};
use crate::config::settings::HsmConfig;

/// Builder for creating an [`HsmConfig`].
pub struct ConfigBuilder {
    config: HsmConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: HsmConfig::default(),
        }
    }

    /// Set the longest trace path a transition may have
    pub fn max_nesting(mut self, n: usize) -> Self {
        self.config.max_nesting = n;
        self
    }

    /// Set how many chained transitions one dispatch may resolve
    pub fn max_chained_transitions(mut self, n: usize) -> Self {
        self.config.max_chained_transitions = n;
        self
    }

    /// Set duplicate transition request handling
    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Keep the last `n` completed transitions
    pub fn history(mut self, n: usize) -> Self {
        self.config.history_capacity = n;
        self
    }

    pub fn build(self) -> Result<HsmConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
