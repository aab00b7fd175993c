//! Engine limits and policies for one machine.

use crate::config::policy::{ConfigError, DuplicatePolicy};
use crate::core::MAX_STATE_NESTING;
use serde::{Deserialize, Serialize};

/// Default bound on transitions chained from Start handlers in one dispatch.
pub const DEFAULT_MAX_CHAINED_TRANSITIONS: usize = 32;

/// Largest number of transition records a machine may retain.
pub const MAX_HISTORY_CAPACITY: usize = 65_536;

/// Limits and policies applied by an [`Hsm`](crate::engine::Hsm).
///
/// Missing fields in a configuration document take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsmConfig {
    pub(crate) max_nesting: usize,
    pub(crate) max_chained_transitions: usize,
    pub(crate) duplicate_policy: DuplicatePolicy,
    pub(crate) history_capacity: usize,
}

impl Default for HsmConfig {
    fn default() -> Self {
        Self {
            max_nesting: MAX_STATE_NESTING,
            max_chained_transitions: DEFAULT_MAX_CHAINED_TRANSITIONS,
            duplicate_policy: DuplicatePolicy::KeepFirst,
            history_capacity: 0,
        }
    }
}

impl HsmConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// ```
    /// use hsm_engine::config::{DuplicatePolicy, HsmConfig};
    ///
    /// let config = HsmConfig::from_json(r#"{ "duplicate_policy": "replace" }"#).unwrap();
    /// assert_eq!(config.duplicate_policy(), DuplicatePolicy::Replace);
    /// assert_eq!(config.max_nesting(), 10);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HsmConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting == 0 || self.max_nesting > MAX_STATE_NESTING {
            return Err(ConfigError::NestingOutOfRange {
                requested: self.max_nesting,
                max: MAX_STATE_NESTING,
            });
        }
        if self.max_chained_transitions == 0 {
            return Err(ConfigError::ZeroChainLimit);
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryTooLarge {
                requested: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        Ok(())
    }

    /// Longest trace path (states entered below the LCA) a transition may have.
    pub fn max_nesting(&self) -> usize {
        self.max_nesting
    }

    /// Transitions one dispatch may resolve before giving up.
    pub fn max_chained_transitions(&self) -> usize {
        self.max_chained_transitions
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Number of completed transitions kept in the history; zero disables it.
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }
}
