//! Policies and configuration errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when a handler requests a transition while another one is
/// already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first target and refuse the new request with
    /// [`HsmError::DuplicateTransition`](crate::engine::HsmError::DuplicateTransition).
    #[default]
    KeepFirst,

    /// Replace the pending target with the new one and log a warning.
    Replace,
}

/// Errors that can occur when building or loading an [`HsmConfig`](super::HsmConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Nesting limit {requested} is out of range (1..={max})")]
    NestingOutOfRange { requested: usize, max: usize },

    #[error("Chained transition limit must be at least 1")]
    ZeroChainLimit,

    #[error("History capacity {requested} exceeds the maximum of {max} records")]
    HistoryTooLarge { requested: usize, max: usize },

    #[error("Invalid configuration document: {0}")]
    Parse(String),
}
