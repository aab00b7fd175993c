//! Errors raised while declaring a state table.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when declaring states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("State '{state}' names parent {parent}, which is not declared yet. Declare parents before children")]
    ParentNotDeclared { state: &'static str, parent: StateId },

    #[error("State '{state}' declared as {found}, but the next free slot is {expected}")]
    OutOfOrder {
        state: &'static str,
        expected: StateId,
        found: StateId,
    },

    #[error("State table is full ({max} states)")]
    TooManyStates { max: usize },
}
