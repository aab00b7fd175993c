//! Bounded buffer for the states between a transition target and the LCA.

use super::state::StateId;
use crate::engine::HsmError;

/// Hard capacity of a trace path; also the default nesting limit.
pub const MAX_STATE_NESTING: usize = 10;

/// States visited walking up from a transition target, target first.
///
/// The buffer never grows past its limit: [`TracePath::push`] checks the
/// limit before writing anything.
#[derive(Debug, Clone)]
pub struct TracePath {
    states: heapless::Vec<StateId, MAX_STATE_NESTING>,
    limit: usize,
}

impl TracePath {
    /// Create an empty path holding at most `limit` states.
    ///
    /// `limit` is clamped to [`MAX_STATE_NESTING`].
    pub fn with_limit(limit: usize) -> Self {
        TracePath {
            states: heapless::Vec::new(),
            limit: limit.min(MAX_STATE_NESTING),
        }
    }

    pub fn push(&mut self, state: StateId) -> Result<(), HsmError> {
        if self.states.len() >= self.limit {
            return Err(HsmError::NestingLimitExceeded { limit: self.limit });
        }
        self.states
            .push(state)
            .map_err(|_| HsmError::NestingLimitExceeded { limit: self.limit })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// States in entry order: just below the LCA first, target last.
    pub fn entry_order(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().rev().copied()
    }
}
