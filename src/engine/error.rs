//! Errors reported by a running machine.

use crate::config::ConfigError;
use crate::core::StateId;
use thiserror::Error;

/// Conditions detected while constructing, starting or driving an
/// [`Hsm`](super::Hsm).
///
/// None of these are retried by the engine. A failed transition leaves the
/// machine in the last state it fully entered, with no transition pending.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HsmError {
    #[error("State {state} is not part of the state table")]
    UnknownState { state: StateId },

    #[error("Top state {state} has parent {parent}; a machine must be rooted at a root state")]
    TopNotRoot { state: StateId, parent: StateId },

    #[error("Transition target {target} is not part of the state table")]
    InvalidTarget { target: StateId },

    #[error("Transition to {requested} refused: transition to {pending} is already pending")]
    DuplicateTransition { pending: StateId, requested: StateId },

    #[error("Transition to {requested} refused: Entry and Exit handlers cannot request transitions")]
    TransitionInProgress { requested: StateId },

    #[error("Transition to {requested} refused: no message is being dispatched")]
    OutsideDispatch { requested: StateId },

    #[error("Transition path exceeds the nesting limit of {limit} states")]
    NestingLimitExceeded { limit: usize },

    #[error("States {from} and {to} have no common ancestor")]
    NoCommonAncestor { from: StateId, to: StateId },

    #[error("More than {limit} chained transitions in one dispatch")]
    ChainLimitExceeded { limit: usize },

    #[error("Machine has not been started")]
    NotStarted,

    #[error("Machine has already been started")]
    AlreadyStarted,

    #[error("Machine re-entered from one of its own state handlers")]
    Reentrant,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
