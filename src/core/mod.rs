//! Core state machine types.
//!
//! This module contains the static building blocks of a machine:
//! - State descriptors and the handler contract
//! - Messages and the engine's lifecycle notifications
//! - The state table with ancestor and LCA queries
//! - The bounded trace path and transition history

mod history;
mod message;
mod state;
mod trace;
mod tree;

pub use history::{TransitionHistory, TransitionRecord};
pub use message::{
    Address, Lifecycle, Message, ParamOverflow, ParamSlot, ENTRY, EXIT, HSM_OWNER_ID, LID_ENTRY,
    LID_EXIT, LID_START, MSG_MAX_PARAM_SLOTS, START,
};
pub use state::{Handler, Response, StateDescriptor, StateId};
pub use trace::{TracePath, MAX_STATE_NESTING};
pub use tree::{Ancestors, StateTable};
