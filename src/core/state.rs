//! State descriptors and the handler contract.
//!
//! A state is an immutable node in a static tree: a display name, an optional
//! parent and a handler function. States are stored in a
//! [`StateTable`](super::StateTable) and addressed by [`StateId`].

use super::message::Message;
use crate::engine::Hsm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state inside its [`StateTable`](super::StateTable).
///
/// Ids are plain copyable indices. A parent link is just another `StateId`,
/// so many children can share one parent without any ownership between them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u16);

impl StateId {
    /// Create an id from its raw table index.
    ///
    /// Mostly used by the [`state_table!`](crate::state_table) macro; ids
    /// handed out by [`StateTableBuilder`](crate::builder::StateTableBuilder)
    /// are always valid for the table that produced them.
    pub const fn from_index(index: u16) -> Self {
        StateId(index)
    }

    /// Position of this state in its table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of offering a message to a state handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Response {
    /// The message was handled here; bubbling stops.
    Consumed,

    /// Not handled by this state; offer it to the parent.
    PassToParent,
}

impl Response {
    /// Whether bubbling stops at the state that returned this.
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// State handler function.
///
/// Every state supplies exactly this one operation. The handler receives the
/// machine it runs in (to read the context or request a transition) and the
/// message being dispatched. It must not block and must not dispatch into its
/// own machine.
pub type Handler<C> = fn(&mut Hsm<C>, &Message) -> Response;

/// One declared state.
pub struct StateDescriptor<C> {
    pub(crate) name: &'static str,
    pub(crate) parent: Option<StateId>,
    pub(crate) handler: Handler<C>,
}

impl<C> StateDescriptor<C> {
    /// Diagnostic label of the state.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parent state, or `None` for a root.
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Whether this state is the root of a tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The function messages for this state are delivered to.
    pub fn handler(&self) -> Handler<C> {
        self.handler
    }
}

// Manual impls: a derive would demand `C: Clone` even though only a fn
// pointer mentions `C`.
impl<C> Clone for StateDescriptor<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for StateDescriptor<C> {}

impl<C> fmt::Debug for StateDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDescriptor")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}
