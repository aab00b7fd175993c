//! Machine instance, lifecycle and message bubbling.

use crate::config::HsmConfig;
use crate::core::{Message, StateId, StateTable, TransitionHistory, ENTRY, START};
use crate::engine::error::HsmError;
use std::fmt;
use std::sync::Arc;

/// What the machine is doing right now. Guards against re-entry and decides
/// whether transition requests are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Dispatching,
    /// Delivering Entry or Exit notifications.
    Transitioning,
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// State whose handler consumed the message, or `None` if the message
    /// bubbled past the top state.
    pub consumed_by: Option<StateId>,
    /// Transitions completed before the dispatch returned, chained ones
    /// included.
    pub transitions: usize,
}

impl DispatchOutcome {
    pub fn is_consumed(&self) -> bool {
        self.consumed_by.is_some()
    }
}

/// A running hierarchical state machine.
///
/// The machine owns the application context `C` its handlers work on and
/// shares a read-only [`StateTable`] with any other machine built from the
/// same table.
///
/// Dispatch is synchronous: [`Hsm::dispatch`] returns once the message has
/// been handled and every transition it caused, chained ones included, has
/// been resolved. A handler must not dispatch into its own machine; doing so
/// returns [`HsmError::Reentrant`].
pub struct Hsm<C> {
    pub(crate) table: Arc<StateTable<C>>,
    pub(crate) top: StateId,
    pub(crate) current: Option<StateId>,
    pub(crate) pending: Option<StateId>,
    pub(crate) owner: u16,
    pub(crate) phase: Phase,
    pub(crate) config: HsmConfig,
    pub(crate) history: TransitionHistory,
    context: C,
}

impl<C> Hsm<C> {
    /// Construct a machine rooted at `top`, owned by component `owner`.
    ///
    /// `top` must be a root of `table`; every state the machine can reach is
    /// then a descendant of it. The machine is inert until [`Hsm::start`] is
    /// called.
    pub fn new(
        table: Arc<StateTable<C>>,
        top: StateId,
        owner: u16,
        context: C,
    ) -> Result<Self, HsmError> {
        if !table.contains(top) {
            return Err(HsmError::UnknownState { state: top });
        }
        if let Some(parent) = table.parent(top) {
            return Err(HsmError::TopNotRoot { state: top, parent });
        }
        let config = HsmConfig::default();

        Ok(Self {
            table,
            top,
            current: None,
            pending: None,
            owner,
            phase: Phase::Idle,
            history: TransitionHistory::with_capacity(config.history_capacity()),
            config,
            context,
        })
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: HsmConfig) -> Result<Self, HsmError> {
        config.validate()?;
        self.history = TransitionHistory::with_capacity(config.history_capacity());
        self.config = config;
        Ok(self)
    }

    /// Activate the machine.
    ///
    /// Makes the top state current, delivers Entry to it and then dispatches
    /// Start, so a transition requested by the top state is resolved before
    /// this returns.
    pub fn start(&mut self) -> Result<DispatchOutcome, HsmError> {
        if self.phase != Phase::Idle {
            return Err(HsmError::Reentrant);
        }
        if self.current.is_some() {
            return Err(HsmError::AlreadyStarted);
        }

        tracing::debug!(
            owner = self.owner,
            top = self.table.name(self.top).unwrap_or("?"),
            "starting state machine"
        );

        self.guarded(|hsm| {
            hsm.current = Some(hsm.top);
            hsm.deliver_lifecycle(hsm.top, &ENTRY);
            hsm.process(&START)
        })
    }

    /// Deliver one message.
    ///
    /// The message is offered to the current state and then to each ancestor
    /// until a handler consumes it or the top state has seen it. Any
    /// transition requested along the way is executed afterwards.
    pub fn dispatch(&mut self, msg: &Message) -> Result<DispatchOutcome, HsmError> {
        if self.phase != Phase::Idle {
            return Err(HsmError::Reentrant);
        }
        if self.current.is_none() {
            return Err(HsmError::NotStarted);
        }
        self.guarded(|hsm| hsm.process(msg))
    }

    /// Run `f` as the one active call on this machine. Any failure leaves no
    /// transition pending.
    fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, HsmError>,
    ) -> Result<T, HsmError> {
        self.phase = Phase::Dispatching;
        let result = f(self);
        self.phase = Phase::Idle;
        if result.is_err() {
            self.pending = None;
        }
        result
    }

    pub(crate) fn process(&mut self, msg: &Message) -> Result<DispatchOutcome, HsmError> {
        let consumed_by = self.bubble(msg)?;
        let transitions = self.resolve_transitions()?;
        Ok(DispatchOutcome {
            consumed_by,
            transitions,
        })
    }

    /// Offer `msg` to the current state and its ancestors. Never changes
    /// `current`.
    pub(crate) fn bubble(&mut self, msg: &Message) -> Result<Option<StateId>, HsmError> {
        let mut state = self.current.ok_or(HsmError::NotStarted)?;
        loop {
            let handler = self
                .table
                .handler(state)
                .ok_or(HsmError::UnknownState { state })?;

            if handler(self, msg).is_consumed() {
                return Ok(Some(state));
            }
            match self.table.parent(state) {
                Some(parent) => state = parent,
                None => return Ok(None),
            }
        }
    }

    /// Deliver Entry or Exit to exactly one state. The handler's response is
    /// ignored and it may not request a transition.
    pub(crate) fn deliver_lifecycle(&mut self, state: StateId, msg: &Message) {
        let previous = std::mem::replace(&mut self.phase, Phase::Transitioning);
        if let Some(handler) = self.table.handler(state) {
            handler(self, msg);
        }
        self.phase = previous;
    }

    /// The active leaf state, `None` until started.
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Display name of the active leaf state.
    pub fn current_name(&self) -> Option<&'static str> {
        self.current.and_then(|s| self.table.name(s))
    }

    /// Transition requested but not yet executed.
    pub fn pending(&self) -> Option<StateId> {
        self.pending
    }

    pub fn top(&self) -> StateId {
        self.top
    }

    pub fn owner(&self) -> u16 {
        self.owner
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// Whether `state` is the current state or one of its ancestors.
    pub fn is_in(&self, state: StateId) -> bool {
        self.current
            .is_some_and(|current| self.table.is_ancestor(state, current))
    }

    pub fn table(&self) -> &Arc<StateTable<C>> {
        &self.table
    }

    pub fn config(&self) -> &HsmConfig {
        &self.config
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C: fmt::Debug> fmt::Debug for Hsm<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hsm")
            .field("owner", &self.owner)
            .field("top", &self.top)
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
