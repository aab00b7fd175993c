//! Transition requests and the transition executor.
//!
//! A handler only *requests* a transition. Once bubbling is over the
//! executor exits from the current leaf up to the least common ancestor,
//! enters down to the target and dispatches Start to it. Start handlers may
//! request the next transition, so this repeats until nothing is pending.

use crate::config::DuplicatePolicy;
use crate::core::{StateId, TracePath, TransitionRecord, ENTRY, EXIT, START};
use crate::engine::error::HsmError;
use crate::engine::machine::{Hsm, Phase};
use chrono::Utc;

impl<C> Hsm<C> {
    /// Ask for a transition to `target` once the current message has been
    /// handled.
    ///
    /// Only valid from a state handler while a message (including Start) is
    /// being dispatched; Entry and Exit handlers are refused. If a transition
    /// is already pending the configured [`DuplicatePolicy`] decides: by
    /// default the first request wins and this one fails with
    /// [`HsmError::DuplicateTransition`].
    pub fn request_transition(&mut self, target: StateId) -> Result<(), HsmError> {
        if !self.table.contains(target) {
            tracing::warn!(owner = self.owner, %target, "transition to unknown state refused");
            return Err(HsmError::InvalidTarget { target });
        }
        match self.phase {
            Phase::Dispatching => {}
            Phase::Transitioning => {
                tracing::warn!(
                    owner = self.owner,
                    target = self.state_name(target),
                    "transition requested from Entry/Exit refused"
                );
                return Err(HsmError::TransitionInProgress { requested: target });
            }
            Phase::Idle => return Err(HsmError::OutsideDispatch { requested: target }),
        }

        if let Some(pending) = self.pending {
            match self.config.duplicate_policy() {
                DuplicatePolicy::KeepFirst => {
                    tracing::warn!(
                        owner = self.owner,
                        pending = self.state_name(pending),
                        requested = self.state_name(target),
                        "duplicate transition request refused"
                    );
                    return Err(HsmError::DuplicateTransition {
                        pending,
                        requested: target,
                    });
                }
                DuplicatePolicy::Replace => {
                    tracing::warn!(
                        owner = self.owner,
                        pending = self.state_name(pending),
                        requested = self.state_name(target),
                        "pending transition replaced"
                    );
                }
            }
        }

        self.pending = Some(target);
        Ok(())
    }

    /// Execute pending transitions until a Start delivery requests no more.
    /// Returns how many transitions completed.
    pub(crate) fn resolve_transitions(&mut self) -> Result<usize, HsmError> {
        let limit = self.config.max_chained_transitions();
        let mut completed = 0;

        while let Some(target) = self.pending {
            if completed >= limit {
                tracing::warn!(
                    owner = self.owner,
                    limit,
                    current = self.current.map(|s| self.state_name(s)),
                    target = self.state_name(target),
                    "chained transition limit exceeded"
                );
                return Err(HsmError::ChainLimitExceeded { limit });
            }
            self.execute(target)?;
            completed += 1;
            self.bubble(&START)?;
        }
        Ok(completed)
    }

    /// Move from the current state to `target`.
    ///
    /// The LCA and the entry path are resolved before anything is delivered,
    /// so a rejected transition leaves the machine exactly where it was.
    fn execute(&mut self, target: StateId) -> Result<(), HsmError> {
        let source = self.current.ok_or(HsmError::NotStarted)?;

        let Some(lca) = self.table.find_lca(source, target) else {
            tracing::warn!(
                owner = self.owner,
                from = self.state_name(source),
                to = self.state_name(target),
                "no common ancestor, transition aborted"
            );
            return Err(HsmError::NoCommonAncestor {
                from: source,
                to: target,
            });
        };
        let path = self.trace_path(target, lca)?;

        let mut state = source;
        while state != lca {
            self.deliver_lifecycle(state, &EXIT);
            // lca lies on the parent chain of source
            state = self.table.parent(state).unwrap_or(lca);
            self.current = Some(state);
        }

        for state in path.entry_order() {
            self.current = Some(state);
            self.deliver_lifecycle(state, &ENTRY);
        }

        self.pending = None;
        if self.history.is_enabled() {
            self.history.record(TransitionRecord {
                from: source,
                to: target,
                lca,
                timestamp: Utc::now(),
            });
        }

        tracing::debug!(
            owner = self.owner,
            from = self.state_name(source),
            to = self.state_name(target),
            lca = self.state_name(lca),
            "transition complete"
        );
        Ok(())
    }

    /// States from `target` up to, not including, `lca`.
    fn trace_path(&self, target: StateId, lca: StateId) -> Result<TracePath, HsmError> {
        let mut path = TracePath::with_limit(self.config.max_nesting());
        for state in self.table.ancestors(target).take_while(|&s| s != lca) {
            if let Err(e) = path.push(state) {
                tracing::warn!(
                    owner = self.owner,
                    target = self.state_name(target),
                    limit = path.limit(),
                    "nesting limit exceeded, transition rejected"
                );
                return Err(e);
            }
        }
        Ok(path)
    }

    fn state_name(&self, state: StateId) -> &'static str {
        self.table.name(state).unwrap_or("?")
    }
}
