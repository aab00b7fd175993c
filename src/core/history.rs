//! Transition history tracking.
//!
//! A machine can keep a bounded record of the transitions it completed.
//! Recording is off unless [`HsmConfig::history_capacity`] is non-zero.
//!
//! [`HsmConfig::history_capacity`]: crate::config::HsmConfig::history_capacity

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single completed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The active leaf before the transition
    pub from: StateId,
    /// The state that became active
    pub to: StateId,
    /// Least common ancestor of `from` and `to`; neither exited nor entered
    pub lca: StateId,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of transitions. The oldest record is evicted
/// once the capacity is reached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    capacity: usize,
}

impl TransitionHistory {
    /// Create an empty history. A capacity of zero records nothing.
    ///
    /// Storage grows as records arrive; `capacity` only bounds it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &TransitionRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// States traversed: the source of the oldest retained record, then the
    /// target of every record.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
