//! Static state table and ancestor queries.
//!
//! The table is an arena of [`StateDescriptor`]s indexed by [`StateId`].
//! It is built once (see [`StateTableBuilder`]) and never mutated afterwards,
//! so one table can be shared by any number of machines.

use super::state::{Handler, StateDescriptor, StateId};
use crate::builder::StateTableBuilder;

/// Read-only arena of state descriptors.
///
/// A table may hold a forest: every state declared without a parent is the
/// root of its own tree.
pub struct StateTable<C> {
    pub(crate) states: Vec<StateDescriptor<C>>,
}

impl<C> StateTable<C> {
    /// Start declaring a new table.
    pub fn builder() -> StateTableBuilder<C> {
        StateTableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.index() < self.states.len()
    }

    pub fn get(&self, id: StateId) -> Option<&StateDescriptor<C>> {
        self.states.get(id.index())
    }

    pub fn parent(&self, id: StateId) -> Option<StateId> {
        self.get(id).and_then(|s| s.parent)
    }

    pub fn name(&self, id: StateId) -> Option<&'static str> {
        self.get(id).map(|s| s.name)
    }

    pub(crate) fn handler(&self, id: StateId) -> Option<Handler<C>> {
        self.get(id).map(|s| s.handler)
    }

    /// Look up a state by its display name. The first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(|i| StateId::from_index(i as u16))
    }

    /// Iterate over `id` and then each of its ancestors up to the root.
    ///
    /// Yields nothing for an unknown id.
    pub fn ancestors(&self, id: StateId) -> Ancestors<'_, C> {
        Ancestors {
            table: self,
            next: self.contains(id).then_some(id),
        }
    }

    /// Number of ancestors above `id` (a root has depth 0).
    pub fn depth(&self, id: StateId) -> Option<usize> {
        self.contains(id).then(|| self.ancestors(id).count() - 1)
    }

    /// The root of the tree `id` belongs to.
    pub fn root_of(&self, id: StateId) -> Option<StateId> {
        self.ancestors(id).last()
    }

    /// Whether `ancestor` is `id` itself or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: StateId, id: StateId) -> bool {
        self.ancestors(id).any(|s| s == ancestor)
    }

    /// Least common ancestor of `a` and `b`, both counted as their own
    /// ancestors.
    ///
    /// Every ancestor of `a` is checked against every ancestor of `b`,
    /// innermost first, so the first match is the nearest shared state.
    /// Returns `None` if either id is unknown or the states live in disjoint
    /// trees.
    pub fn find_lca(&self, a: StateId, b: StateId) -> Option<StateId> {
        self.ancestors(a).find(|&x| self.ancestors(b).any(|y| y == x))
    }
}

impl<C> std::fmt::Debug for StateTable<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}

/// Iterator over a state and its ancestors, innermost first.
pub struct Ancestors<'a, C> {
    table: &'a StateTable<C>,
    next: Option<StateId>,
}

impl<C> Iterator for Ancestors<'_, C> {
    type Item = StateId;

    fn next(&mut self) -> Option<StateId> {
        let current = self.next?;
        self.next = self.table.parent(current);
        Some(current)
    }
}
