//! Builder for state tables.

use crate::builder::error::BuildError;
use crate::core::{Handler, StateDescriptor, StateId, StateTable};

/// Largest number of states a single table can hold.
pub const MAX_STATES: usize = u16::MAX as usize + 1;

/// Declares states one by one and freezes them into a [`StateTable`].
///
/// A parent has to be declared before any of its children. Since a state can
/// only point at states that already exist, a cycle cannot be expressed.
pub struct StateTableBuilder<C> {
    states: Vec<StateDescriptor<C>>,
}

impl<C> StateTableBuilder<C> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Declare a state and return its id.
    ///
    /// Pass `None` as `parent` to declare the root of a tree.
    pub fn state(
        &mut self,
        name: &'static str,
        parent: Option<StateId>,
        handler: Handler<C>,
    ) -> Result<StateId, BuildError> {
        if self.states.len() >= MAX_STATES {
            return Err(BuildError::TooManyStates { max: MAX_STATES });
        }
        if let Some(parent) = parent {
            if parent.index() >= self.states.len() {
                return Err(BuildError::ParentNotDeclared {
                    state: name,
                    parent,
                });
            }
        }

        let id = StateId::from_index(self.states.len() as u16);
        self.states.push(StateDescriptor {
            name,
            parent,
            handler,
        });
        Ok(id)
    }

    /// Declare a state under a predetermined id.
    ///
    /// Used by [`state_table!`](crate::state_table), which assigns ids in
    /// declaration order ahead of time. `id` must be the next free slot.
    pub fn declare(
        &mut self,
        id: StateId,
        name: &'static str,
        parent: Option<StateId>,
        handler: Handler<C>,
    ) -> Result<(), BuildError> {
        if self.states.len() >= MAX_STATES {
            return Err(BuildError::TooManyStates { max: MAX_STATES });
        }
        let expected = StateId::from_index(self.states.len() as u16);
        if id != expected {
            return Err(BuildError::OutOfOrder {
                state: name,
                expected,
                found: id,
            });
        }
        self.state(name, parent, handler).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn build(self) -> StateTable<C> {
        StateTable {
            states: self.states,
        }
    }
}

impl<C> Default for StateTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Message, Response};
    use crate::engine::Hsm;

    fn pass(_: &mut Hsm<()>, _: &Message) -> Response {
        Response::PassToParent
    }

    #[test]
    fn ids_follow_declaration_order() {
        let mut builder = StateTableBuilder::new();
        let top = builder.state("Top", None, pass).unwrap();
        let a = builder.state("A", Some(top), pass).unwrap();

        assert_eq!(top.index(), 0);
        assert_eq!(a.index(), 1);

        let table = builder.build();
        assert_eq!(table.len(), 2);
        assert_eq!(table.parent(a), Some(top));
    }

    #[test]
    fn parent_must_be_declared_first() {
        let mut builder = StateTableBuilder::<()>::new();
        let result = builder.state("Orphan", Some(StateId::from_index(3)), pass);

        assert!(matches!(
            result,
            Err(BuildError::ParentNotDeclared { state: "Orphan", .. })
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn self_parent_is_rejected() {
        let mut builder = StateTableBuilder::<()>::new();
        let result = builder.state("Loop", Some(StateId::from_index(0)), pass);
        assert!(result.is_err());
    }

    #[test]
    fn declare_checks_slot() {
        let mut builder = StateTableBuilder::<()>::new();
        builder
            .declare(StateId::from_index(0), "Top", None, pass)
            .unwrap();

        let result = builder.declare(StateId::from_index(2), "Late", None, pass);
        assert_eq!(
            result,
            Err(BuildError::OutOfOrder {
                state: "Late",
                expected: StateId::from_index(1),
                found: StateId::from_index(2),
            })
        );
    }

    #[test]
    fn full_table_reports_too_many_states() {
        let mut builder = StateTableBuilder::<()>::new();
        for _ in 0..MAX_STATES {
            builder.state("S", None, pass).unwrap();
        }

        assert_eq!(
            builder.state("Extra", None, pass),
            Err(BuildError::TooManyStates { max: MAX_STATES })
        );
        assert_eq!(
            builder.declare(StateId::from_index(0), "Extra", None, pass),
            Err(BuildError::TooManyStates { max: MAX_STATES })
        );
        assert_eq!(builder.len(), MAX_STATES);
    }
}
