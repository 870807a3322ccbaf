//! Registry mapping state ids to states.
//!
//! A registry is built once per machine from [`State::ALL`]. Validation
//! guarantees that ids are dense, start at 1 and follow registration order,
//! which makes id lookup a plain slice index.

use super::state::{State, StateId};
use thiserror::Error;

/// Errors found while validating a state set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("State set is empty. Register at least one state")]
    Empty,

    #[error("State set has {count} states but ids are limited to {max}", max = u16::MAX)]
    TooManyStates { count: usize },

    #[error("State '{state}' uses the reserved root id 0")]
    ReservedId { state: &'static str },

    #[error("State '{state}' has id {id} outside the registered range 1..={count}")]
    IdOutOfRange {
        state: &'static str,
        id: u16,
        count: usize,
    },

    #[error("States '{first}' and '{second}' share id {id}")]
    DuplicateId {
        first: &'static str,
        second: &'static str,
        id: u16,
    },

    #[error("State '{state}' is registered at position {expected} but reports id {id}")]
    OrderMismatch {
        state: &'static str,
        expected: usize,
        id: u16,
    },
}

/// Validated id → state lookup for one state set.
#[derive(Debug, Clone, Copy)]
pub struct StateRegistry<S: State> {
    states: &'static [S],
}

impl<S: State> StateRegistry<S> {
    /// Validate `S::ALL` and build the registry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use navflow::core::{State, StateId, StateRegistry};
    /// use navflow::nav::NavState;
    ///
    /// let registry = StateRegistry::<NavState>::new().unwrap();
    /// assert_eq!(registry.len(), 6);
    /// assert_eq!(registry.resolve(StateId::new(2)), Some(NavState::Planning));
    /// assert_eq!(registry.resolve(StateId::ROOT), None);
    /// ```
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_states(S::ALL)
    }

    pub(crate) fn from_states(states: &'static [S]) -> Result<Self, RegistryError> {
        if states.is_empty() {
            return Err(RegistryError::Empty);
        }
        if states.len() > usize::from(u16::MAX) {
            return Err(RegistryError::TooManyStates {
                count: states.len(),
            });
        }

        let mut claimed: Vec<Option<S>> = vec![None; states.len()];
        for (position, state) in states.iter().enumerate() {
            let id = state.id();
            let Some(slot) = id.index() else {
                return Err(RegistryError::ReservedId {
                    state: state.name(),
                });
            };
            let Some(owner) = claimed.get_mut(slot) else {
                return Err(RegistryError::IdOutOfRange {
                    state: state.name(),
                    id: id.get(),
                    count: states.len(),
                });
            };
            if let Some(first) = owner {
                return Err(RegistryError::DuplicateId {
                    first: first.name(),
                    second: state.name(),
                    id: id.get(),
                });
            }
            if slot != position {
                return Err(RegistryError::OrderMismatch {
                    state: state.name(),
                    expected: position + 1,
                    id: id.get(),
                });
            }
            *owner = Some(*state);
        }

        Ok(Self { states })
    }

    /// Look up the state registered under `id`.
    pub fn resolve(&self, id: StateId) -> Option<S> {
        id.index().and_then(|slot| self.states.get(slot)).copied()
    }

    /// Name of the state registered under `id`.
    pub fn name(&self, id: StateId) -> Option<&'static str> {
        self.resolve(id).map(|state| state.name())
    }

    /// Whether `state` belongs to this registry.
    pub fn contains(&self, state: S) -> bool {
        self.resolve(state.id()) == Some(state)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; an empty set fails validation.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Registered states in id order.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.states.iter().copied()
    }
}
