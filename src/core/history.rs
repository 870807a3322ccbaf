//! State transition history tracking.
//!
//! The machine appends one [`StateTransition`] per applied transition. The
//! initial `enter` is not a transition and is not recorded.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Number of transitions a history keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// What caused a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// A reaction to the named event.
    Event(Cow<'static, str>),
    /// An update tick.
    Update,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(name) => write!(f, "event {name}"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use navflow::core::{StateTransition, Trigger};
/// use navflow::nav::NavState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: NavState::Idle,
///     to: NavState::Planning,
///     trigger: Trigger::Event("Goal".into()),
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_transition());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// What requested the transition
    pub trigger: Trigger,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the transition re-entered the state it left.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

/// Bounded, ordered history of state transitions.
///
/// Holds at most `limit` transitions; pushing past the limit drops the
/// oldest one.
///
/// # Example
///
/// ```rust
/// use navflow::core::{StateHistory, StateTransition, Trigger};
/// use navflow::nav::NavState;
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.push(StateTransition {
///     from: NavState::Idle,
///     to: NavState::Planning,
///     trigger: Trigger::Event("Goal".into()),
///     timestamp: Utc::now(),
/// });
/// history.push(StateTransition {
///     from: NavState::Planning,
///     to: NavState::Failed,
///     trigger: Trigger::Event("Cancel".into()),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&NavState::Idle, &NavState::Planning, &NavState::Failed]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] transitions.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` transitions.
    ///
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Maximum number of transitions kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition, dropping the oldest one when full.
    pub fn push(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition followed by the
    /// `to` state of every kept transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest kept transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of kept transitions that entered `state`.
    pub fn visits(&self, state: S) -> usize {
        self.transitions.iter().filter(|t| t.to == state).count()
    }

    /// Kept transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
