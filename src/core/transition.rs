//! Transition requests produced by reactions and update ticks.

use super::state::{State, StateId};
use serde::{Deserialize, Serialize};

/// Request to make `target` the active state.
///
/// Reactions and update hooks return `Option<TransitionRequest>`, so at most
/// one request exists per dispatch. The machine resolves `target` against its
/// registry when applying the request; an unregistered id is a bug in the
/// handler and panics.
///
/// # Example
///
/// ```rust
/// use navflow::core::{State, TransitionRequest};
/// use navflow::nav::NavState;
///
/// let request = TransitionRequest::to(NavState::Planning);
/// assert_eq!(request.target(), NavState::Planning.id());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "a transition request does nothing unless returned to the machine"]
pub struct TransitionRequest {
    target: StateId,
}

impl TransitionRequest {
    /// Request a transition to a typed state.
    pub fn to<S: State>(state: S) -> Self {
        Self { target: state.id() }
    }

    /// Request a transition to a raw id.
    ///
    /// The id is only checked when the machine applies the request.
    pub const fn to_id(target: StateId) -> Self {
        Self { target }
    }

    /// Destination of this request.
    pub const fn target(&self) -> StateId {
        self.target
    }
}
