//! State identity for state machine states.
//!
//! Every state set is a closed enum implementing [`State`]. The trait only
//! describes *which* state a value is (its id, name and terminal flags);
//! lifecycle behavior lives in [`Behavior`](super::Behavior).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Dense identifier of a registered state.
///
/// Ids are assigned in registration order starting at 1. Id 0 is reserved
/// for the root sentinel and never names a registered state.
///
/// # Example
///
/// ```rust
/// use navflow::core::StateId;
///
/// const PLANNING: StateId = StateId::new(2);
///
/// assert_eq!(PLANNING.get(), 2);
/// assert!(!PLANNING.is_root());
/// assert!(StateId::ROOT.is_root());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u16);

impl StateId {
    /// The "no state" sentinel.
    pub const ROOT: StateId = StateId(0);

    /// Wrap a raw id.
    pub const fn new(raw: u16) -> Self {
        StateId(raw)
    }

    /// Raw numeric value of this id.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether this is the reserved root sentinel.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Zero-based registration slot, `None` for the root sentinel.
    pub(crate) fn index(self) -> Option<usize> {
        usize::from(self.0).checked_sub(1)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait for state machine states.
///
/// Implementors are closed, field-less enums. `ALL` fixes the registration
/// order and `id` must agree with it: `ALL[i].id() == StateId::new(i + 1)`.
/// [`StateRegistry`](super::StateRegistry) checks this when a machine is built.
///
/// The [`state_set!`](crate::state_set) macro derives a conforming
/// implementation from declaration order.
///
/// # Example
///
/// ```rust
/// use navflow::core::{State, StateId};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Broken,
/// }
///
/// impl State for Door {
///     const ALL: &'static [Self] = &[Self::Open, Self::Closed, Self::Broken];
///
///     fn id(&self) -> StateId {
///         match self {
///             Self::Open => StateId::new(1),
///             Self::Closed => StateId::new(2),
///             Self::Broken => StateId::new(3),
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(Door::Closed.id().get(), 2);
/// assert!(Door::Broken.is_final());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every state of the set, in registration order.
    const ALL: &'static [Self];

    /// Registered id of this state.
    fn id(&self) -> StateId;

    /// Human-readable name for display and logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// Terminal states have no outgoing transitions. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
