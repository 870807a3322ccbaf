//! Navigation pipeline state set.
//!
//! Drives one navigation goal through planning, path following and recovery
//! to a terminal outcome:
//!
//! | State | Accepted events → destination |
//! |---|---|
//! | Idle | Goal → Planning |
//! | Planning | PlanOk → Controlling; PlanFail → Recovery; Cancel → Failed |
//! | Controlling | ControlOk → Succeeded; ControlFail → Recovery; Cancel → Failed |
//! | Recovery | RecoveryOk → Planning; RecoveryFail → Failed |
//! | Succeeded | terminal |
//! | Failed | terminal |
//!
//! The states only bookkeep; planning, control and recovery themselves are
//! the caller's job, which reports their outcome as [`NavEvent`]s.
//!
//! # Example
//!
//! ```rust
//! use navflow::nav::{NavContext, NavEvent, NavMachine, NavState};
//!
//! let mut machine = NavMachine::new(NavContext::default());
//! for event in [NavEvent::Goal, NavEvent::PlanFail, NavEvent::RecoveryOk, NavEvent::Cancel] {
//!     machine.react(event);
//! }
//!
//! assert!(machine.is_active(NavState::Failed));
//! assert_eq!(machine.context().plans, 2);
//! assert_eq!(machine.context().recoveries, 1);
//! ```

mod event;
mod state;

pub use event::NavEvent;
pub use state::NavState;

use crate::machine::Machine;
use serde::{Deserialize, Serialize};

/// Machine running the navigation state set.
pub type NavMachine = Machine<NavState>;

/// Bookkeeping shared by the navigation states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavContext {
    /// Goals accepted while idle.
    pub goals: u32,
    /// Times planning was entered.
    pub plans: u32,
    /// Times recovery was entered.
    pub recoveries: u32,
    /// Cancellations that ended a goal.
    pub cancellations: u32,
}
