//! Navflow: a typed, event-driven finite state machine core
//!
//! Navflow runs a flat state machine with exactly one active state. States
//! and events are closed enums; every lifecycle hook is an exhaustive `match`,
//! so a missing case is a compile error rather than a silently dropped event.
//!
//! # Core Concepts
//!
//! - **State**: identity of a state (`State`), declared with [`state_set!`]
//! - **Behavior**: `enter`/`update`/`exit` hooks and the reaction table
//! - **Machine**: owns the context, dispatches events, applies transitions
//! - **History**: timestamped record of applied transitions
//!
//! Events a state does not handle are ignored, and terminal states ignore
//! everything. A transition request naming an unregistered state is a bug in
//! the state set and panics.
//!
//! # Example
//!
//! ```rust
//! use navflow::machine::Machine;
//! use navflow::nav::{NavContext, NavEvent, NavState};
//! use std::sync::{Arc, Mutex};
//!
//! let entered = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&entered);
//!
//! let mut machine = Machine::<NavState>::builder(NavContext::default())
//!     .on_enter(move |id| sink.lock().unwrap().push(id.get()))
//!     .build()
//!     .unwrap();
//!
//! for event in [
//!     NavEvent::Goal,
//!     NavEvent::PlanOk,
//!     NavEvent::ControlFail,
//!     NavEvent::RecoveryOk,
//!     NavEvent::PlanOk,
//!     NavEvent::ControlOk,
//! ] {
//!     machine.react(event);
//! }
//!
//! assert!(machine.is_active(NavState::Succeeded));
//! assert_eq!(*entered.lock().unwrap(), vec![1, 2, 3, 4, 2, 3, 5]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod nav;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{Behavior, Control, Event, State, StateId, TransitionRequest};
pub use crate::machine::Machine;
