//! Core state machine types.
//!
//! This module contains the pieces a state set is written against:
//! - State identity via the `State` trait and dense `StateId`s
//! - Lifecycle hooks and reactions via the `Behavior` trait
//! - Id validation and lookup via `StateRegistry`
//! - Transition history tracking
//!
//! Nothing here drives a machine; see [`crate::machine`] for the engine.

mod behavior;
mod event;
mod history;
mod registry;
mod state;
mod transition;

pub use behavior::{Behavior, Control};
pub use event::Event;
pub use history::{StateHistory, StateTransition, Trigger, DEFAULT_HISTORY_LIMIT};
pub use registry::{RegistryError, StateRegistry};
pub use state::{State, StateId};
pub use transition::TransitionRequest;
