//! Builder API for machine construction.
//!
//! [`MachineBuilder`] is the configuration surface of a machine: initial
//! state, enter/exit sinks and history recording. The [`state_set!`]
//! macro declares state enums with ids derived from declaration order.
//!
//! [`state_set!`]: crate::state_set

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
