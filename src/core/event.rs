//! Events dispatched into a state machine.

use std::fmt::Debug;

/// A value that can be dispatched into a machine with
/// [`Machine::react`](crate::machine::Machine::react).
///
/// Event sets are closed enums. Variants may carry payloads; the engine only
/// needs a stable tag name for history and logging.
///
/// # Example
///
/// ```rust
/// use navflow::core::Event;
///
/// #[derive(Debug)]
/// enum Sensor {
///     Reading(f64),
///     Lost,
/// }
///
/// impl Event for Sensor {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Reading(_) => "Reading",
///             Self::Lost => "Lost",
///         }
///     }
/// }
///
/// assert_eq!(Sensor::Reading(0.5).name(), "Reading");
/// ```
pub trait Event: Debug {
    /// Tag of this event, independent of any payload.
    fn name(&self) -> &'static str;
}
