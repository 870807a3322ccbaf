//! The state machine engine.
//!
//! A [`Machine`] owns the context and the active state, dispatches events to
//! the active state's reaction, and applies the returned
//! [`TransitionRequest`](crate::core::TransitionRequest):
//!
//! 1. no request: nothing changes and no sink is notified;
//! 2. `exit` on the old state, then the exit sink;
//! 3. the new state becomes active and the transition is recorded;
//! 4. `enter` on the new state, then the enter sink.
//!
//! Every call runs to completion on the caller's thread. Callers sharing a
//! machine across threads must serialize access themselves, for example by
//! giving it to a single task fed through a channel.

mod hooks;
#[allow(clippy::module_inception)]
mod machine;

pub use hooks::{Hooks, Sink};
pub use machine::Machine;
