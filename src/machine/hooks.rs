//! Observer sinks notified around transitions.

use crate::core::StateId;
use std::fmt;

/// Callback receiving the id of the state that was entered or exited.
pub type Sink = Box<dyn FnMut(StateId) + Send>;

/// Enter/exit sinks injected into a machine.
///
/// For a transition, the exit sink always runs before the enter sink.
/// Construction notifies the enter sink once for the initial state.
#[derive(Default)]
pub struct Hooks {
    on_enter: Option<Sink>,
    on_exit: Option<Sink>,
}

impl Hooks {
    /// Hooks with no sinks registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink called after a state's `enter` hook.
    pub fn on_enter<F>(mut self, sink: F) -> Self
    where
        F: FnMut(StateId) + Send + 'static,
    {
        self.on_enter = Some(Box::new(sink));
        self
    }

    /// Set the sink called after a state's `exit` hook.
    pub fn on_exit<F>(mut self, sink: F) -> Self
    where
        F: FnMut(StateId) + Send + 'static,
    {
        self.on_exit = Some(Box::new(sink));
        self
    }

    pub(crate) fn entered(&mut self, id: StateId) {
        if let Some(sink) = self.on_enter.as_mut() {
            sink(id);
        }
    }

    pub(crate) fn exited(&mut self, id: StateId) {
        if let Some(sink) = self.on_exit.as_mut() {
            sink(id);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
