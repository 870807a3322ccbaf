//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Behavior, StateHistory, StateId, StateRegistry, DEFAULT_HISTORY_LIMIT};
use crate::machine::{Hooks, Machine};

/// Builder for configuring a machine with a fluent API.
///
/// # Example
///
/// ```rust
/// use navflow::machine::Machine;
/// use navflow::nav::{NavContext, NavState};
/// use std::sync::mpsc;
///
/// let (tx, rx) = mpsc::channel();
/// let machine = Machine::<NavState>::builder(NavContext::default())
///     .on_enter(move |id| tx.send(id).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(rx.try_recv().unwrap(), machine.current_state());
/// ```
pub struct MachineBuilder<S: Behavior> {
    context: S::Context,
    initial: Option<S>,
    hooks: Hooks,
    record_history: bool,
    history_limit: usize,
}

impl<S: Behavior> MachineBuilder<S> {
    /// Create a new builder around the shared context.
    pub fn new(context: S::Context) -> Self {
        Self {
            context,
            initial: None,
            hooks: Hooks::new(),
            record_history: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Override the initial state (defaults to `S::INITIAL`).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Sink notified with the id of every entered state.
    pub fn on_enter<F>(mut self, sink: F) -> Self
    where
        F: FnMut(StateId) + Send + 'static,
    {
        self.hooks = self.hooks.on_enter(sink);
        self
    }

    /// Sink notified with the id of every exited state.
    pub fn on_exit<F>(mut self, sink: F) -> Self
    where
        F: FnMut(StateId) + Send + 'static,
    {
        self.hooks = self.hooks.on_exit(sink);
        self
    }

    /// Replace both sinks at once.
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Whether applied transitions are kept in the machine's history.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Keep at most `limit` transitions in the history, dropping the oldest.
    ///
    /// Defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Validate the state set and start the machine.
    ///
    /// Starting enters the initial state, so its `enter` hook and the enter
    /// sink run before this returns.
    pub fn build(self) -> Result<Machine<S>, BuildError> {
        let registry = StateRegistry::<S>::new()?;
        let initial = self.initial.unwrap_or(S::INITIAL);

        if !registry.contains(initial) {
            return Err(BuildError::UnregisteredInitialState {
                state: initial.name(),
            });
        }

        let history_limit = if self.record_history {
            self.history_limit
        } else {
            0
        };

        Ok(Machine::start(
            self.context,
            registry,
            initial,
            self.hooks,
            StateHistory::with_limit(history_limit),
        ))
    }
}
