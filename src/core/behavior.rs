//! Lifecycle hooks and reactions of a state set.

use super::event::Event;
use super::state::{State, StateId};
use super::transition::TransitionRequest;

/// Behavior of a state set: lifecycle hooks plus the reaction table.
///
/// Each hook is one exhaustive `match` over the state enum, so a state that
/// forgets a case fails to compile instead of silently dropping events.
///
/// `enter` and `exit` return `()` and therefore cannot request a transition.
/// `react` and `update` return at most one [`TransitionRequest`]. Hooks only
/// ever see a [`Control`] handle, never the machine, so dispatching another
/// event from inside a hook is impossible.
///
/// # Example
///
/// ```rust
/// use navflow::core::{Behavior, Control, Event, TransitionRequest};
/// use navflow::state_set;
///
/// state_set! {
///     pub enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// #[derive(Debug)]
/// pub struct Toggle;
///
/// impl Event for Toggle {
///     fn name(&self) -> &'static str {
///         "Toggle"
///     }
/// }
///
/// impl Behavior for Lamp {
///     type Event = Toggle;
///     type Context = u32;
///
///     const INITIAL: Self = Lamp::Off;
///
///     fn enter(&self, control: &mut Control<'_, Self>) {
///         *control.context_mut() += 1;
///     }
///
///     fn react(&self, _event: &Toggle, _control: &mut Control<'_, Self>) -> Option<TransitionRequest> {
///         match self {
///             Lamp::Off => Some(TransitionRequest::to(Lamp::On)),
///             Lamp::On => Some(TransitionRequest::to(Lamp::Off)),
///         }
///     }
/// }
/// ```
pub trait Behavior: State {
    /// Event set dispatched into this state set.
    type Event: Event;

    /// Data shared by every state.
    type Context;

    /// State entered when the machine is constructed.
    const INITIAL: Self;

    /// Runs once when this state becomes active.
    fn enter(&self, _control: &mut Control<'_, Self>) {}

    /// Polling tick while this state is active.
    fn update(&self, _control: &mut Control<'_, Self>) -> Option<TransitionRequest> {
        None
    }

    /// Runs once when this state stops being active.
    fn exit(&self, _control: &mut Control<'_, Self>) {}

    /// Reaction to `event` while this state is active.
    ///
    /// Return `None` for events this state does not handle.
    fn react(&self, event: &Self::Event, control: &mut Control<'_, Self>)
        -> Option<TransitionRequest>;
}

/// Handle lent to state hooks for the duration of one call.
pub struct Control<'a, S: Behavior> {
    state: S,
    context: &'a mut S::Context,
}

impl<'a, S: Behavior> Control<'a, S> {
    pub(crate) fn new(state: S, context: &'a mut S::Context) -> Self {
        Self { state, context }
    }

    /// The state whose hook is running.
    pub fn state(&self) -> S {
        self.state
    }

    /// Id of the state whose hook is running.
    pub fn state_id(&self) -> StateId {
        self.state.id()
    }

    /// Shared context.
    pub fn context(&self) -> &S::Context {
        self.context
    }

    /// Shared context, mutably.
    pub fn context_mut(&mut self) -> &mut S::Context {
        self.context
    }
}
