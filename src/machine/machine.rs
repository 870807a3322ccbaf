//! State machine that dispatches events and applies transitions.

use crate::builder::MachineBuilder;
use crate::core::{
    Behavior, Control, Event, StateHistory, StateId, StateRegistry, StateTransition,
    TransitionRequest, Trigger,
};
use crate::machine::hooks::Hooks;
use chrono::Utc;
use std::fmt;

/// A running state machine with exactly one active state.
///
/// The machine owns the context and lends it to state hooks. `react` and
/// `update` take `&mut self` and run to completion, so there is never more
/// than one call in flight. Dropping the machine does not run `exit` on the
/// active state.
pub struct Machine<S: Behavior> {
    context: S::Context,
    active: S,
    registry: StateRegistry<S>,
    hooks: Hooks,
    history: StateHistory<S>,
}

impl<S: Behavior> Machine<S> {
    /// Create a machine in `S::INITIAL` with no sinks.
    ///
    /// # Panics
    ///
    /// Panics if the state set fails registry validation. Use
    /// [`Machine::builder`] to get the error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use navflow::machine::Machine;
    /// use navflow::nav::{NavContext, NavEvent, NavState};
    ///
    /// let mut machine = Machine::<NavState>::new(NavContext::default());
    /// assert!(machine.is_active(NavState::Idle));
    ///
    /// machine.react(NavEvent::Goal);
    /// assert!(machine.is_active(NavState::Planning));
    /// ```
    pub fn new(context: S::Context) -> Self {
        match Self::builder(context).build() {
            Ok(machine) => machine,
            Err(err) => panic!(
                "cannot start machine for {}: {err}",
                std::any::type_name::<S>()
            ),
        }
    }

    /// Start configuring a machine around `context`.
    pub fn builder(context: S::Context) -> MachineBuilder<S> {
        MachineBuilder::new(context)
    }

    pub(crate) fn start(
        context: S::Context,
        registry: StateRegistry<S>,
        initial: S,
        hooks: Hooks,
        history: StateHistory<S>,
    ) -> Self {
        let mut machine = Self {
            context,
            active: initial,
            registry,
            hooks,
            history,
        };
        machine.enter_active();
        machine
    }

    /// Dispatch one event to the active state.
    ///
    /// Events the active state does not handle are ignored.
    pub fn react(&mut self, event: S::Event) {
        let state = self.active;
        let request = {
            let mut control = Control::new(state, &mut self.context);
            state.react(&event, &mut control)
        };

        match request {
            Some(request) => self.apply(request, Trigger::Event(event.name().into())),
            None => tracing::debug!(
                state = state.name(),
                event = event.name(),
                "event ignored"
            ),
        }
    }

    /// Run one polling tick of the active state.
    pub fn update(&mut self) {
        let state = self.active;
        let request = {
            let mut control = Control::new(state, &mut self.context);
            state.update(&mut control)
        };

        match request {
            Some(request) => self.apply(request, Trigger::Update),
            None => tracing::trace!(state = state.name(), "update requested nothing"),
        }
    }

    /// Id of the active state.
    pub fn current_state(&self) -> StateId {
        self.active.id()
    }

    /// The active state.
    pub fn active(&self) -> S {
        self.active
    }

    /// Whether `state` is the active state.
    pub fn is_active(&self, state: S) -> bool {
        self.active == state
    }

    /// Whether the active state is terminal.
    pub fn is_final(&self) -> bool {
        self.active.is_final()
    }

    /// Shared context.
    pub fn context(&self) -> &S::Context {
        &self.context
    }

    /// Shared context, mutably. Lets the caller feed data polled by `update`.
    pub fn context_mut(&mut self) -> &mut S::Context {
        &mut self.context
    }

    /// Consume the machine and return its context without running `exit`.
    pub fn into_context(self) -> S::Context {
        self.context
    }

    /// Most recent transitions, bounded by the configured history limit.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Registry of the machine's state set.
    pub fn registry(&self) -> &StateRegistry<S> {
        &self.registry
    }

    fn apply(&mut self, request: TransitionRequest, trigger: Trigger) {
        let previous = self.active;
        let target = request.target();
        let Some(next) = self.registry.resolve(target) else {
            panic!(
                "state '{}' requested a transition to unregistered state {target} ({} registers {} states)",
                previous.name(),
                std::any::type_name::<S>(),
                self.registry.len()
            );
        };

        {
            let mut control = Control::new(previous, &mut self.context);
            previous.exit(&mut control);
        }
        self.hooks.exited(previous.id());

        self.active = next;
        tracing::debug!(
            from = previous.name(),
            to = next.name(),
            %trigger,
            "transition"
        );
        if self.history.limit() > 0 {
            self.history.push(StateTransition {
                from: previous,
                to: next,
                trigger,
                timestamp: Utc::now(),
            });
        }

        self.enter_active();
    }

    fn enter_active(&mut self) {
        let state = self.active;
        {
            let mut control = Control::new(state, &mut self.context);
            state.enter(&mut control);
        }
        self.hooks.entered(state.id());
        tracing::debug!(state = state.name(), id = state.id().get(), "entered state");
    }
}

impl<S> fmt::Debug for Machine<S>
where
    S: Behavior,
    S::Context: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("active", &self.active)
            .field("context", &self.context)
            .field("hooks", &self.hooks)
            .field("transitions", &self.history.transitions().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{State, DEFAULT_HISTORY_LIMIT};
    use crate::nav::{NavContext, NavEvent, NavState};
    use crate::state_set;
    use std::borrow::Cow;
    use std::sync::{Arc, Mutex};
    use tracing_test::traced_test;

    state_set! {
        enum Lift {
            Parked,
            Warming,
            Ready,
            Halted,
        }
        final: [Halted]
        error: [Halted]
    }

    #[derive(Debug)]
    enum LiftEvent {
        Start,
        Stop,
        Rewarm,
        Broken,
    }

    impl Event for LiftEvent {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
                Self::Rewarm => "Rewarm",
                Self::Broken => "Broken",
            }
        }
    }

    #[derive(Debug, Default)]
    struct LiftContext {
        journal: Vec<String>,
        warm: bool,
    }

    impl Behavior for Lift {
        type Event = LiftEvent;
        type Context = LiftContext;

        const INITIAL: Self = Lift::Parked;

        fn enter(&self, control: &mut Control<'_, Self>) {
            let line = format!("enter {}", self.name());
            control.context_mut().journal.push(line);
        }

        fn exit(&self, control: &mut Control<'_, Self>) {
            let line = format!("exit {}", self.name());
            control.context_mut().journal.push(line);
        }

        fn update(&self, control: &mut Control<'_, Self>) -> Option<TransitionRequest> {
            match self {
                Lift::Warming if control.context().warm => Some(TransitionRequest::to(Lift::Ready)),
                _ => None,
            }
        }

        fn react(&self, event: &LiftEvent, _control: &mut Control<'_, Self>) -> Option<TransitionRequest> {
            match (self, event) {
                (_, LiftEvent::Broken) => Some(TransitionRequest::to_id(StateId::new(99))),
                (Lift::Parked, LiftEvent::Start) => Some(TransitionRequest::to(Lift::Warming)),
                (Lift::Warming | Lift::Ready, LiftEvent::Stop) => {
                    Some(TransitionRequest::to(Lift::Halted))
                }
                (Lift::Ready, LiftEvent::Rewarm) => Some(TransitionRequest::to(Lift::Ready)),
                _ => None,
            }
        }
    }

    fn journal(machine: &Machine<Lift>) -> Vec<&str> {
        machine
            .context()
            .journal
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn construction_enters_initial_state() {
        let machine = Machine::<Lift>::new(LiftContext::default());

        assert_eq!(machine.current_state(), StateId::new(1));
        assert!(machine.is_active(Lift::Parked));
        assert_eq!(journal(&machine), vec!["enter Parked"]);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn construction_notifies_enter_sink_once() {
        let entered = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&entered);

        let _machine = Machine::<Lift>::builder(LiftContext::default())
            .on_enter(move |id| sink.lock().unwrap().push(id))
            .build()
            .unwrap();

        assert_eq!(*entered.lock().unwrap(), vec![StateId::new(1)]);
    }

    #[test]
    fn react_runs_exit_then_enter() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());

        machine.react(LiftEvent::Start);

        assert!(machine.is_active(Lift::Warming));
        assert_eq!(
            journal(&machine),
            vec!["enter Parked", "exit Parked", "enter Warming"]
        );

        let transition = &machine.history().transitions()[0];
        assert_eq!(transition.from, Lift::Parked);
        assert_eq!(transition.to, Lift::Warming);
        assert!(matches!(
            transition.trigger,
            Trigger::Event(Cow::Borrowed("Start"))
        ));
    }

    #[test]
    fn unhandled_event_changes_nothing() {
        let notifications = Arc::new(Mutex::new(0usize));
        let on_enter = Arc::clone(&notifications);
        let on_exit = Arc::clone(&notifications);

        let mut machine = Machine::<Lift>::builder(LiftContext::default())
            .on_enter(move |_| *on_enter.lock().unwrap() += 1)
            .on_exit(move |_| *on_exit.lock().unwrap() += 1)
            .build()
            .unwrap();

        machine.react(LiftEvent::Stop);
        machine.react(LiftEvent::Rewarm);

        assert!(machine.is_active(Lift::Parked));
        assert_eq!(*notifications.lock().unwrap(), 1);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn update_drives_polled_transition() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());
        machine.react(LiftEvent::Start);

        machine.update();
        assert!(machine.is_active(Lift::Warming));

        machine.context_mut().warm = true;
        machine.update();
        assert!(machine.is_active(Lift::Ready));
        assert_eq!(
            machine.history().transitions().back().map(|t| &t.trigger),
            Some(&Trigger::Update)
        );
    }

    #[test]
    fn update_without_request_is_a_no_op() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());
        for _ in 0..3 {
            machine.update();
        }
        assert!(machine.is_active(Lift::Parked));
        assert_eq!(journal(&machine), vec!["enter Parked"]);
    }

    #[test]
    fn self_transition_reenters_state() {
        let mut machine = Machine::<Lift>::new(LiftContext {
            warm: true,
            ..LiftContext::default()
        });
        machine.react(LiftEvent::Start);
        machine.update();
        machine.react(LiftEvent::Rewarm);

        assert!(machine.is_active(Lift::Ready));
        assert_eq!(
            &journal(&machine)[5..],
            &["exit Ready", "enter Ready"]
        );
        assert!(machine.history().transitions()[2].is_self_transition());
    }

    #[test]
    fn sinks_observe_exit_before_enter() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let enter_log = Arc::clone(&events);
        let exit_log = Arc::clone(&events);

        let mut machine = Machine::<Lift>::builder(LiftContext::default())
            .on_enter(move |id| enter_log.lock().unwrap().push(format!("enter {id}")))
            .on_exit(move |id| exit_log.lock().unwrap().push(format!("exit {id}")))
            .build()
            .unwrap();

        machine.react(LiftEvent::Start);
        machine.react(LiftEvent::Stop);

        assert_eq!(
            *events.lock().unwrap(),
            vec!["enter #1", "exit #1", "enter #2", "exit #2", "enter #4"]
        );
        assert!(machine.is_final());
    }

    #[test]
    fn terminal_state_absorbs_events() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());
        machine.react(LiftEvent::Start);
        machine.react(LiftEvent::Stop);

        for event in [LiftEvent::Start, LiftEvent::Stop, LiftEvent::Rewarm] {
            machine.react(event);
            machine.update();
        }

        assert!(machine.is_active(Lift::Halted));
        assert_eq!(machine.history().transitions().len(), 2);
    }

    #[test]
    #[should_panic(expected = "unregistered state #99")]
    fn malformed_request_panics() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());
        machine.react(LiftEvent::Broken);
    }

    #[test]
    fn history_can_be_disabled() {
        let mut machine = Machine::<Lift>::builder(LiftContext::default())
            .record_history(false)
            .build()
            .unwrap();

        machine.react(LiftEvent::Start);

        assert!(machine.is_active(Lift::Warming));
        assert!(machine.history().is_empty());
        assert_eq!(machine.history().limit(), 0);
    }

    #[test]
    fn history_stays_within_limit() {
        let mut machine = Machine::<NavState>::builder(NavContext::default())
            .history_limit(8)
            .build()
            .unwrap();

        machine.react(NavEvent::Goal);
        for _ in 0..500 {
            machine.react(NavEvent::PlanFail);
            machine.react(NavEvent::RecoveryOk);
        }

        assert!(machine.is_active(NavState::Planning));
        assert_eq!(machine.context().plans, 501);
        assert_eq!(machine.history().transitions().len(), 8);
        assert_eq!(
            machine.history().transitions().back().map(|t| t.to),
            Some(NavState::Planning)
        );
    }

    #[test]
    fn default_history_is_bounded() {
        let mut machine = Machine::<NavState>::new(NavContext::default());

        machine.react(NavEvent::Goal);
        for _ in 0..DEFAULT_HISTORY_LIMIT {
            machine.react(NavEvent::PlanFail);
            machine.react(NavEvent::RecoveryOk);
        }

        assert_eq!(machine.history().transitions().len(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn drop_does_not_run_exit() {
        let exits = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&exits);

        let machine = Machine::<Lift>::builder(LiftContext::default())
            .on_exit(move |_| *sink.lock().unwrap() += 1)
            .build()
            .unwrap();
        let context = machine.into_context();

        assert_eq!(*exits.lock().unwrap(), 0);
        assert_eq!(context.journal, vec!["enter Parked"]);
    }

    #[test]
    fn builder_overrides_initial_state() {
        let machine = Machine::<Lift>::builder(LiftContext::default())
            .initial(Lift::Ready)
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), StateId::new(3));
        assert_eq!(journal(&machine), vec!["enter Ready"]);
    }

    #[test]
    #[traced_test]
    fn ignored_events_are_logged() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());
        machine.react(LiftEvent::Stop);

        assert!(logs_contain("event ignored"));
        assert!(logs_contain("Stop"));
    }

    #[test]
    #[traced_test]
    fn transitions_are_logged() {
        let mut machine = Machine::<Lift>::new(LiftContext::default());
        machine.react(LiftEvent::Start);

        assert!(logs_contain("transition"));
        assert!(logs_contain("event Start"));
    }
}
