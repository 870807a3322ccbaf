//! States of the navigation pipeline and their transition table.

use super::event::NavEvent;
use super::NavContext;
use crate::core::{Behavior, Control, State, TransitionRequest};
use crate::state_set;

state_set! {
    /// Phases of one navigation goal.
    pub enum NavState {
        Idle,
        Planning,
        Controlling,
        Recovery,
        Succeeded,
        Failed,
    }
    final: [Succeeded, Failed]
    error: [Failed]
}

// Ids are part of the public contract (logs and sinks report them).
const _: () = assert!(NavState::Idle.state_id().get() == 1);
const _: () = assert!(NavState::Planning.state_id().get() == 2);
const _: () = assert!(NavState::Controlling.state_id().get() == 3);
const _: () = assert!(NavState::Recovery.state_id().get() == 4);
const _: () = assert!(NavState::Succeeded.state_id().get() == 5);
const _: () = assert!(NavState::Failed.state_id().get() == 6);

impl NavState {
    /// Line announced when the state is entered.
    pub fn announcement(self) -> &'static str {
        match self {
            NavState::Idle => "→ Idle",
            NavState::Planning => "→ Planning (compute global path)",
            NavState::Controlling => "→ Controlling (follow path)",
            NavState::Recovery => "→ Recovery (clear/spin/backup)",
            NavState::Succeeded => "✅ Succeeded",
            NavState::Failed => "❌ Failed",
        }
    }

    /// Destination for `event` in this state, `None` if the event is ignored.
    pub fn next(self, event: &NavEvent) -> Option<NavState> {
        match self {
            NavState::Idle => match event {
                NavEvent::Goal => Some(NavState::Planning),
                _ => None,
            },
            NavState::Planning => match event {
                NavEvent::PlanOk => Some(NavState::Controlling),
                NavEvent::PlanFail => Some(NavState::Recovery),
                NavEvent::Cancel => Some(NavState::Failed),
                _ => None,
            },
            NavState::Controlling => match event {
                NavEvent::ControlOk => Some(NavState::Succeeded),
                NavEvent::ControlFail => Some(NavState::Recovery),
                NavEvent::Cancel => Some(NavState::Failed),
                _ => None,
            },
            NavState::Recovery => match event {
                NavEvent::RecoveryOk => Some(NavState::Planning),
                NavEvent::RecoveryFail => Some(NavState::Failed),
                _ => None,
            },
            NavState::Succeeded | NavState::Failed => None,
        }
    }
}

impl Behavior for NavState {
    type Event = NavEvent;
    type Context = NavContext;

    const INITIAL: Self = NavState::Idle;

    fn enter(&self, control: &mut Control<'_, Self>) {
        let context = control.context_mut();
        match self {
            NavState::Planning => context.plans += 1,
            NavState::Recovery => context.recoveries += 1,
            NavState::Idle | NavState::Controlling | NavState::Succeeded | NavState::Failed => {}
        }
        tracing::info!(state = self.name(), "{}", self.announcement());
    }

    fn react(&self, event: &NavEvent, control: &mut Control<'_, Self>) -> Option<TransitionRequest> {
        let next = self.next(event)?;
        let context = control.context_mut();
        match event {
            NavEvent::Goal => context.goals += 1,
            NavEvent::Cancel => context.cancellations += 1,
            _ => {}
        }
        Some(TransitionRequest::to(next))
    }
}
