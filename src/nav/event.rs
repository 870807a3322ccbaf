//! Events of the navigation pipeline.

use crate::core::Event;
use serde::{Deserialize, Serialize};

/// Outcomes reported by the navigation stack, plus user cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavEvent {
    /// Navigation requested.
    Goal,
    /// Global plan computed.
    PlanOk,
    /// Planning failed.
    PlanFail,
    /// Controller reached the goal.
    ControlOk,
    /// Controller failed.
    ControlFail,
    /// Recovery behavior finished.
    RecoveryOk,
    /// Recovery behavior failed.
    RecoveryFail,
    /// User canceled.
    Cancel,
}

impl NavEvent {
    /// Every navigation event.
    pub const ALL: [NavEvent; 8] = [
        NavEvent::Goal,
        NavEvent::PlanOk,
        NavEvent::PlanFail,
        NavEvent::ControlOk,
        NavEvent::ControlFail,
        NavEvent::RecoveryOk,
        NavEvent::RecoveryFail,
        NavEvent::Cancel,
    ];
}

impl Event for NavEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::PlanOk => "PlanOk",
            Self::PlanFail => "PlanFail",
            Self::ControlOk => "ControlOk",
            Self::ControlFail => "ControlFail",
            Self::RecoveryOk => "RecoveryOk",
            Self::RecoveryFail => "RecoveryFail",
            Self::Cancel => "Cancel",
        }
    }
}
