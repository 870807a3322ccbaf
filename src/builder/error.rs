//! Build errors for machine construction.

use crate::core::RegistryError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid state set: {0}")]
    InvalidStateSet(#[from] RegistryError),

    #[error("Initial state '{state}' is not registered. Add it to State::ALL")]
    UnregisteredInitialState { state: &'static str },
}
