//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while stepping or running the circuit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{element}: {quantity} is not initialized")]
    UninitializedState {
        element: &'static str,
        quantity: &'static str,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<rc_core::RcError> for SimError {
    fn from(e: rc_core::RcError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
