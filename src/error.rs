//! Error types for the simulators and their input layer.

use thiserror::Error;

/// Errors raised by the simulation engines.
///
/// Parameters are validated before any step runs, so a simulation either
/// completes with a full trace or returns one of these without side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("No evictable frame: frame set is full but the eviction queue is empty")]
    NoEvictableFrame,
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors raised while turning user-supplied text into typed parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field}: `{token}` is not a number")]
    NotANumber { field: &'static str, token: String },

    #[error("{field} values must be non-negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    #[error("{field}: {value} is too large")]
    OutOfRange { field: &'static str, value: i64 },
}

/// Result type for input parsing.
pub type InputResult<T> = Result<T, InputError>;
