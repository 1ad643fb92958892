//! Simulation error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by parsing, validation, and statistics.
///
/// None of these are fatal: every simulation is deterministic, so a failed
/// call is reported to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("empty request set: average seek time and throughput are undefined")]
    EmptyRequestSet,

    #[error("total seek time is zero: throughput is undefined")]
    ZeroSeekTime,
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type SimulationResult<T> = Result<T, SimulationError>;
