use thiserror::Error;

/// Errors raised when a simulation is constructed from invalid configuration.
/// The running simulation itself is deterministic numeric code and has no
/// recoverable-error taxonomy.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Tick size must be a positive number of seconds, but was {0}")]
    InvalidTickSize(f64),
    #[error("Climate period must be a positive number of seconds, but was {0}")]
    InvalidClimatePeriod(f64),
    #[error("Control deadband must be non-negative, but was {0}")]
    NegativeDeadband(f64),
    #[error("Simulation end time {end} must not be before start time {start}")]
    InvalidRunWindow { start: f64, end: f64 },
}
