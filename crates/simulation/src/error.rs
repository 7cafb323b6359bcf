//! Error types for constructing simulations.

use thiserror::Error;

/// Errors when building a [`RunningSimulation`](crate::RunningSimulation).
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// A step length must be positive and finite, or the clock never advances.
    #[error("Invalid {name}: {value} (must be positive and finite)")]
    InvalidTimestep { name: &'static str, value: f64 },
}
