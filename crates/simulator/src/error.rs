//! Error types for a simulation run.

use plume_environment::{MetadataError, PreprocessError};
use plume_simulation::SimulationError;
use thiserror::Error;

/// Failure at one of the run stages.
///
/// Each stage fails before the next begins, so e.g. a `Preprocessing` error
/// means no simulation step was taken.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration directory could not be read.
    #[error("Failed to read configuration metadata: {0}")]
    Metadata(#[source] MetadataError),

    /// The metadata did not describe a runnable environment.
    #[error("Preprocessing failed: {0}")]
    Preprocessing(#[from] PreprocessError),

    /// No parameter set with the requested name.
    #[error("Simulation '{name}' not found in configuration (available: [{}])", .available.join(", "))]
    UnknownSimulation { name: String, available: Vec<String> },

    /// The parameter set could not be turned into a running simulation.
    #[error("Failed to create simulation: {0}")]
    Simulation(#[from] SimulationError),
}

impl From<MetadataError> for RunError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::UnknownSimulation { name, available } => {
                RunError::UnknownSimulation { name, available }
            }
            other => RunError::Metadata(other),
        }
    }
}
