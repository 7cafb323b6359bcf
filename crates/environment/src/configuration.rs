//! Preprocessed, ready-to-run environment configuration.

use crate::wind::WindSequence;
use plume_types::Vector3;
use std::path::PathBuf;

/// Validated scene description.
///
/// Multiple simulations (different sources, gases, timesteps) can share one
/// environment configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentDescription {
    /// Obstacle geometry, as absolute `.stl` paths.
    pub models: Vec<PathBuf>,
    /// Geometry that removes gas on contact.
    pub outlet_models: Vec<PathBuf>,
    /// Edge length of a grid cell, in metres.
    pub cell_size: f64,
    /// A point known to be in free space.
    pub empty_point: Vector3,
}

/// Output of [`preprocess`](crate::preprocess): geometry plus airflow.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfiguration {
    pub environment: EnvironmentDescription,
    pub wind_sequence: WindSequence,
}
