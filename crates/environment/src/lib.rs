//! Environment configurations.
//!
//! An environment configuration is a directory holding the scene geometry,
//! the airflow data and any number of named simulation parameter sets:
//!
//! ```text
//! config1/
//! ├── config.yaml              models, cell size, wind file prefix
//! ├── simulations/
//! │   ├── sim1/sim.yaml
//! │   └── sim2/sim.yaml
//! └── scenes/
//!     └── scene1.yaml          simulations replayed together
//! ```
//!
//! [`EnvironmentConfigMetadata`] reads that layout as-is. [`preprocess`]
//! validates it and assembles an [`EnvironmentConfiguration`] that a
//! running simulation can be built from.

mod configuration;
mod error;
mod metadata;
pub mod paths;
mod preprocessing;
mod scene;
mod wind;

pub use configuration::{EnvironmentConfiguration, EnvironmentDescription};
pub use error::{MetadataError, PreprocessError, WindError};
pub use metadata::EnvironmentConfigMetadata;
pub use preprocessing::preprocess;
pub use scene::{PlaybackSceneMetadata, SceneSimulation};
pub use wind::{WindFrame, WindSequence};
