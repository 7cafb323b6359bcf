//! Error types for reading and preprocessing environment configurations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading or writing configuration metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The directory or a required file does not exist.
    #[error("Configuration path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML file could not be parsed.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A value could not be written as YAML.
    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// No simulation with this name was found in the directory.
    #[error("Simulation '{name}' not found (available: [{}])", .available.join(", "))]
    UnknownSimulation { name: String, available: Vec<String> },
}

/// Errors while turning metadata into a runnable configuration.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// No usable environment model was listed in `config.yaml`.
    #[error("No environment models configured")]
    NoEnvironmentModels,

    /// The cell size must be a positive, finite length.
    #[error("Invalid cell size: {0}")]
    InvalidCellSize(f64),

    /// Uniform wind was requested but no wind file exists.
    #[error("No wind files found for prefix {}", .0.display())]
    MissingWindFiles(PathBuf),

    /// A uniform wind file has a line that is not three comma-separated numbers.
    #[error("Malformed wind vector at {}:{line}", .path.display())]
    MalformedWind { path: PathBuf, line: usize },

    /// Reading a wind file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from wind-sequence manipulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindError {
    /// Requested frame does not exist.
    #[error("Wind frame {index} requested but only {len} exist")]
    IndexOutOfRange { index: usize, len: usize },
}
