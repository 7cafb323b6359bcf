//! Turn configuration metadata into a runnable environment configuration.
//!
//! This step only validates and assembles. Geometry stays as model paths and
//! wind fields stay as file references; nothing is voxelized here.

use crate::configuration::{EnvironmentConfiguration, EnvironmentDescription};
use crate::error::PreprocessError;
use crate::metadata::EnvironmentConfigMetadata;
use crate::wind::{WindFrame, WindSequence};
use plume_types::{LoopConfig, Vector3};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Validate `metadata` and build the environment + wind configuration.
///
/// # Errors
///
/// - [`PreprocessError::NoEnvironmentModels`] if no obstacle model survived reading
/// - [`PreprocessError::InvalidCellSize`] if the cell size is not a positive length
/// - [`PreprocessError::MissingWindFiles`] if uniform wind was requested without a file
/// - [`PreprocessError::MalformedWind`] / [`PreprocessError::Io`] for unreadable uniform wind
pub fn preprocess(
    metadata: &EnvironmentConfigMetadata,
) -> Result<EnvironmentConfiguration, PreprocessError> {
    if metadata.env_models.is_empty() {
        return Err(PreprocessError::NoEnvironmentModels);
    }
    if !metadata.cell_size.is_finite() || metadata.cell_size <= 0.0 {
        return Err(PreprocessError::InvalidCellSize(metadata.cell_size));
    }

    let wind_files = metadata.wind_files();
    let frames = if metadata.uniform_wind {
        let first = wind_files.first().ok_or_else(|| {
            PreprocessError::MissingWindFiles(
                metadata
                    .unprocessed_wind_files
                    .clone()
                    .unwrap_or_else(|| metadata.root_directory.clone()),
            )
        })?;
        read_uniform_wind(first)?
    } else {
        if wind_files.is_empty() {
            warn!(config = %metadata.name(), "No wind files found, assuming still air");
        }
        wind_files.into_iter().map(WindFrame::Snapshot).collect()
    };

    let config = EnvironmentConfiguration {
        environment: EnvironmentDescription {
            models: metadata.env_models.clone(),
            outlet_models: metadata.outlet_models.clone(),
            cell_size: metadata.cell_size,
            empty_point: metadata.empty_point,
        },
        wind_sequence: WindSequence::new(frames, LoopConfig::default()),
    };

    info!(
        config = %metadata.name(),
        models = config.environment.models.len(),
        outlets = config.environment.outlet_models.len(),
        wind_frames = config.wind_sequence.len(),
        "Preprocessing complete"
    );
    Ok(config)
}

/// One frame per non-empty line, each line `x,y,z`.
fn read_uniform_wind(path: &Path) -> Result<Vec<WindFrame>, PreprocessError> {
    let text = fs::read_to_string(path).map_err(|source| PreprocessError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut frames = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let vector = parse_wind_vector(line).ok_or_else(|| PreprocessError::MalformedWind {
            path: PathBuf::from(path),
            line: i + 1,
        })?;
        frames.push(WindFrame::Uniform(vector));
    }
    Ok(frames)
}

fn parse_wind_vector(line: &str) -> Option<Vector3> {
    let mut components = line.split(',').map(|c| c.trim().parse::<f64>());
    let x = components.next()?.ok()?;
    let y = components.next()?.ok()?;
    let z = components.next()?.ok()?;
    if components.next().is_some() {
        return None;
    }
    Some(Vector3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn metadata_with_model(root: &Path) -> EnvironmentConfigMetadata {
        let model = root.join("walls.stl");
        fs::write(&model, "solid walls\nendsolid walls\n").unwrap();
        let mut metadata = EnvironmentConfigMetadata::new(root);
        metadata.env_models = vec![model];
        metadata
    }

    #[test]
    #[traced_test]
    fn test_no_wind_files_is_calm() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = metadata_with_model(dir.path());

        let config = preprocess(&metadata).unwrap();
        assert_eq!(config.wind_sequence.frames(), &[WindFrame::Calm]);
        assert_eq!(config.environment.cell_size, 0.1);
        assert!(logs_contain("assuming still air"));
    }

    #[test]
    fn test_snapshot_wind_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = metadata_with_model(dir.path());
        for i in 0..3 {
            fs::write(dir.path().join(format!("wind_{i}.csv")), "").unwrap();
        }
        metadata.unprocessed_wind_files = Some(dir.path().join("wind"));

        let config = preprocess(&metadata).unwrap();
        assert_eq!(config.wind_sequence.len(), 3);
        assert_eq!(
            config.wind_sequence.current(),
            &WindFrame::Snapshot(dir.path().join("wind_0.csv"))
        );
    }

    #[test]
    fn test_uniform_wind_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = metadata_with_model(dir.path());
        fs::write(dir.path().join("wind_0.csv"), "1,0,0\n\n0.5, 0.5, 0\n").unwrap();
        metadata.unprocessed_wind_files = Some(dir.path().join("wind"));
        metadata.uniform_wind = true;

        let config = preprocess(&metadata).unwrap();
        assert_eq!(
            config.wind_sequence.frames(),
            &[
                WindFrame::Uniform(Vector3::new(1.0, 0.0, 0.0)),
                WindFrame::Uniform(Vector3::new(0.5, 0.5, 0.0)),
            ]
        );
    }

    #[test]
    fn test_uniform_wind_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = metadata_with_model(dir.path());
        metadata.uniform_wind = true;
        metadata.unprocessed_wind_files = Some(dir.path().join("wind"));

        assert!(matches!(
            preprocess(&metadata),
            Err(PreprocessError::MissingWindFiles(_))
        ));
    }

    #[test]
    fn test_malformed_uniform_wind() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = metadata_with_model(dir.path());
        fs::write(dir.path().join("wind_0.csv"), "1,0,0\n1,0\n").unwrap();
        metadata.unprocessed_wind_files = Some(dir.path().join("wind"));
        metadata.uniform_wind = true;

        match preprocess(&metadata) {
            Err(PreprocessError::MalformedWind { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedWind, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_missing_models_and_bad_cell_size() {
        let dir = tempfile::tempdir().unwrap();
        let empty = EnvironmentConfigMetadata::new(dir.path());
        assert!(matches!(
            preprocess(&empty),
            Err(PreprocessError::NoEnvironmentModels)
        ));

        let mut metadata = metadata_with_model(dir.path());
        metadata.cell_size = 0.0;
        assert!(matches!(
            preprocess(&metadata),
            Err(PreprocessError::InvalidCellSize(_))
        ));
        metadata.cell_size = f64::NAN;
        assert!(matches!(
            preprocess(&metadata),
            Err(PreprocessError::InvalidCellSize(_))
        ));
    }
}
