//! Playback scenes: sets of finished simulations replayed together.

use crate::error::MetadataError;
use crate::metadata::{read_yaml, write_yaml, SIMULATIONS_DIR};
use plume_types::LoopConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sub-directory of a simulation folder that holds its results.
const RESULTS_DIR: &str = "result";

/// One simulation taking part in a playback scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSimulation {
    /// Name of the simulation under `simulations/`.
    pub simulation: String,

    /// Where that simulation's results are stored.
    pub results_directory: PathBuf,

    /// RGB display colour of the gas, each channel in `0..=1`.
    pub gas_color: [f64; 3],
}

/// Contents of one `scenes/<name>.yaml` file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSceneMetadata {
    /// Iteration every simulation starts replaying from.
    pub initial_iteration: usize,

    pub playback_loop: LoopConfig,

    pub simulations: Vec<SceneSimulation>,
}

/// On-disk shape of a scene file.
#[derive(Debug, Serialize, Deserialize)]
struct SceneFile {
    #[serde(default)]
    initial_iteration: usize,
    #[serde(default)]
    playback_loop: LoopConfig,
    #[serde(default)]
    simulations: Vec<SceneEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneEntry {
    sim: String,
    #[serde(default = "default_gas_color")]
    gas_color: [f64; 3],
}

fn default_gas_color() -> [f64; 3] {
    [0.5, 0.5, 0.5]
}

/// `<root>/simulations/<simulation>/result`.
fn results_directory(root: &Path, simulation: &str) -> PathBuf {
    root.join(SIMULATIONS_DIR)
        .join(simulation)
        .join(RESULTS_DIR)
}

impl PlaybackSceneMetadata {
    /// A scene replaying a single simulation from its first iteration.
    pub fn single(root: &Path, simulation: &str) -> Self {
        Self {
            initial_iteration: 0,
            playback_loop: LoopConfig::default(),
            simulations: vec![SceneSimulation {
                simulation: simulation.to_string(),
                results_directory: results_directory(root, simulation),
                gas_color: default_gas_color(),
            }],
        }
    }

    /// Names of the simulations in this scene, in order.
    pub fn simulation_names(&self) -> impl Iterator<Item = &str> {
        self.simulations.iter().map(|s| s.simulation.as_str())
    }

    /// Read a scene file. Results directories are resolved against `root`.
    pub fn read(path: &Path, root: &Path) -> Result<Self, MetadataError> {
        let file: SceneFile = read_yaml(path)?;
        Ok(Self::from_file(file, root))
    }

    /// Write this scene to `path`, storing simulations by name.
    pub fn write(&self, path: &Path) -> Result<(), MetadataError> {
        let file = SceneFile {
            initial_iteration: self.initial_iteration,
            playback_loop: self.playback_loop,
            simulations: self
                .simulations
                .iter()
                .map(|s| SceneEntry {
                    sim: s.simulation.clone(),
                    gas_color: s.gas_color,
                })
                .collect(),
        };
        write_yaml(path, &file)
    }

    fn from_file(file: SceneFile, root: &Path) -> Self {
        Self {
            initial_iteration: file.initial_iteration,
            playback_loop: file.playback_loop,
            simulations: file
                .simulations
                .into_iter()
                .map(|entry| SceneSimulation {
                    results_directory: results_directory(root, &entry.sim),
                    simulation: entry.sim,
                    gas_color: entry.gas_color,
                })
                .collect(),
        }
    }
}
