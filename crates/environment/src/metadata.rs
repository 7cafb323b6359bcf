//! Configuration metadata read from a directory of YAML files.

use crate::error::MetadataError;
use crate::paths;
use crate::scene::PlaybackSceneMetadata;
use plume_types::{GasSource, SimulationParameters, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CONFIG_FILE: &str = "config.yaml";
pub(crate) const SIMULATIONS_DIR: &str = "simulations";
const SIMULATION_FILE: &str = "sim.yaml";
const SCENES_DIR: &str = "scenes";

/// Raw contents of an environment configuration directory, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfigMetadata {
    /// Directory this metadata is bound to.
    pub root_directory: PathBuf,

    /// Obstacle models (absolute `.stl` paths).
    pub env_models: Vec<PathBuf>,

    /// Outlet models (absolute `.stl` paths).
    pub outlet_models: Vec<PathBuf>,

    /// Grid cell edge length, in metres.
    pub cell_size: f64,

    /// A point known to be in free space.
    pub empty_point: Vector3,

    /// Treat each line of the first wind file as a uniform wind frame.
    pub uniform_wind: bool,

    /// Wind file prefix; files are named `<prefix>_<i>.csv`.
    pub unprocessed_wind_files: Option<PathBuf>,

    /// Named parameter sets found under `simulations/`.
    pub simulations: BTreeMap<String, SimulationParameters>,

    /// Playback scenes found under `scenes/`, keyed by file stem.
    pub scenes: BTreeMap<String, PlaybackSceneMetadata>,
}

/// On-disk shape of `config.yaml`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    models: Vec<String>,
    outlets_models: Vec<String>,
    unprocessed_wind_files: String,
    empty_point: Vector3,
    cell_size: f64,
    #[serde(rename = "uniformWind")]
    uniform_wind: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            outlets_models: Vec::new(),
            unprocessed_wind_files: String::new(),
            empty_point: Vector3::ZERO,
            cell_size: 0.1,
            uniform_wind: false,
        }
    }
}

impl EnvironmentConfigMetadata {
    /// Bind to a configuration directory. Nothing is read until [`read_directory`].
    ///
    /// [`read_directory`]: Self::read_directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let defaults = ConfigFile::default();
        Self {
            root_directory: directory.into(),
            env_models: Vec::new(),
            outlet_models: Vec::new(),
            cell_size: defaults.cell_size,
            empty_point: defaults.empty_point,
            uniform_wind: defaults.uniform_wind,
            unprocessed_wind_files: None,
            simulations: BTreeMap::new(),
            scenes: BTreeMap::new(),
        }
    }

    /// Populate this metadata from `config.yaml`, `simulations/*/sim.yaml` and
    /// `scenes/*.yaml`.
    ///
    /// Replaces anything read before. On error the metadata is left untouched.
    pub fn read_directory(&mut self) -> Result<(), MetadataError> {
        if !self.root_directory.is_dir() {
            return Err(MetadataError::NotFound(self.root_directory.clone()));
        }

        let config: ConfigFile = read_yaml(&self.config_file_path())?;
        let env_models = resolve_models(&config.models, &self.root_directory);
        let outlet_models = resolve_models(&config.outlets_models, &self.root_directory);

        let simulations_dir = self.root_directory.join(SIMULATIONS_DIR);
        let sim_dirs = paths::sorted_subdirectories(&simulations_dir).map_err(|source| {
            MetadataError::Io {
                path: simulations_dir.clone(),
                source,
            }
        })?;

        let mut simulations = BTreeMap::new();
        for dir in sim_dirs {
            let yaml_path = dir.join(SIMULATION_FILE);
            if !yaml_path.is_file() {
                debug!(dir = %dir.display(), "Skipping simulation folder without sim.yaml");
                continue;
            }
            let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                warn!(dir = %dir.display(), "Skipping simulation folder with a non UTF-8 name");
                continue;
            };

            let params: SimulationParameters = read_yaml(&yaml_path)?;
            info!(name, "Found simulation configuration");
            simulations.insert(name.to_string(), params);
        }

        let scenes_dir = self.root_directory.join(SCENES_DIR);
        let scene_files = paths::sorted_files_with_extension(&scenes_dir, "yaml").map_err(
            |source| MetadataError::Io {
                path: scenes_dir.clone(),
                source,
            },
        )?;

        let mut scenes = BTreeMap::new();
        for path in scene_files {
            let Some(name) = path.file_stem().and_then(|n| n.to_str()) else {
                warn!(path = %path.display(), "Skipping scene file with a non UTF-8 name");
                continue;
            };
            let scene = PlaybackSceneMetadata::read(&path, &self.root_directory)?;
            for missing in scene
                .simulation_names()
                .filter(|sim| !simulations.contains_key(*sim))
            {
                warn!(scene = name, simulation = missing, "Scene refers to an unknown simulation");
            }
            info!(name, "Found playback configuration");
            scenes.insert(name.to_string(), scene);
        }

        self.env_models = env_models;
        self.outlet_models = outlet_models;
        self.cell_size = config.cell_size;
        self.empty_point = config.empty_point;
        self.uniform_wind = config.uniform_wind;
        self.unprocessed_wind_files = match config.unprocessed_wind_files.as_str() {
            "" => None,
            prefix => Some(paths::make_absolute(Path::new(prefix), &self.root_directory)),
        };
        self.simulations = simulations;
        self.scenes = scenes;

        info!(
            config = %self.name(),
            env_models = self.env_models.len(),
            outlet_models = self.outlet_models.len(),
            simulations = self.simulations.len(),
            scenes = self.scenes.len(),
            "Read environment configuration metadata"
        );
        Ok(())
    }

    /// Look up a simulation parameter set by name.
    pub fn simulation(&self, name: &str) -> Result<&SimulationParameters, MetadataError> {
        self.simulations
            .get(name)
            .ok_or_else(|| MetadataError::UnknownSimulation {
                name: name.to_string(),
                available: self.simulations.keys().cloned().collect(),
            })
    }

    /// Final component of the root directory.
    pub fn name(&self) -> String {
        self.root_directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.root_directory.join(CONFIG_FILE)
    }

    pub fn simulation_file_path(&self, name: &str) -> PathBuf {
        self.root_directory
            .join(SIMULATIONS_DIR)
            .join(name)
            .join(SIMULATION_FILE)
    }

    pub fn scene_file_path(&self, name: &str) -> PathBuf {
        self.root_directory
            .join(SCENES_DIR)
            .join(format!("{name}.yaml"))
    }

    /// The numbered wind files for the configured prefix.
    pub fn wind_files(&self) -> Vec<PathBuf> {
        match &self.unprocessed_wind_files {
            Some(prefix) => paths::wind_file_sequence(prefix),
            None => Vec::new(),
        }
    }

    /// Write the environment part of this metadata to `config.yaml`.
    ///
    /// Paths under the root directory are stored relative to it.
    pub fn write_config(&self) -> Result<(), MetadataError> {
        let relative = |p: &PathBuf| {
            paths::relative_if_inside(p, &self.root_directory)
                .to_string_lossy()
                .into_owned()
        };

        let config = ConfigFile {
            models: self.env_models.iter().map(relative).collect(),
            outlets_models: self.outlet_models.iter().map(relative).collect(),
            unprocessed_wind_files: self
                .unprocessed_wind_files
                .as_ref()
                .map(relative)
                .unwrap_or_default(),
            empty_point: self.empty_point,
            cell_size: self.cell_size,
            uniform_wind: self.uniform_wind,
        };

        let path = self.config_file_path();
        write_yaml(&path, &config)?;
        info!(path = %path.display(), "Wrote configuration");
        Ok(())
    }

    /// Write a simulation parameter set to `simulations/<name>/sim.yaml`.
    pub fn write_simulation(
        &mut self,
        name: &str,
        params: SimulationParameters,
    ) -> Result<(), MetadataError> {
        let path = self.simulation_file_path(name);
        write_yaml(&path, &params)?;
        self.simulations.insert(name.to_string(), params);
        Ok(())
    }

    /// Write a playback scene to `scenes/<name>.yaml`.
    pub fn write_scene(
        &mut self,
        name: &str,
        scene: PlaybackSceneMetadata,
    ) -> Result<(), MetadataError> {
        scene.write(&self.scene_file_path(name))?;
        self.scenes.insert(name.to_string(), scene);
        Ok(())
    }

    /// Create a configuration skeleton at `directory` with one simulation, `sim1`,
    /// and one scene, `scene1`, that replays it.
    pub fn create_template(directory: impl Into<PathBuf>) -> Result<Self, MetadataError> {
        let mut metadata = Self::new(directory);
        info!(path = %metadata.root_directory.display(), "Creating environment configuration");

        metadata.write_config()?;

        let sim1 = SimulationParameters {
            source: GasSource::default(),
            save_results: true,
            ..Default::default()
        };
        metadata.write_simulation("sim1", sim1)?;

        let scene1 = PlaybackSceneMetadata::single(&metadata.root_directory, "sim1");
        metadata.write_scene("scene1", scene1)?;
        Ok(metadata)
    }
}

/// Keep entries that point at existing `.stl` files, resolved against `root`.
fn resolve_models(entries: &[String], root: &Path) -> Vec<PathBuf> {
    let mut models = Vec::new();
    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        // colour directives for visualization tools
        if entry.starts_with('!') {
            debug!(entry, "Ignoring model list directive");
            continue;
        }

        let path = paths::make_absolute(Path::new(entry), root);
        let is_stl = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"));
        if !is_stl || !path.is_file() {
            warn!(path = %path.display(), "Ignoring path, which is not a valid .stl model");
            continue;
        }
        models.push(path);
    }
    models
}

pub(crate) fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, MetadataError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MetadataError::NotFound(path.to_path_buf()),
        _ => MetadataError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_yaml::from_str(&text).map_err(|source| MetadataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), MetadataError> {
    let text = serde_yaml::to_string(value).map_err(|source| MetadataError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| MetadataError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
