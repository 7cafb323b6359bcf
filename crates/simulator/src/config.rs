//! Configuration types for the simulator.

use std::path::PathBuf;

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Environment configuration directory.
    pub config_dir: PathBuf,

    /// Name of the simulation under `simulations/` to run.
    pub simulation_name: String,

    /// Simulated time to run until, in seconds.
    pub stop_time: f64,

    /// Give up after this many steps even if `stop_time` was not reached.
    pub max_steps: Option<u64>,

    /// Simulated seconds between progress log lines.
    pub progress_interval: f64,
}

impl SimulatorConfig {
    /// Default simulation name.
    pub const DEFAULT_SIMULATION: &'static str = "sim1";

    /// Default stopping time, in simulated seconds.
    pub const DEFAULT_STOP_TIME: f64 = 300.0;

    /// Create a new simulator configuration for a directory.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            simulation_name: Self::DEFAULT_SIMULATION.to_string(),
            stop_time: Self::DEFAULT_STOP_TIME,
            max_steps: None,
            progress_interval: 60.0,
        }
    }

    /// Set the simulation to run.
    pub fn with_simulation(mut self, name: impl Into<String>) -> Self {
        self.simulation_name = name.into();
        self
    }

    /// Set the stopping time.
    pub fn with_stop_time(mut self, stop_time: f64) -> Self {
        self.stop_time = stop_time;
        self
    }

    /// Cap the number of steps.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Set how often progress is logged.
    pub fn with_progress_interval(mut self, seconds: f64) -> Self {
        self.progress_interval = seconds;
        self
    }
}
