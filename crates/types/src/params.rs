//! Per-run simulation parameters.

use crate::{GasSource, LoopConfig};
use serde::{Deserialize, Serialize};

/// Parameters of one named simulation, read from `simulations/<name>/sim.yaml`.
///
/// Missing keys fall back to [`SimulationParameters::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParameters {
    pub source: GasSource,

    /// Simulated seconds per step.
    pub delta_time: f64,

    /// Simulated seconds each wind frame stays active.
    pub wind_iteration_delta_time: f64,

    /// Kelvin.
    pub temperature: f64,

    /// Atmospheres.
    pub pressure: f64,

    /// Growth rate of the filament sigma, in cm²/s.
    pub filament_growth_gamma: f64,

    /// Standard deviation of the jitter added to filament positions, in m.
    pub filament_noise_std: f64,

    /// Capacity hint for the filament store.
    pub expected_num_iterations: usize,

    pub wind_loop: LoopConfig,

    pub save_results: bool,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            source: GasSource::default(),
            delta_time: 0.1,
            wind_iteration_delta_time: 1.0,
            temperature: 298.0,
            pressure: 1.0,
            filament_growth_gamma: 10.0,
            filament_noise_std: 0.1,
            expected_num_iterations: 600,
            wind_loop: LoopConfig::default(),
            save_results: false,
        }
    }
}

impl SimulationParameters {
    /// Set the step length in simulated seconds.
    pub fn with_delta_time(mut self, delta_time: f64) -> Self {
        self.delta_time = delta_time;
        self
    }

    /// Set how long each wind frame stays active.
    pub fn with_wind_iteration_delta_time(mut self, seconds: f64) -> Self {
        self.wind_iteration_delta_time = seconds;
        self
    }

    /// Set the wind looping window.
    pub fn with_wind_loop(mut self, wind_loop: LoopConfig) -> Self {
        self.wind_loop = wind_loop;
        self
    }
}
