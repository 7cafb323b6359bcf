//! Simulation runner.

use crate::config::SimulatorConfig;
use crate::error::RunError;
use crate::report::{RunSummary, SimulationReport};
use plume_core::TimeStepped;
use plume_environment::{preprocess, EnvironmentConfigMetadata};
use plume_simulation::RunningSimulation;
use std::time::Instant;
use tracing::{info, warn};

/// Advance `sim` until its time reaches `stop_time`.
///
/// Stops early only if `max_steps` is set and exhausted.
pub fn run_until<S>(sim: &mut S, stop_time: f64, max_steps: Option<u64>) -> RunSummary
where
    S: TimeStepped + ?Sized,
{
    run_until_with_callback(sim, stop_time, max_steps, |_| {})
}

/// Like [`run_until`], calling `on_step` after every step.
pub fn run_until_with_callback<S, F>(
    sim: &mut S,
    stop_time: f64,
    max_steps: Option<u64>,
    mut on_step: F,
) -> RunSummary
where
    S: TimeStepped + ?Sized,
    F: FnMut(&S),
{
    let mut steps = 0u64;
    while sim.current_time() < stop_time {
        if max_steps.is_some_and(|max| steps >= max) {
            break;
        }
        sim.advance_timestep();
        steps += 1;
        on_step(sim);
    }

    let final_time = sim.current_time();
    RunSummary {
        final_time,
        steps,
        reached_stop_time: final_time >= stop_time,
    }
}

/// First multiple of `interval` strictly after `time`.
///
/// `None` disables progress logging: the interval is not a positive finite number.
fn next_progress_after(time: f64, interval: f64) -> Option<f64> {
    if !(interval.is_finite() && interval > 0.0) {
        return None;
    }
    let next = ((time / interval).floor() + 1.0) * interval;
    Some(next)
}

/// Runs one named simulation from a configuration directory.
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Read, preprocess, look up the simulation and construct it, without stepping.
    pub fn prepare(&self) -> Result<(EnvironmentConfigMetadata, RunningSimulation), RunError> {
        let mut metadata = EnvironmentConfigMetadata::new(&self.config.config_dir);
        metadata.read_directory()?;

        let env_config = preprocess(&metadata)?;
        let params = metadata.simulation(&self.config.simulation_name)?.clone();
        let simulation = RunningSimulation::new(params, env_config)?;

        Ok((metadata, simulation))
    }

    /// Run the configured simulation to its stopping time.
    pub fn run(&self) -> Result<SimulationReport, RunError> {
        let (metadata, mut simulation) = self.prepare()?;

        info!(
            config = %metadata.name(),
            simulation = %self.config.simulation_name,
            stop_time = self.config.stop_time,
            "Starting simulation"
        );

        let interval = self.config.progress_interval;
        let mut next_progress = next_progress_after(0.0, interval);
        let started = Instant::now();
        let summary = run_until_with_callback(
            &mut simulation,
            self.config.stop_time,
            self.config.max_steps,
            |sim| {
                let time = sim.current_time();
                if next_progress.is_some_and(|next| time >= next) {
                    info!(
                        time,
                        steps = sim.iteration(),
                        wind_frame = sim.wind_sequence().current_index(),
                        "Progress"
                    );
                    next_progress = next_progress_after(time, interval);
                }
            },
        );
        let wall_time = started.elapsed();

        if summary.reached_stop_time {
            info!(
                final_time = summary.final_time,
                steps = summary.steps,
                ?wall_time,
                "Simulation reached stop time"
            );
        } else {
            warn!(
                final_time = summary.final_time,
                steps = summary.steps,
                stop_time = self.config.stop_time,
                "Step limit hit before stop time"
            );
        }

        Ok(SimulationReport {
            config_name: metadata.name(),
            simulation_name: self.config.simulation_name.clone(),
            stop_time: self.config.stop_time,
            final_time: summary.final_time,
            steps: summary.steps,
            reached_stop_time: summary.reached_stop_time,
            final_wind_frame: simulation.wind_sequence().current_index(),
            wall_time,
        })
    }
}
