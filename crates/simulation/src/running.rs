//! Fixed-timestep running simulation.

use crate::error::SimulationError;
use crate::metadata::SimulationMetadata;
use plume_core::TimeStepped;
use plume_environment::{EnvironmentConfiguration, WindFrame, WindSequence};
use plume_types::SimulationParameters;
use tracing::{debug, info};

/// Absorbs rounding in `iteration * delta_time` when checking wind boundaries.
const WIND_BOUNDARY_EPSILON: f64 = 1e-9;

/// A gas-dispersion simulation in progress.
///
/// Simulated time is `iteration × delta_time`, recomputed on every query so
/// long runs do not accumulate rounding error. The wind sequence moves to its
/// next frame every `wind_iteration_delta_time` simulated seconds.
#[derive(Debug, Clone)]
pub struct RunningSimulation {
    parameters: SimulationParameters,
    config: EnvironmentConfiguration,
    metadata: SimulationMetadata,
    iteration: u64,
    wind_advances: u64,
}

impl RunningSimulation {
    /// Build a simulation from a parameter set and a preprocessed configuration.
    ///
    /// The parameter set's wind loop window is applied to the configuration's
    /// wind sequence, which starts from frame 0.
    pub fn new(
        parameters: SimulationParameters,
        config: EnvironmentConfiguration,
    ) -> Result<Self, SimulationError> {
        check_step("deltaTime", parameters.delta_time)?;
        check_step("windIterationDeltaTime", parameters.wind_iteration_delta_time)?;

        let mut config = config;
        config.wind_sequence.set_loop_config(parameters.wind_loop);
        config.wind_sequence.reset();

        let metadata = SimulationMetadata::from_parameters(&parameters);

        info!(
            gas = %metadata.gas_type,
            heavier_than_air = metadata.gas_type.is_heavier_than_air(),
            source = %parameters.source.shape.kind(),
            position = %metadata.source_position,
            delta_time = parameters.delta_time,
            wind_frames = config.wind_sequence.len(),
            "Created running simulation"
        );

        Ok(Self {
            parameters,
            config,
            metadata,
            iteration: 0,
            wind_advances: 0,
        })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn configuration(&self) -> &EnvironmentConfiguration {
        &self.config
    }

    pub fn metadata(&self) -> &SimulationMetadata {
        &self.metadata
    }

    pub fn wind_sequence(&self) -> &WindSequence {
        &self.config.wind_sequence
    }

    /// The wind frame active at the current time.
    pub fn current_wind(&self) -> &WindFrame {
        self.config.wind_sequence.current()
    }

    /// Number of wind frames that should have elapsed by the current time.
    fn wind_advances_due(&self) -> u64 {
        let elapsed = self.current_time() / self.parameters.wind_iteration_delta_time;
        (elapsed + WIND_BOUNDARY_EPSILON).floor() as u64
    }
}

impl TimeStepped for RunningSimulation {
    fn current_time(&self) -> f64 {
        self.iteration as f64 * self.parameters.delta_time
    }

    fn advance_timestep(&mut self) {
        self.iteration += 1;

        let due = self.wind_advances_due();
        if due > self.wind_advances {
            let steps = usize::try_from(due - self.wind_advances).unwrap_or(usize::MAX);
            self.config.wind_sequence.advance_by(steps);
            self.wind_advances = due;
            debug!(
                time = self.current_time(),
                steps,
                frame = self.config.wind_sequence.current_index(),
                "Advanced wind frame"
            );
        }
    }

    fn iteration(&self) -> u64 {
        self.iteration
    }
}

fn check_step(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidTimestep { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_environment::EnvironmentDescription;
    use plume_types::{LoopConfig, Vector3};

    fn config_with_frames(n: usize) -> EnvironmentConfiguration {
        let frames = (0..n)
            .map(|i| WindFrame::Uniform(Vector3::new(i as f64, 0.0, 0.0)))
            .collect();
        EnvironmentConfiguration {
            environment: EnvironmentDescription {
                models: Vec::new(),
                outlet_models: Vec::new(),
                cell_size: 0.1,
                empty_point: Vector3::ZERO,
            },
            wind_sequence: WindSequence::new(frames, LoopConfig::default()),
        }
    }

    #[test]
    fn test_time_does_not_drift() {
        let params = SimulationParameters::default().with_delta_time(0.1);
        let mut sim = RunningSimulation::new(params, config_with_frames(1)).unwrap();

        for _ in 0..3000 {
            sim.advance_timestep();
        }
        assert_eq!(sim.iteration(), 3000);
        assert!((sim.current_time() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_advances_per_interval() {
        let params = SimulationParameters::default()
            .with_delta_time(0.25)
            .with_wind_iteration_delta_time(1.0);
        let mut sim = RunningSimulation::new(params, config_with_frames(4)).unwrap();

        let mut frames = Vec::new();
        for _ in 0..12 {
            sim.advance_timestep();
            frames.push(sim.wind_sequence().current_index());
        }
        assert_eq!(frames, vec![0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3]);
    }

    #[test]
    fn test_large_step_skips_frames() {
        let params = SimulationParameters::default()
            .with_delta_time(2.5)
            .with_wind_iteration_delta_time(1.0);
        let mut sim = RunningSimulation::new(params, config_with_frames(10)).unwrap();

        sim.advance_timestep();
        assert_eq!(sim.wind_sequence().current_index(), 2);
        sim.advance_timestep();
        assert_eq!(sim.wind_sequence().current_index(), 5);
    }

    #[test]
    fn test_wind_loop_from_parameters() {
        let params = SimulationParameters::default()
            .with_delta_time(1.0)
            .with_wind_loop(LoopConfig::between(1, 2));
        let mut sim = RunningSimulation::new(params, config_with_frames(4)).unwrap();

        let mut frames = Vec::new();
        for _ in 0..5 {
            sim.advance_timestep();
            frames.push(sim.wind_sequence().current_index());
        }
        assert_eq!(frames, vec![1, 2, 1, 2, 1]);
        assert_eq!(sim.current_wind(), &WindFrame::Uniform(Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_tiny_wind_interval_does_not_stall() {
        let params = SimulationParameters::default()
            .with_delta_time(1.0)
            .with_wind_iteration_delta_time(1e-12);

        let mut sim = RunningSimulation::new(params.clone(), config_with_frames(1)).unwrap();
        sim.advance_timestep();
        assert_eq!(sim.current_wind(), &WindFrame::Uniform(Vector3::ZERO));

        let mut sim = RunningSimulation::new(params.clone(), config_with_frames(4)).unwrap();
        for _ in 0..3 {
            sim.advance_timestep();
        }
        assert_eq!(sim.wind_sequence().current_index(), 3);

        let params = params.with_wind_loop(LoopConfig::between(1, 2));
        let mut sim = RunningSimulation::new(params, config_with_frames(4)).unwrap();
        for _ in 0..3 {
            sim.advance_timestep();
            assert!((1..=2).contains(&sim.wind_sequence().current_index()));
        }
    }

    #[test]
    fn test_rejects_non_positive_steps() {
        let params = SimulationParameters::default().with_delta_time(0.0);
        assert_eq!(
            RunningSimulation::new(params, config_with_frames(1)).unwrap_err(),
            SimulationError::InvalidTimestep {
                name: "deltaTime",
                value: 0.0
            }
        );

        let params = SimulationParameters::default().with_wind_iteration_delta_time(f64::INFINITY);
        assert!(RunningSimulation::new(params, config_with_frames(1)).is_err());
    }
}
