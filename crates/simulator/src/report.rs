//! Run results.

use std::fmt;
use std::time::Duration;

/// Outcome of the stepping loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Simulated time when the loop ended.
    pub final_time: f64,

    /// Steps taken by this loop.
    pub steps: u64,

    /// Whether `final_time` reached the stopping time.
    pub reached_stop_time: bool,
}

/// Report for a complete run.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    /// Configuration directory name.
    pub config_name: String,

    /// Simulation that was run.
    pub simulation_name: String,

    /// Requested stopping time.
    pub stop_time: f64,

    /// Simulated time when the run ended.
    pub final_time: f64,

    /// Total steps taken.
    pub steps: u64,

    /// Whether the stopping time was reached.
    pub reached_stop_time: bool,

    /// Wind frame active at the end of the run.
    pub final_wind_frame: usize,

    /// Wall-clock time spent stepping.
    pub wall_time: Duration,
}

impl SimulationReport {
    /// Simulated seconds per wall-clock second.
    pub fn speedup(&self) -> f64 {
        let wall = self.wall_time.as_secs_f64();
        if wall > 0.0 {
            self.final_time / wall
        } else {
            f64::INFINITY
        }
    }

    /// Print a short summary to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} / {} ===", self.config_name, self.simulation_name)?;
        writeln!(f, "Simulated time: {:.2}s (stop at {:.2}s)", self.final_time, self.stop_time)?;
        writeln!(f, "Steps:          {}", self.steps)?;
        writeln!(f, "Wind frame:     {}", self.final_wind_frame)?;
        write!(f, "Wall time:      {:?}", self.wall_time)
    }
}
