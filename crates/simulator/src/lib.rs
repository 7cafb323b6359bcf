//! Plume Simulator
//!
//! Drives one named simulation from an environment configuration directory
//! to a stopping time.
//!
//! # Architecture
//!
//! A run is four stages, each with its own failure mode in [`RunError`]:
//!
//! 1. **Read**: load `config.yaml` and `simulations/*/sim.yaml`
//! 2. **Preprocess**: validate the environment and assemble the wind sequence
//! 3. **Lookup**: pick the named parameter set
//! 4. **Step**: advance the simulation until the stopping time is reached
//!
//! # Example
//!
//! ```ignore
//! use plume_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new("environment_configurations/config1")
//!     .with_simulation("sim1")
//!     .with_stop_time(300.0);
//!
//! let report = Simulator::new(config).run()?;
//! assert!(report.final_time >= 300.0);
//! println!("simulation finished!");
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::SimulatorConfig;
pub use error::RunError;
pub use report::{RunSummary, SimulationReport};
pub use runner::{run_until, run_until_with_callback, Simulator};
