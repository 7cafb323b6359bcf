//! Running simulations.
//!
//! A [`RunningSimulation`] owns one parameter set and one preprocessed
//! environment configuration, and advances simulated time in fixed steps.
//!
//! ```text
//!   SimulationParameters ──┐
//!                          ├──► RunningSimulation ──► advance_timestep() …
//!   EnvironmentConfiguration┘        │
//!                                    ├── clock: iteration × delta_time
//!                                    └── wind sequence cursor
//! ```

mod error;
mod metadata;
mod running;

pub use error::SimulationError;
pub use metadata::SimulationMetadata;
pub use running::RunningSimulation;
