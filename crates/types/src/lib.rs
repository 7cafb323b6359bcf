//! Core types for plume.
//!
//! Plain values shared by every other crate in the workspace: geometry,
//! gas species, emission sources and the per-run simulation parameters
//! read from `sim.yaml`.

mod gas;
mod loop_config;
mod params;
mod source;
mod vector;

pub use gas::{GasType, GAS_CONSTANT};
pub use loop_config::LoopConfig;
pub use params::SimulationParameters;
pub use source::{GasSource, SourceShape};
pub use vector::Vector3;
