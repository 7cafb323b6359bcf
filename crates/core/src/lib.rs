//! Core abstractions for plume.
//!
//! The runner only ever sees a simulation through [`TimeStepped`], so the
//! stepping loop can be exercised against lightweight stand-ins in tests.

mod traits;

pub use traits::TimeStepped;
