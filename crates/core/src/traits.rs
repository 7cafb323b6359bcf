//! Core traits for time-stepped simulations.

/// A simulation that advances in discrete steps of simulated time.
///
/// This is the only surface the orchestration loop depends on:
///
/// - **Synchronous**: `advance_timestep` blocks until the step is complete
/// - **Monotonic**: `current_time` never decreases across steps
/// - **Exclusively owned**: the runner holds the only `&mut` handle
///
/// # Example
///
/// ```ignore
/// while sim.current_time() < 300.0 {
///     sim.advance_timestep();
/// }
/// ```
pub trait TimeStepped {
    /// Elapsed simulated time, in seconds.
    fn current_time(&self) -> f64;

    /// Advance the simulation by one internal step.
    ///
    /// # Guarantees
    ///
    /// - Step N+1 only begins after step N has returned
    /// - `current_time()` afterwards is strictly greater than before
    fn advance_timestep(&mut self);

    /// Number of steps taken so far.
    fn iteration(&self) -> u64;
}
