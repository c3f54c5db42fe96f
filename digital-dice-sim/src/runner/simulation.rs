//! The interface shared by everything that produces an estimate.

use digital_dice_core::DiceResult;

use super::report::SimulationReport;

/// A runnable Monte Carlo estimate.
///
/// Implemented by [`SimulationEngine`](super::SimulationEngine) and
/// [`AbsorbingChainWalker`](crate::chain::AbsorbingChainWalker), so drivers and
/// [`run_partitioned`](super::run_partitioned) treat both alike.
pub trait Simulation {
    /// Label attached to the estimate.
    fn label(&self) -> &str;

    /// Run the configured number of trials, accumulating onto earlier runs.
    fn run(&mut self) -> DiceResult<SimulationReport>;

    /// Report of everything run so far.
    fn report(&self) -> SimulationReport;
}
