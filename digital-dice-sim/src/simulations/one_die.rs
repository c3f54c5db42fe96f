//! Probability that a fair die shows six.

use digital_dice_core::{DiceResult, IntegralDistribution, RandomVariableSource};

use crate::runner::{SimulationBuilder, SimulationEngine};

/// Face counted as a hit.
pub const TARGET_FACE: i64 = 6;

/// One die per trial; a trial counts when it shows [`TARGET_FACE`].
pub fn one_die(trials: u64, seed: u64) -> DiceResult<SimulationEngine<IntegralDistribution>> {
    SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 1)?)
        .trials(trials)
        .seed(seed)
        .label("P(six)")
        .predicate_fn("rolled_six", |trial, _| trial.primary()[0] == TARGET_FACE)
        .build()
}
