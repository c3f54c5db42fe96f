//! Biased coin.

use digital_dice_core::{DiceResult, IntegralDistribution, RandomVariableSource};

use crate::runner::{SimulationBuilder, SimulationEngine};

/// One Bernoulli flip per trial; a trial counts when it lands on 1.
pub fn coin(
    probability: f64,
    trials: u64,
    seed: u64,
) -> DiceResult<SimulationEngine<IntegralDistribution>> {
    SimulationBuilder::new(RandomVariableSource::bernoulli(probability, 1)?)
        .trials(trials)
        .seed(seed)
        .label("P(heads)")
        .predicate_fn("heads", |trial, _| trial.primary()[0] == 1)
        .build()
}
