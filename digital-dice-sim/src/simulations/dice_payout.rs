//! A two-dice game whose payout flows through the interim value.
//!
//! Roll two dice. When they match, win twice the face value; otherwise win
//! nothing. The mean payout is `2 * (1 + 2 + ... + 6) / 36 = 7/6`.

use digital_dice_core::{DiceResult, IntegralDistribution, RandomVariableSource};

use crate::runner::{InterimPolicy, SimulationBuilder, SimulationEngine};

/// Mean payout per game.
pub fn dice_payout(trials: u64, seed: u64) -> DiceResult<SimulationEngine<IntegralDistribution>> {
    SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 2)?)
        .trials(trials)
        .seed(seed)
        .label("E(payout)")
        .interim(InterimPolicy::ResetEachTrial { baseline: 0.0 })
        .predicate_fn("matching_pair", |trial, payout| {
            let dice = trial.primary();
            if dice[0] != dice[1] {
                return false;
            }
            *payout = 2.0 * dice[0] as f64;
            true
        })
        .build()
}
