//! A die against a second random variable.
//!
//! Both variants use a secondary source. With a fixed threshold the
//! secondary set is installed once and never reloaded; with dual reload
//! both dice are rolled fresh every trial.

use digital_dice_core::{DiceError, DiceResult, IntegralDistribution, RandomVariableSource};

use crate::runner::{ReloadPolicy, SimulationBuilder, SimulationEngine};

fn die() -> DiceResult<RandomVariableSource<IntegralDistribution>> {
    RandomVariableSource::uniform_integral(1, 6, 1)
}

/// P(die > `threshold`), the threshold held in the secondary set.
pub fn duel_fixed_threshold(
    threshold: i64,
    trials: u64,
    seed: u64,
) -> DiceResult<SimulationEngine<IntegralDistribution>> {
    let mut engine = SimulationBuilder::new(die()?)
        .secondary(die()?)
        .trials(trials)
        .seed(seed)
        .label(format!("P(die > {threshold})"))
        .predicate_fn("beats_threshold", beats_secondary)
        .build()?;
    engine
        .secondary_samples_mut()
        .ok_or_else(|| DiceError::invalid_state("duel has no secondary samples"))?
        .set_from_external(&[threshold]);
    Ok(engine)
}

/// P(first die > second die), both rerolled every trial.
pub fn duel_dual_reload(
    trials: u64,
    seed: u64,
) -> DiceResult<SimulationEngine<IntegralDistribution>> {
    SimulationBuilder::new(die()?)
        .secondary(die()?)
        .trials(trials)
        .seed(seed)
        .reload(ReloadPolicy::Both)
        .label("P(first > second)")
        .predicate_fn("beats_other_die", beats_secondary)
        .build()
}

fn beats_secondary(
    trial: &mut crate::runner::TrialContext<'_, IntegralDistribution, IntegralDistribution>,
    _: &mut f64,
) -> bool {
    match trial.secondary() {
        Some(other) => trial.primary()[0] > other[0],
        None => false,
    }
}
