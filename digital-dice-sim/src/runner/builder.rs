//! Builder for [`SimulationEngine`].

use digital_dice_core::{DiceError, DiceResult, RandomVariableSource, SampleDistribution};

use super::config::{InterimPolicy, ReloadPolicy, SimulationConfig};
use super::engine::SimulationEngine;
use super::predicate::{TrialContext, TrialPredicate, predicate_fn, try_predicate_fn};

/// Builder pattern for configuring a simulation engine.
///
/// Call [`secondary`](Self::secondary) before installing the predicate: it
/// changes the builder's secondary type, so a predicate set earlier is
/// dropped.
///
/// # Examples
///
/// ```ignore
/// let mut engine = SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 1)?)
///     .trials(100_000)
///     .label("P(six)")
///     .predicate_fn("rolled_six", |trial, _| trial.primary()[0] == 6)
///     .build()?;
/// let report = engine.run()?;
/// ```
pub struct SimulationBuilder<P: SampleDistribution, S: SampleDistribution = P> {
    config: SimulationConfig,
    primary: RandomVariableSource<P>,
    secondary: Option<RandomVariableSource<S>>,
    predicate: Option<Box<dyn TrialPredicate<P, S>>>,
}

impl<P: SampleDistribution + 'static> SimulationBuilder<P> {
    /// Start from a primary source and the default configuration.
    pub fn new(primary: RandomVariableSource<P>) -> Self {
        Self {
            config: SimulationConfig::default(),
            primary,
            secondary: None,
            predicate: None,
        }
    }
}

impl<P, S> SimulationBuilder<P, S>
where
    P: SampleDistribution + 'static,
    S: SampleDistribution + 'static,
{
    /// Add a secondary source, e.g. a threshold or a second random variable.
    pub fn secondary<S2>(self, secondary: RandomVariableSource<S2>) -> SimulationBuilder<P, S2>
    where
        S2: SampleDistribution + 'static,
    {
        if let Some(predicate) = &self.predicate {
            tracing::warn!(
                predicate = predicate.name(),
                "secondary source set after the predicate; predicate dropped"
            );
        }
        SimulationBuilder {
            config: self.config,
            primary: self.primary,
            secondary: Some(secondary),
            predicate: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of trials per `run`.
    pub fn trials(mut self, trials: u64) -> Self {
        self.config.trials = trials;
        self
    }

    /// Set the seed of the engine's random stream.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the label shown next to the estimate.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    /// Set how the interim value is initialised.
    pub fn interim(mut self, interim: InterimPolicy) -> Self {
        self.config.interim = interim;
        self
    }

    /// Set which sample sets are refreshed between trials.
    pub fn reload(mut self, reload: ReloadPolicy) -> Self {
        self.config.reload = reload;
        self
    }

    /// Install a predicate.
    pub fn predicate(mut self, predicate: impl TrialPredicate<P, S> + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Install a closure predicate.
    pub fn predicate_fn<F>(mut self, name: &str, evaluate: F) -> Self
    where
        F: FnMut(&mut TrialContext<'_, P, S>, &mut f64) -> bool + 'static,
    {
        self.predicate = Some(predicate_fn(name, evaluate));
        self
    }

    /// Install a fallible closure predicate; an error aborts the run.
    pub fn try_predicate_fn<F>(mut self, name: &str, evaluate: F) -> Self
    where
        F: FnMut(&mut TrialContext<'_, P, S>, &mut f64) -> DiceResult<bool> + 'static,
    {
        self.predicate = Some(try_predicate_fn(name, evaluate));
        self
    }

    /// Validate the configuration and draw the initial samples.
    pub fn build(self) -> DiceResult<SimulationEngine<P, S>> {
        let predicate = self
            .predicate
            .ok_or_else(|| DiceError::invalid_state("simulation has no predicate"))?;
        SimulationEngine::new(self.config, self.primary, self.secondary, predicate)
    }
}

#[cfg(test)]
mod tests {
    use digital_dice_core::RealDistribution;

    use super::*;

    fn coin() -> RandomVariableSource<digital_dice_core::IntegralDistribution> {
        RandomVariableSource::bernoulli(0.5, 2).expect("valid")
    }

    #[test]
    fn test_build_without_predicate_fails() {
        let result = SimulationBuilder::new(coin()).build();
        assert!(matches!(result, Err(DiceError::InvalidState { .. })));
    }

    #[test]
    fn test_zero_trials_rejected_at_build() {
        let result = SimulationBuilder::new(coin())
            .trials(0)
            .predicate_fn("any", |_, _| true)
            .build();
        assert!(matches!(result, Err(DiceError::InvalidParameter { .. })));
    }

    #[test]
    fn test_settings_reach_engine() {
        let engine = SimulationBuilder::new(coin())
            .trials(42)
            .seed(9)
            .label("heads")
            .reload(ReloadPolicy::Both)
            .predicate_fn("heads", |trial, _| trial.primary()[0] == 1)
            .build()
            .expect("build");
        assert_eq!(engine.config().trials, 42);
        assert_eq!(engine.config().seed, 9);
        assert_eq!(engine.config().label, "heads");
        assert_eq!(engine.predicate_name(), "heads");
        assert_eq!(engine.primary_samples().len(), 2);
        assert!(engine.secondary_samples().is_none());
    }

    #[test]
    fn test_initial_samples_drawn_primary_first() {
        let engine = SimulationBuilder::new(coin())
            .secondary(
                RandomVariableSource::<RealDistribution>::uniform_real(0.0, 1.0, 3)
                    .expect("valid"),
            )
            .predicate_fn("noop", |_, _| false)
            .build()
            .expect("build");
        assert_eq!(engine.rng().draw_count(), 5);
        assert_eq!(engine.secondary_samples().map(|s| s.len()), Some(3));
    }

    #[test]
    fn test_secondary_drops_earlier_predicate() {
        let result = SimulationBuilder::new(coin())
            .predicate_fn("early", |_, _| true)
            .secondary(coin())
            .build();
        assert!(result.is_err());
    }
}
