//! The trial loop shared by every Monte Carlo estimate.
//!
//! Each trial runs to completion before the next begins:
//!
//! ```text
//!   reset interim ──> evaluate predicate ──> accumulate if met ──> reload samples
//!        ^                                                            │
//!        └──────────────────────── next trial ◄───────────────────────┘
//! ```
//!
//! Trial N+1 only consumes draws made strictly after trial N's, so a fixed
//! seed and trial count reproduce the same cumulative total bit for bit.

use std::time::{Duration, Instant};

use tracing::instrument;

use digital_dice_core::{
    DiceError, DiceResult, RandomVariableSource, SampleDistribution, SimRng, TrialSampleSet,
};

use super::config::{InterimPolicy, ReloadPolicy, SimulationConfig};
use super::predicate::{TrialContext, TrialPredicate};
use super::report::SimulationReport;
use super::simulation::Simulation;

/// A source together with the sample set it refreshes.
#[derive(Debug, Clone)]
pub(crate) struct SampleChannel<D: SampleDistribution> {
    pub(crate) source: RandomVariableSource<D>,
    pub(crate) samples: TrialSampleSet<D::Value>,
}

impl<D: SampleDistribution> SampleChannel<D> {
    pub(crate) fn load(source: RandomVariableSource<D>, rng: &mut SimRng) -> Self {
        let samples = source.load(rng);
        Self { source, samples }
    }

    pub(crate) fn reload(&mut self, rng: &mut SimRng) {
        self.source.reload(rng, &mut self.samples);
    }

    pub(crate) fn reload_one(&mut self, rng: &mut SimRng, index: usize) -> DiceResult<()> {
        self.source.reload_one(rng, &mut self.samples, index)
    }

    pub(crate) fn append(&mut self, rng: &mut SimRng) -> DiceResult<()> {
        self.source.append(rng, &mut self.samples)
    }
}

/// Drives repeated trials of one or two random variable sources.
///
/// Built with [`SimulationBuilder`](super::SimulationBuilder).
///
/// # Repeated runs
///
/// [`run`](Self::run) is not idempotent. A second call executes another
/// `trials` trials and keeps adding to the same cumulative total; the
/// estimate then covers every trial run so far. Build a fresh engine for an
/// independent estimate.
pub struct SimulationEngine<P: SampleDistribution, S: SampleDistribution = P> {
    config: SimulationConfig,
    rng: SimRng,
    primary: SampleChannel<P>,
    secondary: Option<SampleChannel<S>>,
    predicate: Box<dyn TrialPredicate<P, S>>,
    cumulative_total: f64,
    interim_value: f64,
    trials_run: u64,
    wall_time: Duration,
}

impl<P: SampleDistribution, S: SampleDistribution> SimulationEngine<P, S> {
    /// Assemble an engine, drawing the initial samples (primary first).
    pub(crate) fn new(
        config: SimulationConfig,
        primary: RandomVariableSource<P>,
        secondary: Option<RandomVariableSource<S>>,
        predicate: Box<dyn TrialPredicate<P, S>>,
    ) -> DiceResult<Self> {
        config.validate()?;
        let mut rng = SimRng::new(config.seed);
        let primary = SampleChannel::load(primary, &mut rng);
        let secondary = secondary.map(|source| SampleChannel::load(source, &mut rng));

        tracing::debug!(
            label = %config.label,
            predicate = predicate.name(),
            primary = %primary.source.kind(),
            secondary = ?secondary.as_ref().map(|c| c.source.kind()),
            trials = config.trials,
            seed = config.seed,
            "simulation engine built"
        );

        Ok(Self {
            interim_value: config.interim.initial_value(),
            config,
            rng,
            primary,
            secondary,
            predicate,
            cumulative_total: 0.0,
            trials_run: 0,
            wall_time: Duration::ZERO,
        })
    }

    /// Execute `trials` trials and return the report so far.
    ///
    /// A predicate error stops the run at the failing trial and is returned
    /// as [`DiceError::TrialAborted`]; the totals then only cover the trials
    /// that completed and should not be read as an estimate. Predicate panics
    /// are not caught.
    #[instrument(skip_all, fields(label = %self.config.label, trials = self.config.trials))]
    pub fn run(&mut self) -> DiceResult<SimulationReport> {
        if self.trials_run > 0 {
            tracing::warn!(
                trials_run = self.trials_run,
                "continuing accumulation on an engine that already ran"
            );
        }

        let start = Instant::now();
        let outcome = self.run_trials();
        self.wall_time += start.elapsed();
        outcome?;

        let report = self.report();
        tracing::info!(
            estimate = report.estimate(),
            trials = report.trials,
            wall_time = ?report.wall_time,
            "simulation completed"
        );
        Ok(report)
    }

    fn run_trials(&mut self) -> DiceResult<()> {
        for _ in 0..self.config.trials {
            if let InterimPolicy::ResetEachTrial { baseline } = self.config.interim {
                self.interim_value = baseline;
            }

            let trial = self.trials_run;
            let mut ctx = TrialContext {
                trial,
                rng: &mut self.rng,
                primary: &mut self.primary,
                secondary: self.secondary.as_mut(),
            };
            let met = self
                .predicate
                .evaluate(&mut ctx, &mut self.interim_value)
                .map_err(|source| DiceError::TrialAborted {
                    trial,
                    source: Box::new(source),
                })?;

            if met {
                self.cumulative_total += self.interim_value;
            }

            self.primary.reload(&mut self.rng);
            if self.config.reload == ReloadPolicy::Both {
                if let Some(secondary) = self.secondary.as_mut() {
                    secondary.reload(&mut self.rng);
                }
            }
            self.trials_run += 1;
        }
        Ok(())
    }

    /// Snapshot of the accumulated result.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            label: self.config.label.clone(),
            seed: self.config.seed,
            trials: self.trials_run,
            cumulative_total: self.cumulative_total,
            wall_time: self.wall_time,
        }
    }

    /// Cumulative total over every trial run so far.
    pub fn cumulative_total(&self) -> f64 {
        self.cumulative_total
    }

    /// Number of trials run so far, across all `run` calls.
    pub fn trials_run(&self) -> u64 {
        self.trials_run
    }

    /// Cumulative total divided by trials run; 0.0 before the first trial.
    pub fn estimate(&self) -> f64 {
        self.report().estimate()
    }

    /// Current interim value.
    pub fn interim_value(&self) -> f64 {
        self.interim_value
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Name of the installed predicate.
    pub fn predicate_name(&self) -> &str {
        self.predicate.name()
    }

    /// Samples the next trial will see.
    pub fn primary_samples(&self) -> &TrialSampleSet<P::Value> {
        &self.primary.samples
    }

    /// Secondary samples, if any.
    pub fn secondary_samples(&self) -> Option<&TrialSampleSet<S::Value>> {
        self.secondary.as_ref().map(|c| &c.samples)
    }

    /// Mutable secondary samples, e.g. to install a deterministic state
    /// vector with [`TrialSampleSet::set_from_external`] before a run.
    pub fn secondary_samples_mut(&mut self) -> Option<&mut TrialSampleSet<S::Value>> {
        self.secondary.as_mut().map(|c| &mut c.samples)
    }

    /// The engine's random stream.
    pub fn rng(&self) -> &SimRng {
        &self.rng
    }
}

impl<P: SampleDistribution, S: SampleDistribution> Simulation for SimulationEngine<P, S> {
    fn label(&self) -> &str {
        &self.config.label
    }

    fn run(&mut self) -> DiceResult<SimulationReport> {
        SimulationEngine::run(self)
    }

    fn report(&self) -> SimulationReport {
        SimulationEngine::report(self)
    }
}
