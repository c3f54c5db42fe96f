//! Expected steps to absorption, estimated by walking the chain.

use std::time::{Duration, Instant};

use tracing::instrument;

use digital_dice_core::{DEFAULT_SEED, DiceError, DiceResult, SimRng};

use super::absorbing::AbsorbingChain;
use crate::runner::{Simulation, SimulationReport};

/// Walks an [`AbsorbingChain`] from its initial state until absorption,
/// `trials` times per run, and averages the step counts.
///
/// A walk that starts on the absorbing state takes zero steps. There is no
/// step cap: a chain that cannot reach absorption never returns.
#[derive(Debug, Clone)]
pub struct AbsorbingChainWalker {
    chain: AbsorbingChain,
    trials: u64,
    label: String,
    rng: SimRng,
    cumulative_steps: u64,
    trials_run: u64,
    longest_walk: u64,
    wall_time: Duration,
}

impl AbsorbingChainWalker {
    /// Create a walker seeded with [`DEFAULT_SEED`].
    pub fn new(chain: AbsorbingChain, trials: u64) -> DiceResult<Self> {
        if trials == 0 {
            return Err(DiceError::InvalidParameter {
                distribution: "chain walker".to_string(),
                reason: "trial count must be positive".to_string(),
            });
        }
        tracing::debug!(
            states = chain.len(),
            initial = %chain.initial(),
            absorbing = %chain.absorbing(),
            trials,
            "chain walker configured"
        );
        Ok(Self {
            chain,
            trials,
            label: "expected steps".to_string(),
            rng: SimRng::new(DEFAULT_SEED),
            cumulative_steps: 0,
            trials_run: 0,
            longest_walk: 0,
            wall_time: Duration::ZERO,
        })
    }

    /// Use a different seed for the random stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SimRng::new(seed);
        self
    }

    /// Set the label shown next to the estimate.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The chain being walked.
    pub fn chain(&self) -> &AbsorbingChain {
        &self.chain
    }

    /// Walk the chain `trials` more times.
    #[instrument(skip_all, fields(label = %self.label, trials = self.trials))]
    pub fn run(&mut self) -> DiceResult<SimulationReport> {
        if self.trials_run > 0 {
            tracing::warn!(
                trials_run = self.trials_run,
                "continuing accumulation on a walker that already ran"
            );
        }

        let start = Instant::now();
        for _ in 0..self.trials {
            let steps = self.walk()?;
            self.cumulative_steps += steps;
            self.longest_walk = self.longest_walk.max(steps);
            self.trials_run += 1;
        }
        self.wall_time += start.elapsed();

        let report = self.report();
        tracing::info!(
            estimate = report.estimate(),
            longest_walk = self.longest_walk,
            wall_time = ?report.wall_time,
            "chain walk completed"
        );
        Ok(report)
    }

    /// One walk from the initial state; returns its step count.
    fn walk(&mut self) -> DiceResult<u64> {
        let absorbing = self.chain.absorbing();
        let mut current = self.chain.initial();
        let mut steps = 0;
        while current != absorbing {
            let state = self.chain.state(current).ok_or_else(|| {
                DiceError::invalid_state(format!("walk reached unknown state {current}"))
            })?;
            current = state.next_state(&mut self.rng);
            steps += 1;
        }
        tracing::trace!(steps, "walk absorbed");
        Ok(steps)
    }

    /// Total steps over every walk so far.
    pub fn cumulative_steps(&self) -> u64 {
        self.cumulative_steps
    }

    /// Walks completed so far.
    pub fn trials_run(&self) -> u64 {
        self.trials_run
    }

    /// Mean steps to absorption; 0.0 before the first walk.
    pub fn estimate(&self) -> f64 {
        self.report().estimate()
    }

    /// Most steps any single walk has taken.
    pub fn longest_walk(&self) -> u64 {
        self.longest_walk
    }

    /// The walker's random stream.
    pub fn rng(&self) -> &SimRng {
        &self.rng
    }

    /// Snapshot of the accumulated result.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            label: self.label.clone(),
            seed: self.rng.seed(),
            trials: self.trials_run,
            cumulative_total: self.cumulative_steps as f64,
            wall_time: self.wall_time,
        }
    }
}

impl Simulation for AbsorbingChainWalker {
    fn label(&self) -> &str {
        &self.label
    }

    fn run(&mut self) -> DiceResult<SimulationReport> {
        AbsorbingChainWalker::run(self)
    }

    fn report(&self) -> SimulationReport {
        AbsorbingChainWalker::report(self)
    }
}
