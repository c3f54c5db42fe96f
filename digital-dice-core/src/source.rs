//! Random variable sources: one distribution plus a fixed count of events per trial.
//!
//! A source never owns an engine. Every draw borrows the caller's [`SimRng`],
//! so several sources can share one advancing stream and the whole run stays
//! reproducible from a single seed.
//!
//! ```
//! use digital_dice_core::{RandomVariableSource, SimRng};
//!
//! let two_dice = RandomVariableSource::uniform_integral(1, 6, 2).unwrap();
//! let mut rng = SimRng::default();
//! let mut roll = two_dice.load(&mut rng);
//! assert_eq!(roll.len(), 2);
//!
//! two_dice.reload(&mut rng, &mut roll);
//! assert!(roll.iter().all(|face| (1..=6).contains(&face)));
//! ```

use crate::distribution::{
    DistributionKind, IntegralDistribution, RealDistribution, SampleDistribution, SampleValue,
};
use crate::error::{DiceError, DiceResult};
use crate::rng::SimRng;
use crate::samples::TrialSampleSet;

/// How a source fills a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Structure {
    /// Independent draws; values may repeat.
    #[default]
    WithRepetition,
    /// A shuffled arrangement of `0..len`; every value appears once.
    WithoutRepetition,
}

/// One distribution together with the number of events drawn per trial.
#[derive(Debug, Clone)]
pub struct RandomVariableSource<D> {
    distribution: D,
    event_count: usize,
    structure: Structure,
}

impl<D: SampleDistribution> RandomVariableSource<D> {
    /// Pair an already validated distribution with an event count.
    ///
    /// No samples are drawn yet; call [`load`](Self::load) with an engine.
    pub fn new(distribution: D, event_count: usize) -> Self {
        tracing::debug!(
            kind = %distribution.kind(),
            event_count,
            "random variable source configured"
        );
        Self {
            distribution,
            event_count,
            structure: Structure::WithRepetition,
        }
    }

    /// The underlying distribution.
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Kind of values this source produces.
    pub fn kind(&self) -> DistributionKind {
        match self.structure {
            Structure::WithRepetition => self.distribution.kind(),
            Structure::WithoutRepetition => DistributionKind::Permutation,
        }
    }

    /// Number of values drawn per trial.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// How sample sets are filled.
    pub fn structure(&self) -> Structure {
        self.structure
    }

    /// Draw one value.
    pub fn draw(&self, rng: &mut SimRng) -> D::Value {
        self.distribution.draw(rng)
    }

    /// Draw `event_count` fresh values into a new sample set.
    ///
    /// A permutation source loads `0..event_count` in shuffled order.
    pub fn load(&self, rng: &mut SimRng) -> TrialSampleSet<D::Value> {
        match self.structure {
            Structure::WithRepetition => {
                let values = (0..self.event_count)
                    .map(|_| self.distribution.draw(rng))
                    .collect();
                TrialSampleSet::from_values(values)
            }
            Structure::WithoutRepetition => {
                let mut values: Vec<D::Value> =
                    (0..self.event_count).map(D::Value::from_index).collect();
                rng.shuffle(&mut values);
                TrialSampleSet::from_values(values)
            }
        }
    }

    /// Overwrite every slot of `samples` with a fresh value.
    ///
    /// The length never changes. A permutation source reshuffles instead.
    pub fn reload(&self, rng: &mut SimRng, samples: &mut TrialSampleSet<D::Value>) {
        match self.structure {
            Structure::WithRepetition => {
                for slot in samples.slots_mut().iter_mut() {
                    *slot = self.distribution.draw(rng);
                }
            }
            Structure::WithoutRepetition => rng.shuffle(samples.slots_mut()),
        }
    }

    /// Overwrite only slot `index`, leaving every other slot untouched.
    pub fn reload_one(
        &self,
        rng: &mut SimRng,
        samples: &mut TrialSampleSet<D::Value>,
        index: usize,
    ) -> DiceResult<()> {
        self.require_repetition("reload_one")?;
        let len = samples.len();
        let slot = samples
            .slots_mut()
            .get_mut(index)
            .ok_or(DiceError::IndexOutOfRange { index, len })?;
        *slot = self.distribution.draw(rng);
        Ok(())
    }

    /// Draw one value and append it as a new last slot.
    pub fn append(
        &self,
        rng: &mut SimRng,
        samples: &mut TrialSampleSet<D::Value>,
    ) -> DiceResult<()> {
        self.require_repetition("append")?;
        let value = self.distribution.draw(rng);
        samples.slots_mut().push(value);
        Ok(())
    }

    /// Slide the window one step: drop the oldest slot and append a fresh draw.
    ///
    /// An empty set stays empty.
    pub fn advance(
        &self,
        rng: &mut SimRng,
        samples: &mut TrialSampleSet<D::Value>,
    ) -> DiceResult<()> {
        self.require_repetition("advance")?;
        let slots = samples.slots_mut();
        if let Some(last) = slots.len().checked_sub(1) {
            slots.rotate_left(1);
            slots[last] = self.distribution.draw(rng);
        }
        Ok(())
    }

    /// Sum of the current values of `samples`.
    pub fn sum(&self, samples: &TrialSampleSet<D::Value>) -> <D::Value as SampleValue>::Total {
        samples.sum()
    }

    fn require_repetition(&self, operation: &'static str) -> DiceResult<()> {
        match self.structure {
            Structure::WithRepetition => Ok(()),
            Structure::WithoutRepetition => Err(DiceError::UnsupportedOperation {
                operation,
                reason: "a permutation can only be reshuffled as a whole".to_string(),
            }),
        }
    }
}

impl RandomVariableSource<IntegralDistribution> {
    /// `event_count` independent draws from `[min, max]`.
    pub fn uniform_integral(min: i64, max: i64, event_count: usize) -> DiceResult<Self> {
        Ok(Self::new(IntegralDistribution::uniform(min, max)?, event_count))
    }

    /// `event_count` independent 0/1 draws with success `probability`.
    pub fn bernoulli(probability: f64, event_count: usize) -> DiceResult<Self> {
        Ok(Self::new(IntegralDistribution::bernoulli(probability)?, event_count))
    }

    /// `event_count` independent 0/1 draws with success `numerator / denominator`.
    pub fn bernoulli_ratio(
        numerator: u32,
        denominator: u32,
        event_count: usize,
    ) -> DiceResult<Self> {
        Ok(Self::new(
            IntegralDistribution::bernoulli_ratio(numerator, denominator)?,
            event_count,
        ))
    }

    /// `event_count` independent Poisson counts.
    pub fn poisson(mean: f64, event_count: usize) -> DiceResult<Self> {
        Ok(Self::new(IntegralDistribution::poisson(mean)?, event_count))
    }

    /// The values `0..len` in shuffled order; each reload reshuffles.
    pub fn permutation(len: usize) -> DiceResult<Self> {
        let kind = DistributionKind::Permutation;
        if len == 0 {
            return Err(DiceError::invalid_parameter(kind, "length must be positive"));
        }
        let max = i64::try_from(len - 1)
            .map_err(|_| DiceError::invalid_parameter(kind, format!("length {len} too large")))?;
        let mut source = Self::new(IntegralDistribution::uniform(0, max)?, len);
        source.structure = Structure::WithoutRepetition;
        Ok(source)
    }
}

impl RandomVariableSource<RealDistribution> {
    /// `event_count` independent draws from `[lb, ub)`.
    pub fn uniform_real(lb: f64, ub: f64, event_count: usize) -> DiceResult<Self> {
        Ok(Self::new(RealDistribution::uniform(lb, ub)?, event_count))
    }

    /// `event_count` independent exponential draws.
    pub fn exponential(lambda: f64, event_count: usize) -> DiceResult<Self> {
        Ok(Self::new(RealDistribution::exponential(lambda)?, event_count))
    }

    /// `event_count` independent piecewise-constant draws.
    pub fn piecewise_constant(
        intervals: Vec<f64>,
        weights: Vec<f64>,
        event_count: usize,
    ) -> DiceResult<Self> {
        Ok(Self::new(
            RealDistribution::piecewise_constant(intervals, weights)?,
            event_count,
        ))
    }

    /// `event_count` independent piecewise-linear draws.
    pub fn piecewise_linear(
        intervals: Vec<f64>,
        weights: Vec<f64>,
        event_count: usize,
    ) -> DiceResult<Self> {
        Ok(Self::new(
            RealDistribution::piecewise_linear(intervals, weights)?,
            event_count,
        ))
    }
}
