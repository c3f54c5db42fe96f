//! Integer-valued distributions.

use rand::distr::{Bernoulli, Uniform};
use rand_distr::Poisson;

use super::{DistributionKind, SampleDistribution};
use crate::error::{DiceError, DiceResult};
use crate::rng::SimRng;

/// A validated integer-valued distribution.
#[derive(Debug, Clone)]
pub struct IntegralDistribution {
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    Uniform {
        min: i64,
        max: i64,
        sampler: Uniform<i64>,
    },
    Bernoulli {
        probability: f64,
        sampler: Bernoulli,
    },
    Poisson {
        mean: f64,
        sampler: Poisson<f64>,
    },
}

impl IntegralDistribution {
    /// Uniform over `[min, max]`, both bounds included.
    pub fn uniform(min: i64, max: i64) -> DiceResult<Self> {
        if min > max {
            return Err(DiceError::invalid_parameter(
                DistributionKind::UniformIntegral,
                format!("min {min} exceeds max {max}"),
            ));
        }
        let sampler = Uniform::new_inclusive(min, max).map_err(|e| {
            DiceError::invalid_parameter(DistributionKind::UniformIntegral, e.to_string())
        })?;
        Ok(Self {
            repr: Repr::Uniform { min, max, sampler },
        })
    }

    /// Bernoulli trial yielding `1` with `probability`, `0` otherwise.
    pub fn bernoulli(probability: f64) -> DiceResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(DiceError::invalid_parameter(
                DistributionKind::Bernoulli,
                format!("probability {probability} outside [0, 1]"),
            ));
        }
        let sampler = Bernoulli::new(probability)
            .map_err(|e| DiceError::invalid_parameter(DistributionKind::Bernoulli, e.to_string()))?;
        Ok(Self {
            repr: Repr::Bernoulli {
                probability,
                sampler,
            },
        })
    }

    /// Bernoulli trial with success probability `numerator / denominator`.
    pub fn bernoulli_ratio(numerator: u32, denominator: u32) -> DiceResult<Self> {
        if denominator == 0 {
            return Err(DiceError::invalid_parameter(
                DistributionKind::Bernoulli,
                "denominator must be positive",
            ));
        }
        if numerator > denominator {
            return Err(DiceError::invalid_parameter(
                DistributionKind::Bernoulli,
                format!("ratio {numerator}/{denominator} exceeds 1"),
            ));
        }
        let sampler = Bernoulli::from_ratio(numerator, denominator)
            .map_err(|e| DiceError::invalid_parameter(DistributionKind::Bernoulli, e.to_string()))?;
        Ok(Self {
            repr: Repr::Bernoulli {
                probability: f64::from(numerator) / f64::from(denominator),
                sampler,
            },
        })
    }

    /// Poisson counts with the given mean; unbounded on the right.
    pub fn poisson(mean: f64) -> DiceResult<Self> {
        if !(mean.is_finite() && mean > 0.0) {
            return Err(DiceError::invalid_parameter(
                DistributionKind::Poisson,
                format!("mean must be finite and > 0, got {mean}"),
            ));
        }
        let sampler = Poisson::new(mean)
            .map_err(|e| DiceError::invalid_parameter(DistributionKind::Poisson, e.to_string()))?;
        Ok(Self {
            repr: Repr::Poisson { mean, sampler },
        })
    }

    /// Inclusive bounds, for the uniform kind.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match self.repr {
            Repr::Uniform { min, max, .. } => Some((min, max)),
            _ => None,
        }
    }

    /// Analytic mean of the distribution.
    pub fn expected_value(&self) -> f64 {
        match self.repr {
            Repr::Uniform { min, max, .. } => (min as f64 + max as f64) / 2.0,
            Repr::Bernoulli { probability, .. } => probability,
            Repr::Poisson { mean, .. } => mean,
        }
    }
}

impl SampleDistribution for IntegralDistribution {
    type Value = i64;

    fn kind(&self) -> DistributionKind {
        match self.repr {
            Repr::Uniform { .. } => DistributionKind::UniformIntegral,
            Repr::Bernoulli { .. } => DistributionKind::Bernoulli,
            Repr::Poisson { .. } => DistributionKind::Poisson,
        }
    }

    fn draw(&self, rng: &mut SimRng) -> i64 {
        match &self.repr {
            Repr::Uniform { sampler, .. } => rng.sample(sampler),
            Repr::Bernoulli { sampler, .. } => i64::from(rng.sample::<bool, _>(sampler)),
            // Poisson draws are whole numbers carried as f64.
            Repr::Poisson { sampler, .. } => rng.sample::<f64, _>(sampler) as i64,
        }
    }
}
