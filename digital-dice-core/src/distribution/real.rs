//! Real-valued distributions.

use rand::distr::Uniform;
use rand_distr::Exp;

use super::piecewise::{PiecewiseConstant, PiecewiseLinear};
use super::{DistributionKind, SampleDistribution};
use crate::error::{DiceError, DiceResult};
use crate::rng::SimRng;

/// A validated real-valued distribution.
#[derive(Debug, Clone)]
pub struct RealDistribution {
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    Uniform {
        lb: f64,
        ub: f64,
        sampler: Uniform<f64>,
    },
    Exponential {
        lambda: f64,
        sampler: Exp<f64>,
    },
    PiecewiseConstant(PiecewiseConstant),
    PiecewiseLinear(PiecewiseLinear),
}

impl RealDistribution {
    /// Uniform over the half-open interval `[lb, ub)`.
    pub fn uniform(lb: f64, ub: f64) -> DiceResult<Self> {
        if !(lb.is_finite() && ub.is_finite()) {
            return Err(DiceError::invalid_parameter(
                DistributionKind::UniformReal,
                "bounds must be finite",
            ));
        }
        if lb >= ub {
            return Err(DiceError::invalid_parameter(
                DistributionKind::UniformReal,
                format!("lower bound {lb} must be below upper bound {ub}"),
            ));
        }
        let sampler = Uniform::new(lb, ub).map_err(|e| {
            DiceError::invalid_parameter(DistributionKind::UniformReal, e.to_string())
        })?;
        Ok(Self {
            repr: Repr::Uniform { lb, ub, sampler },
        })
    }

    /// Exponential with rate `lambda`; unbounded on the right.
    pub fn exponential(lambda: f64) -> DiceResult<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(DiceError::invalid_parameter(
                DistributionKind::Exponential,
                format!("lambda must be finite and > 0, got {lambda}"),
            ));
        }
        let sampler = Exp::new(lambda).map_err(|e| {
            DiceError::invalid_parameter(DistributionKind::Exponential, e.to_string())
        })?;
        Ok(Self {
            repr: Repr::Exponential { lambda, sampler },
        })
    }

    /// Constant density `weights[i]` on `[intervals[i], intervals[i + 1])`.
    ///
    /// Needs exactly one more breakpoint than weights.
    pub fn piecewise_constant(intervals: Vec<f64>, weights: Vec<f64>) -> DiceResult<Self> {
        Ok(Self {
            repr: Repr::PiecewiseConstant(PiecewiseConstant::new(intervals, weights)?),
        })
    }

    /// Density `weights[i]` at `intervals[i]`, interpolated linearly.
    ///
    /// Needs one weight per breakpoint.
    pub fn piecewise_linear(intervals: Vec<f64>, weights: Vec<f64>) -> DiceResult<Self> {
        Ok(Self {
            repr: Repr::PiecewiseLinear(PiecewiseLinear::new(intervals, weights)?),
        })
    }

    /// Smallest and largest attainable values, for bounded kinds.
    pub fn support(&self) -> Option<(f64, f64)> {
        match &self.repr {
            Repr::Uniform { lb, ub, .. } => Some((*lb, *ub)),
            Repr::Exponential { .. } => None,
            Repr::PiecewiseConstant(d) => Some(d.support()),
            Repr::PiecewiseLinear(d) => Some(d.support()),
        }
    }

    /// Analytic mean of the distribution.
    pub fn expected_value(&self) -> f64 {
        match &self.repr {
            Repr::Uniform { lb, ub, .. } => (lb + ub) / 2.0,
            Repr::Exponential { lambda, .. } => 1.0 / lambda,
            Repr::PiecewiseConstant(d) => d.expected_value(),
            Repr::PiecewiseLinear(d) => d.expected_value(),
        }
    }
}

impl SampleDistribution for RealDistribution {
    type Value = f64;

    fn kind(&self) -> DistributionKind {
        match self.repr {
            Repr::Uniform { .. } => DistributionKind::UniformReal,
            Repr::Exponential { .. } => DistributionKind::Exponential,
            Repr::PiecewiseConstant(_) => DistributionKind::PiecewiseConstant,
            Repr::PiecewiseLinear(_) => DistributionKind::PiecewiseLinear,
        }
    }

    fn draw(&self, rng: &mut SimRng) -> f64 {
        match &self.repr {
            Repr::Uniform { sampler, .. } => rng.sample(sampler),
            Repr::Exponential { sampler, .. } => rng.sample(sampler),
            Repr::PiecewiseConstant(d) => d.draw(rng),
            Repr::PiecewiseLinear(d) => d.draw(rng),
        }
    }
}
