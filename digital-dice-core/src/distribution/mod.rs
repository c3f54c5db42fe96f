//! Probability distributions a [`RandomVariableSource`](crate::RandomVariableSource) draws from.
//!
//! The set of kinds is closed and split by domain:
//!
//! | Kind | Type | Values | Parameters |
//! |------|------|--------|------------|
//! | Uniform integral | [`IntegralDistribution::uniform`] | `i64` in `[min, max]` | `min <= max` |
//! | Bernoulli | [`IntegralDistribution::bernoulli`] | `0` or `1` | `p` in `[0, 1]`, or a ratio |
//! | Poisson | [`IntegralDistribution::poisson`] | `i64 >= 0` | `mean > 0` |
//! | Uniform real | [`RealDistribution::uniform`] | `f64` in `[lb, ub)` | `lb < ub` |
//! | Exponential | [`RealDistribution::exponential`] | `f64 >= 0` | `lambda > 0` |
//! | Piecewise constant | [`RealDistribution::piecewise_constant`] | `f64` in the breakpoints | `n + 1` breakpoints, `n` weights |
//! | Piecewise linear | [`RealDistribution::piecewise_linear`] | `f64` in the breakpoints | `n` breakpoints, `n` weights |
//!
//! Bernoulli outcomes are integers rather than booleans so a sample set stays
//! summable and uniformly indexable.

mod integral;
mod piecewise;
mod real;

pub use integral::IntegralDistribution;
pub use real::RealDistribution;

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};

use crate::rng::SimRng;

/// Tag naming a distribution kind, used in errors, logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionKind {
    /// Uniform over an inclusive integer range.
    UniformIntegral,
    /// Uniform over a half-open real interval.
    UniformReal,
    /// 0/1 outcomes with a fixed success probability.
    Bernoulli,
    /// Poisson counts with a fixed mean.
    Poisson,
    /// Exponential waiting times with a fixed rate.
    Exponential,
    /// Constant density on each interval between breakpoints.
    PiecewiseConstant,
    /// Density linear between weighted breakpoints.
    PiecewiseLinear,
    /// A shuffled arrangement of `0..len` (sampling without repetition).
    Permutation,
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A value a sample set can hold.
pub trait SampleValue:
    Copy + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Type sums are accumulated in, wide enough that any sample set of
    /// in-range values sums without overflow.
    type Total: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Sum + Send + Sync;

    /// Widen into the sum type.
    fn widen(self) -> Self::Total;

    /// Convert a sum to `f64` for means and reports.
    fn total_to_f64(total: Self::Total) -> f64;

    /// Widen to `f64` for means and reports.
    fn to_f64(self) -> f64;

    /// The value standing for position `index` in a permutation.
    fn from_index(index: usize) -> Self;
}

impl SampleValue for i64 {
    type Total = i128;

    fn widen(self) -> i128 {
        i128::from(self)
    }

    fn total_to_f64(total: i128) -> f64 {
        total as f64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_index(index: usize) -> Self {
        index as i64
    }
}

impl SampleValue for f64 {
    type Total = f64;

    fn widen(self) -> f64 {
        self
    }

    fn total_to_f64(total: f64) -> f64 {
        total
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_index(index: usize) -> Self {
        index as f64
    }
}

/// A validated, parameterized distribution that draws with an external engine.
pub trait SampleDistribution: Clone + fmt::Debug {
    /// Domain of the drawn values.
    type Value: SampleValue;

    /// Which kind this is.
    fn kind(&self) -> DistributionKind;

    /// Draw one value using `rng`.
    fn draw(&self, rng: &mut SimRng) -> Self::Value;
}
