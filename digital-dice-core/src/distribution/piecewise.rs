//! Piecewise densities over explicit breakpoints.
//!
//! A segment is picked by its probability mass, then a position inside it is
//! drawn by inverting the segment's own CDF.

use rand::distr::weighted::WeightedIndex;

use super::DistributionKind;
use crate::error::{DiceError, DiceResult};
use crate::rng::SimRng;

/// Constant density `weights[i]` on `[intervals[i], intervals[i + 1])`.
#[derive(Debug, Clone)]
pub(crate) struct PiecewiseConstant {
    intervals: Vec<f64>,
    weights: Vec<f64>,
    segments: WeightedIndex<f64>,
}

/// Density `weights[i]` at `intervals[i]`, linear in between.
#[derive(Debug, Clone)]
pub(crate) struct PiecewiseLinear {
    intervals: Vec<f64>,
    weights: Vec<f64>,
    segments: WeightedIndex<f64>,
}

fn check_breakpoints(kind: DistributionKind, intervals: &[f64]) -> DiceResult<()> {
    if intervals.len() < 2 {
        return Err(DiceError::invalid_parameter(
            kind,
            format!("need at least 2 breakpoints, got {}", intervals.len()),
        ));
    }
    if intervals.iter().any(|b| !b.is_finite()) {
        return Err(DiceError::invalid_parameter(kind, "breakpoints must be finite"));
    }
    if intervals.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(DiceError::invalid_parameter(
            kind,
            "breakpoints must be strictly increasing",
        ));
    }
    Ok(())
}

fn check_weights(kind: DistributionKind, weights: &[f64]) -> DiceResult<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(DiceError::invalid_parameter(
            kind,
            "weights must be finite and non-negative",
        ));
    }
    Ok(())
}

fn segment_index(kind: DistributionKind, masses: Vec<f64>) -> DiceResult<WeightedIndex<f64>> {
    WeightedIndex::new(masses)
        .map_err(|e| DiceError::invalid_parameter(kind, format!("no positive mass: {e}")))
}

impl PiecewiseConstant {
    pub(crate) fn new(intervals: Vec<f64>, weights: Vec<f64>) -> DiceResult<Self> {
        let kind = DistributionKind::PiecewiseConstant;
        check_breakpoints(kind, &intervals)?;
        if intervals.len() != weights.len() + 1 {
            return Err(DiceError::invalid_parameter(
                kind,
                format!(
                    "{} breakpoints need {} weights, got {}",
                    intervals.len(),
                    intervals.len() - 1,
                    weights.len()
                ),
            ));
        }
        check_weights(kind, &weights)?;
        let masses = intervals
            .windows(2)
            .zip(&weights)
            .map(|(span, w)| w * (span[1] - span[0]))
            .collect();
        let segments = segment_index(kind, masses)?;
        Ok(Self {
            intervals,
            weights,
            segments,
        })
    }

    pub(crate) fn draw(&self, rng: &mut SimRng) -> f64 {
        let i: usize = rng.sample(&self.segments);
        let (lo, hi) = (self.intervals[i], self.intervals[i + 1]);
        let x = lo + rng.random_f64() * (hi - lo);
        // Rounding can land exactly on `hi`; keep the interval half-open.
        if x < hi {
            x
        } else {
            lo
        }
    }

    pub(crate) fn expected_value(&self) -> f64 {
        let (mut moment, mut mass) = (0.0, 0.0);
        for (span, w) in self.intervals.windows(2).zip(&self.weights) {
            let m = w * (span[1] - span[0]);
            moment += m * (span[0] + span[1]) / 2.0;
            mass += m;
        }
        moment / mass
    }

    pub(crate) fn support(&self) -> (f64, f64) {
        support(&self.intervals)
    }
}

impl PiecewiseLinear {
    pub(crate) fn new(intervals: Vec<f64>, weights: Vec<f64>) -> DiceResult<Self> {
        let kind = DistributionKind::PiecewiseLinear;
        check_breakpoints(kind, &intervals)?;
        if intervals.len() != weights.len() {
            return Err(DiceError::invalid_parameter(
                kind,
                format!(
                    "{} breakpoints need {} weights, got {}",
                    intervals.len(),
                    intervals.len(),
                    weights.len()
                ),
            ));
        }
        check_weights(kind, &weights)?;
        let masses = intervals
            .windows(2)
            .zip(weights.windows(2))
            .map(|(span, w)| (w[0] + w[1]) / 2.0 * (span[1] - span[0]))
            .collect();
        let segments = segment_index(kind, masses)?;
        Ok(Self {
            intervals,
            weights,
            segments,
        })
    }

    pub(crate) fn draw(&self, rng: &mut SimRng) -> f64 {
        let i: usize = rng.sample(&self.segments);
        let (lo, hi) = (self.intervals[i], self.intervals[i + 1]);
        let (wa, wb) = (self.weights[i], self.weights[i + 1]);
        let h = hi - lo;
        let u = rng.random_f64();

        // Solve a*x^2 + wa*x = u * area for x in [0, h], with a = (wb - wa) / 2h.
        // The rationalized root stays stable when wa == wb.
        let a = (wb - wa) / (2.0 * h);
        let target = u * (wa + wb) * h / 2.0;
        let denom = wa + (wa * wa + 4.0 * a * target).max(0.0).sqrt();
        let x = if denom > 0.0 { 2.0 * target / denom } else { 0.0 };
        (lo + x.clamp(0.0, h)).min(hi)
    }

    pub(crate) fn expected_value(&self) -> f64 {
        let (mut moment, mut mass) = (0.0, 0.0);
        for (span, w) in self.intervals.windows(2).zip(self.weights.windows(2)) {
            let (a, b) = (span[0], span[1]);
            let h = b - a;
            let m = (w[0] + w[1]) / 2.0 * h;
            if m > 0.0 {
                // Centroid of a trapezoid with parallel sides w[0], w[1].
                let centroid = a + h * (w[0] + 2.0 * w[1]) / (3.0 * (w[0] + w[1]));
                moment += m * centroid;
                mass += m;
            }
        }
        moment / mass
    }

    pub(crate) fn support(&self) -> (f64, f64) {
        support(&self.intervals)
    }
}

fn support(intervals: &[f64]) -> (f64, f64) {
    (
        intervals.first().copied().unwrap_or_default(),
        intervals.last().copied().unwrap_or_default(),
    )
}
