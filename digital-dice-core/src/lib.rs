//! # digital-dice-core
//!
//! Building blocks shared by every digital-dice simulation:
//!
//! - [`SimRng`]: the explicit, seeded engine every draw borrows
//! - [`IntegralDistribution`] / [`RealDistribution`]: the closed set of distribution kinds
//! - [`RandomVariableSource`]: a distribution plus a fixed event count per trial
//! - [`TrialSampleSet`]: the current trial's drawn values
//! - [`DiceError`]: the error taxonomy
//!
//! ## Reproducibility
//!
//! Nothing here owns hidden randomness. A run is reproduced exactly by
//! replaying the same draws against an engine created from the same seed;
//! omitting the seed selects [`DEFAULT_SEED`].

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod distribution;
mod error;
pub mod rng;
mod samples;
mod source;

pub use distribution::{
    DistributionKind, IntegralDistribution, RealDistribution, SampleDistribution, SampleValue,
};
pub use error::{DiceError, DiceResult};
pub use rng::{DEFAULT_SEED, SimRng, worker_seed};
pub use samples::TrialSampleSet;
pub use source::{RandomVariableSource, Structure};
