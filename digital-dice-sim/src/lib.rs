//! # digital-dice-sim
//!
//! Monte Carlo estimates of probabilities and expectations.
//!
//! ## Core Components
//!
//! - [`SimulationEngine`]: repeated trials over one or two random variable
//!   sources, scored by a [`TrialPredicate`]
//! - [`SimulationBuilder`]: configure an engine
//! - [`AbsorbingChainWalker`]: expected steps to absorption of a finite chain
//! - [`run_partitioned`]: split one estimate over independently seeded workers
//! - [`simulations`]: small puzzles with known answers
//!
//! ## Quick Start
//!
//! ```ignore
//! use digital_dice_core::RandomVariableSource;
//! use digital_dice_sim::SimulationBuilder;
//!
//! let mut engine = SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 1)?)
//!     .trials(100_000)
//!     .label("P(six)")
//!     .predicate_fn("rolled_six", |trial, _| trial.primary()[0] == 6)
//!     .build()?;
//! println!("{}", engine.run()?);
//! ```
//!
//! ## Determinism
//!
//! | Run | Reproduced by |
//! |-----|---------------|
//! | Engine or walker | same seed and trial count |
//! | Partitioned | same base seed, trial count and worker count |
//!
//! A predicate that draws from [`TrialContext::rng`] shifts every later
//! draw, but stays reproducible as long as it draws the same way each time.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod chain;
pub mod runner;
pub mod simulations;

pub use chain::{AbsorbingChain, AbsorbingChainWalker, ChainDescription, ChainState, StateId};
pub use runner::{
    InterimPolicy, Parallelism, ReloadPolicy, Simulation, SimulationBuilder, SimulationConfig,
    SimulationEngine, SimulationReport, TrialContext, TrialPredicate, WorkerSlot, predicate_fn,
    run_partitioned, try_predicate_fn,
};
