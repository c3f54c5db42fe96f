//! Monte Carlo trial engine.
//!
//! This module provides the [`SimulationEngine`] trial loop, its builder and
//! predicate seam, the [`Simulation`] trait shared with the chain walker, and
//! partitioned multi-worker runs.

pub mod builder;
pub mod config;
pub mod engine;
pub mod partition;
pub mod predicate;
pub mod report;
pub mod simulation;

pub use builder::SimulationBuilder;
pub use config::{InterimPolicy, ReloadPolicy, SimulationConfig};
pub use engine::SimulationEngine;
pub use partition::{Parallelism, WorkerSlot, run_partitioned};
pub use predicate::{TrialContext, TrialPredicate, predicate_fn, try_predicate_fn};
pub use report::SimulationReport;
pub use simulation::Simulation;
