//! Splitting one estimate over several independent workers.
//!
//! Each worker owns its simulation and random stream, seeded with
//! [`worker_seed`]`(base_seed, index)`. Workers share nothing while running;
//! their reports are merged at the end. For a fixed base seed and worker
//! count the merged result is reproducible, but it differs from a
//! single-engine run with the same total trial count.

use std::panic;
use std::thread;

use serde::{Deserialize, Serialize};

use digital_dice_core::{DiceError, DiceResult, worker_seed};

use super::report::SimulationReport;
use super::simulation::Simulation;

/// How many workers to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Parallelism {
    /// One worker per available core.
    #[default]
    MaxCores,
    /// Half the available cores, at least one.
    HalfCores,
    /// A fixed worker count. [`run_partitioned`] rejects zero.
    Cores(usize),
}

impl Parallelism {
    /// Number of workers this setting resolves to on the current machine.
    pub fn workers(&self) -> usize {
        let available = || {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        };
        match *self {
            Parallelism::MaxCores => available(),
            Parallelism::HalfCores => (available() / 2).max(1),
            Parallelism::Cores(n) => n.max(1),
        }
    }
}

/// What one worker is asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSlot {
    /// Zero-based worker index.
    pub index: usize,
    /// Total number of workers.
    pub workers: usize,
    /// Seed for this worker's random stream.
    pub seed: u64,
    /// Trials assigned to this worker.
    pub trials: u64,
}

/// Trial counts per worker; the remainder goes to the first workers.
fn split_trials(total_trials: u64, workers: usize) -> Vec<u64> {
    let workers = (workers as u64).min(total_trials).max(1);
    let base = total_trials / workers;
    let remainder = total_trials % workers;
    (0..workers)
        .map(|i| base + u64::from(i < remainder))
        .collect()
}

/// Run `total_trials` trials spread over `parallelism` workers and merge
/// the results.
///
/// `factory` builds each worker's simulation from its [`WorkerSlot`]; it
/// must honour the slot's seed and trial count. A worker error is returned
/// once every worker has stopped. A worker panic is resumed on the caller.
pub fn run_partitioned<M, F>(
    parallelism: Parallelism,
    total_trials: u64,
    base_seed: u64,
    factory: F,
) -> DiceResult<SimulationReport>
where
    M: Simulation,
    F: Fn(WorkerSlot) -> DiceResult<M> + Sync,
{
    if total_trials == 0 {
        return Err(DiceError::InvalidParameter {
            distribution: "simulation".to_string(),
            reason: "trial count must be positive".to_string(),
        });
    }
    if parallelism == Parallelism::Cores(0) {
        return Err(DiceError::InvalidParameter {
            distribution: "simulation".to_string(),
            reason: "worker count must be positive".to_string(),
        });
    }

    let shares = split_trials(total_trials, parallelism.workers());
    let workers = shares.len();
    tracing::info!(workers, total_trials, base_seed, "starting partitioned run");

    let results: Vec<DiceResult<SimulationReport>> = thread::scope(|scope| {
        let factory = &factory;
        let handles: Vec<_> = shares
            .iter()
            .enumerate()
            .map(|(index, &trials)| {
                let slot = WorkerSlot {
                    index,
                    workers,
                    seed: worker_seed(base_seed, index),
                    trials,
                };
                scope.spawn(move || -> DiceResult<SimulationReport> {
                    let mut simulation = factory(slot)?;
                    let report = simulation.run()?;
                    tracing::debug!(
                        worker = slot.index,
                        trials = report.trials,
                        estimate = report.estimate(),
                        "worker finished"
                    );
                    Ok(report)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    });

    let reports = results.into_iter().collect::<DiceResult<Vec<_>>>()?;
    let merged = SimulationReport::merge(reports)
        .ok_or_else(|| DiceError::invalid_state("partitioned run produced no reports"))?;
    tracing::info!(
        estimate = merged.estimate(),
        trials = merged.trials,
        wall_time = ?merged.wall_time,
        "partitioned run completed"
    );
    Ok(merged)
}
