//! Simulation results and reporting.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Accumulated result of one simulation, or of several merged together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Label attached to the estimate
    pub label: String,
    /// Seed the random stream started from
    pub seed: u64,
    /// Trials (or walks) completed
    pub trials: u64,
    /// Sum of the interim values of met trials, or of walk lengths
    pub cumulative_total: f64,
    /// Wall-clock time spent in the trial loop
    pub wall_time: Duration,
}

impl SimulationReport {
    /// Cumulative total divided by trials; 0.0 when nothing ran.
    pub fn estimate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.cumulative_total / self.trials as f64
        }
    }

    /// Average wall time per trial.
    pub fn average_wall_time(&self) -> Duration {
        match u32::try_from(self.trials) {
            Ok(0) => Duration::ZERO,
            Ok(trials) => self.wall_time / trials,
            Err(_) => Duration::from_secs_f64(self.wall_time.as_secs_f64() / self.trials as f64),
        }
    }

    /// Combine partial reports into one.
    ///
    /// Totals and trial counts are summed so the merged estimate weighs every
    /// trial equally. Wall time is the slowest part, since parts run side by
    /// side. Label and seed come from the first report.
    pub fn merge(reports: impl IntoIterator<Item = SimulationReport>) -> Option<SimulationReport> {
        let mut reports = reports.into_iter();
        let mut merged = reports.next()?;
        for report in reports {
            merged.trials += report.trials;
            merged.cumulative_total += report.cumulative_total;
            merged.wall_time = merged.wall_time.max(report.wall_time);
        }
        Some(merged)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.estimate())
    }
}
