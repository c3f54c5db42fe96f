//! # Simulation Configuration
//!
//! | Setting | Field | Default | Meaning |
//! |---------|-------|---------|---------|
//! | Trials | `trials` | 1,000,000 | Trials per `run` call |
//! | Seed | `seed` | 1 | Seed of the engine's [`SimRng`](digital_dice_core::SimRng) |
//! | Label | `label` | `"probability"` | Name attached to the estimate in reports |
//! | Interim value | `interim` | reset to 1.0 each trial | What a met predicate contributes |
//! | Reload | `reload` | primary only | Which sample sets refresh between trials |
//!
//! The configuration is plain data and (de)serializes with serde, so driver
//! programs can keep it next to their results.

use serde::{Deserialize, Serialize};

use digital_dice_core::{DEFAULT_SEED, DiceError, DiceResult};

/// How the per-trial interim value is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InterimPolicy {
    /// Set the interim value to `baseline` before every predicate call.
    ResetEachTrial {
        /// Value a trial contributes unless the predicate changes it.
        baseline: f64,
    },
    /// Set the interim value once when the engine is built; the predicate
    /// owns every later change, including any reset.
    Persistent {
        /// Starting value.
        initial: f64,
    },
}

impl InterimPolicy {
    /// The value the interim starts from.
    pub fn initial_value(&self) -> f64 {
        match *self {
            InterimPolicy::ResetEachTrial { baseline } => baseline,
            InterimPolicy::Persistent { initial } => initial,
        }
    }
}

impl Default for InterimPolicy {
    fn default() -> Self {
        InterimPolicy::ResetEachTrial { baseline: 1.0 }
    }
}

/// Which sample sets the engine refreshes after each trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReloadPolicy {
    /// Only the primary set is redrawn. The secondary set stays as it is
    /// unless the predicate reloads it, e.g. a fixed baseline state.
    #[default]
    PrimaryOnly,
    /// Both primary and secondary sets are redrawn, primary first.
    Both,
}

/// Settings for one [`SimulationEngine`](super::SimulationEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Trials executed by each `run` call.
    pub trials: u64,
    /// Seed of the engine's random stream.
    pub seed: u64,
    /// Label attached to the estimate.
    pub label: String,
    /// Interim value initialisation.
    pub interim: InterimPolicy,
    /// Sample sets refreshed between trials.
    pub reload: ReloadPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1_000_000,
            seed: DEFAULT_SEED,
            label: "probability".to_string(),
            interim: InterimPolicy::default(),
            reload: ReloadPolicy::default(),
        }
    }
}

impl SimulationConfig {
    /// Check the settings before an engine is built.
    pub fn validate(&self) -> DiceResult<()> {
        if self.trials == 0 {
            return Err(DiceError::InvalidParameter {
                distribution: "simulation".to_string(),
                reason: "trial count must be positive".to_string(),
            });
        }
        if !self.interim.initial_value().is_finite() {
            return Err(DiceError::InvalidParameter {
                distribution: "simulation".to_string(),
                reason: "interim value must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> DiceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
