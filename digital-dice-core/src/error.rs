//! Error types for digital-dice simulations.
//!
//! Every failure here is a configuration or logic defect, never a transient
//! condition, so nothing is retried. Errors surface to the immediate caller
//! of the failing operation.

use crate::distribution::DistributionKind;

/// Errors raised while configuring or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// Distribution or run parameters are malformed.
    #[error("invalid parameter for {distribution}: {reason}")]
    InvalidParameter {
        /// Which component rejected the parameters.
        distribution: String,
        /// What was wrong with them.
        reason: String,
    },

    /// A chain state or chain description is inconsistent.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Details about the inconsistency.
        reason: String,
    },

    /// A slot index fell outside the sample set.
    #[error("index {index} out of range for sample set of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the sample set at the time of the request.
        len: usize,
    },

    /// The operation is not defined for this kind of source.
    #[error("{operation} is not supported: {reason}")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Why the source cannot perform it.
        reason: String,
    },

    /// A predicate failed, aborting the whole run.
    #[error("trial {trial} aborted: {source}")]
    TrialAborted {
        /// Zero-based index of the failing trial.
        trial: u64,
        /// The predicate's error.
        #[source]
        source: Box<DiceError>,
    },

    /// A configuration document could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Details about the failure.
        message: String,
    },
}

impl DiceError {
    /// Shorthand for [`DiceError::InvalidParameter`] raised by a distribution kind.
    pub fn invalid_parameter(kind: DistributionKind, reason: impl Into<String>) -> Self {
        DiceError::InvalidParameter {
            distribution: kind.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`DiceError::InvalidState`].
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        DiceError::InvalidState {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DiceError {
    fn from(err: serde_json::Error) -> Self {
        DiceError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for DiceError {
    fn from(err: std::io::Error) -> Self {
        DiceError::Config {
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout digital-dice.
pub type DiceResult<T> = Result<T, DiceError>;
