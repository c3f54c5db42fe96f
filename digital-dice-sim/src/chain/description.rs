//! JSON description of an absorbing chain.
//!
//! ```json
//! {
//!   "states": [[1, 2], [2], [2]],
//!   "initial": 0,
//!   "absorbing": 2
//! }
//! ```
//!
//! Entry `i` of `states` lists the destinations of state `i`. The absorbing
//! state may list itself or nothing; either way it becomes a self-loop.

use serde::{Deserialize, Serialize};

use digital_dice_core::{DiceError, DiceResult};

use super::absorbing::AbsorbingChain;
use super::state::{ChainState, StateId};

/// Serializable form of an [`AbsorbingChain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescription {
    /// Destinations of each state, in id order.
    pub states: Vec<Vec<usize>>,
    /// Start state.
    pub initial: usize,
    /// Absorbing state.
    pub absorbing: usize,
}

impl ChainDescription {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> DiceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a description file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> DiceResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate into a chain.
    pub fn into_chain(self) -> DiceResult<AbsorbingChain> {
        AbsorbingChain::try_from(self)
    }
}

impl TryFrom<ChainDescription> for AbsorbingChain {
    type Error = DiceError;

    fn try_from(description: ChainDescription) -> DiceResult<Self> {
        let states = description
            .states
            .into_iter()
            .enumerate()
            .map(|(id, targets)| {
                if id == description.absorbing && targets.iter().all(|&t| t == id) {
                    Ok(ChainState::absorbing(id))
                } else {
                    ChainState::new(id, targets.into_iter().map(StateId).collect())
                }
            })
            .collect::<DiceResult<Vec<_>>>()?;
        AbsorbingChain::new(states, description.initial, description.absorbing)
    }
}

impl From<&AbsorbingChain> for ChainDescription {
    fn from(chain: &AbsorbingChain) -> Self {
        Self {
            states: chain
                .states()
                .iter()
                .map(|state| state.transitions().iter().map(|t| t.index()).collect())
                .collect(),
            initial: chain.initial().index(),
            absorbing: chain.absorbing().index(),
        }
    }
}
