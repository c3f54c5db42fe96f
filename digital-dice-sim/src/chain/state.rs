//! Chain states and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use digital_dice_core::{DiceError, DiceResult, SimRng};

/// Identifier of a chain state, which is also its position in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub usize);

impl StateId {
    /// Position of the state in its chain.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    fn from(id: usize) -> Self {
        StateId(id)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of an absorbing chain.
///
/// Every listed transition is equally likely. Listing a destination twice
/// doubles its probability, which is how non-uniform weights are expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainState {
    id: StateId,
    transitions: Vec<StateId>,
}

impl ChainState {
    /// Create a state; `transitions` must not be empty.
    pub fn new(id: impl Into<StateId>, transitions: Vec<StateId>) -> DiceResult<Self> {
        let id = id.into();
        if transitions.is_empty() {
            return Err(DiceError::invalid_state(format!(
                "state {id} has no transitions"
            )));
        }
        Ok(Self { id, transitions })
    }

    /// A terminal state, modelled as a transition back to itself.
    pub fn absorbing(id: impl Into<StateId>) -> Self {
        let id = id.into();
        Self {
            id,
            transitions: vec![id],
        }
    }

    /// This state's identifier.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Destinations, with repeats.
    pub fn transitions(&self) -> &[StateId] {
        &self.transitions
    }

    /// Draw the next state uniformly from the transition list.
    pub fn next_state(&self, rng: &mut SimRng) -> StateId {
        let index = rng.random_range(0..self.transitions.len());
        self.transitions[index]
    }
}

impl fmt::Display for ChainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -", self.id)?;
        for target in &self.transitions {
            write!(f, " {target}")?;
        }
        Ok(())
    }
}
