//! A validated absorbing chain.

use std::fmt;

use digital_dice_core::{DiceError, DiceResult};

use super::state::{ChainState, StateId};

/// Finite chain with a start state and one absorbing state.
///
/// State identifiers are contiguous and zero-based: the state at position
/// `i` has id `i`, so lookups are direct indexing. Reaching the absorbing
/// state with probability 1 is the caller's responsibility; a chain with an
/// escape-free cycle makes walks run forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsorbingChain {
    states: Vec<ChainState>,
    initial: StateId,
    absorbing: StateId,
}

impl AbsorbingChain {
    /// Validate and assemble a chain.
    pub fn new(
        states: Vec<ChainState>,
        initial: impl Into<StateId>,
        absorbing: impl Into<StateId>,
    ) -> DiceResult<Self> {
        let (initial, absorbing) = (initial.into(), absorbing.into());
        if states.is_empty() {
            return Err(DiceError::invalid_state("chain has no states"));
        }
        let len = states.len();
        for (position, state) in states.iter().enumerate() {
            if state.id().index() != position {
                return Err(DiceError::invalid_state(format!(
                    "state {} listed at position {position}",
                    state.id()
                )));
            }
            if let Some(target) = state.transitions().iter().find(|t| t.index() >= len) {
                return Err(DiceError::invalid_state(format!(
                    "state {} transitions to unknown state {target}",
                    state.id()
                )));
            }
        }
        for (role, id) in [("initial", initial), ("absorbing", absorbing)] {
            if id.index() >= len {
                return Err(DiceError::invalid_state(format!(
                    "{role} state {id} is outside 0..{len}"
                )));
            }
        }
        Ok(Self {
            states,
            initial,
            absorbing,
        })
    }

    /// Start state of every walk.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// State that ends a walk.
    pub fn absorbing(&self) -> StateId {
        self.absorbing
    }

    /// All states in id order.
    pub fn states(&self) -> &[ChainState] {
        &self.states
    }

    /// Look up a state. Ids produced by the chain's own transitions are
    /// always in range.
    pub fn state(&self, id: StateId) -> Option<&ChainState> {
        self.states.get(id.index())
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a validated chain.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl fmt::Display for AbsorbingChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.states {
            writeln!(f, "{state}")?;
        }
        Ok(())
    }
}
