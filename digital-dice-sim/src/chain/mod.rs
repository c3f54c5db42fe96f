//! Absorbing Markov chains and the walker that estimates steps to absorption.

mod absorbing;
mod description;
mod state;
mod walker;

pub use absorbing::AbsorbingChain;
pub use description::ChainDescription;
pub use state::{ChainState, StateId};
pub use walker::AbsorbingChainWalker;
