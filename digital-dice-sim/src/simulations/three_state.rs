//! A fork: from 0 go to 1 or 2, from 1 go to 2. Expected steps 3/2.

use digital_dice_core::DiceResult;

use crate::chain::{AbsorbingChain, AbsorbingChainWalker, ChainState, StateId};

/// The three-state chain, starting at 0 and absorbed at 2.
pub fn three_state_chain() -> DiceResult<AbsorbingChain> {
    AbsorbingChain::new(
        vec![
            ChainState::new(0, vec![StateId(1), StateId(2)])?,
            ChainState::new(1, vec![StateId(2)])?,
            ChainState::absorbing(2),
        ],
        0,
        2,
    )
}

/// Walker over [`three_state_chain`].
pub fn three_state(trials: u64, seed: u64) -> DiceResult<AbsorbingChainWalker> {
    Ok(AbsorbingChainWalker::new(three_state_chain()?, trials)?
        .with_seed(seed)
        .with_label("E(steps)"))
}
