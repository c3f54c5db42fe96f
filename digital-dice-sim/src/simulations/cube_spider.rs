//! A blind spider walks the edges of a cube until it reaches the corner
//! opposite its start.
//!
//! States are distances from the start corner. Each corner has three edges,
//! so every state lists three destinations and repeats carry the weights:
//! from distance 1, two of three edges lead further away. Expected steps 10.

use digital_dice_core::DiceResult;

use crate::chain::{AbsorbingChain, AbsorbingChainWalker, ChainState, StateId};

/// The cube chain by corner distance, absorbed at distance 3.
pub fn cube_spider_chain() -> DiceResult<AbsorbingChain> {
    let ids = |targets: [usize; 3]| targets.map(StateId).to_vec();
    AbsorbingChain::new(
        vec![
            ChainState::new(0, ids([1, 1, 1]))?,
            ChainState::new(1, ids([0, 2, 2]))?,
            ChainState::new(2, ids([1, 1, 3]))?,
            ChainState::absorbing(3),
        ],
        0,
        3,
    )
}

/// Walker over [`cube_spider_chain`].
pub fn cube_spider(trials: u64, seed: u64) -> DiceResult<AbsorbingChainWalker> {
    Ok(AbsorbingChainWalker::new(cube_spider_chain()?, trials)?
        .with_seed(seed)
        .with_label("E(spider steps)"))
}
