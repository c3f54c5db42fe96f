//! Walks over small chains with known expected absorption times.

use digital_dice_sim::simulations::{cube_spider, three_state};
use digital_dice_sim::simulations::three_state::three_state_chain;
use digital_dice_sim::{AbsorbingChain, AbsorbingChainWalker, ChainDescription, ChainState, StateId};

#[test]
fn test_three_state_chain_expects_one_and_a_half() {
    let mut walker = three_state(50_000, 1).expect("walker");
    let report = walker.run().expect("run");
    assert_eq!(report.trials, 50_000);
    assert!((report.estimate() - 1.5).abs() < 0.02, "estimate {}", report.estimate());
    assert_eq!(walker.longest_walk(), 2);
}

#[test]
fn test_cube_spider_expects_ten() {
    let mut walker = cube_spider(20_000, 1).expect("walker");
    let estimate = walker.run().expect("run").estimate();
    assert!((estimate - 10.0).abs() < 0.4, "estimate {estimate}");
    assert!(walker.longest_walk() >= 3);
}

#[test]
fn test_start_on_absorbing_state_takes_zero_steps() {
    let chain = AbsorbingChain::new(
        vec![
            ChainState::new(0, vec![StateId(1), StateId(0)]).expect("valid"),
            ChainState::new(1, vec![StateId(0)]).expect("valid"),
        ],
        1,
        1,
    )
    .expect("valid chain");
    let mut walker = AbsorbingChainWalker::new(chain, 1_000).expect("walker");
    let report = walker.run().expect("run");
    assert_eq!(report.estimate(), 0.0);
    assert_eq!(walker.cumulative_steps(), 0);
    assert_eq!(walker.rng().draw_count(), 0);
}

#[test]
fn test_same_seed_same_steps() {
    let mut a = cube_spider(5_000, 31).expect("walker");
    let mut b = cube_spider(5_000, 31).expect("walker");
    a.run().expect("run");
    b.run().expect("run");
    assert_eq!(a.cumulative_steps(), b.cumulative_steps());
    assert_eq!(a.longest_walk(), b.longest_walk());

    let mut c = cube_spider(5_000, 32).expect("walker");
    c.run().expect("run");
    assert_ne!(a.cumulative_steps(), c.cumulative_steps());
}

#[test]
fn test_cumulative_steps_never_decrease() {
    let mut walker = three_state(1, 3).expect("walker");
    let mut previous = 0;
    for _ in 0..200 {
        walker.run().expect("run");
        assert!(walker.cumulative_steps() >= previous);
        previous = walker.cumulative_steps();
    }
    assert_eq!(walker.trials_run(), 200);
}

#[test]
fn test_description_round_trip_walks_the_same() {
    let chain = three_state_chain().expect("chain");
    let json = serde_json::to_string(&ChainDescription::from(&chain)).expect("serialize");
    let parsed = ChainDescription::from_json(&json)
        .and_then(ChainDescription::into_chain)
        .expect("parse");
    assert_eq!(parsed, chain);
}
