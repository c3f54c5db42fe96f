//! Reproducibility and accumulation properties.

use digital_dice_core::RandomVariableSource;
use digital_dice_sim::SimulationBuilder;
use digital_dice_sim::simulations::{coin, one_die};

#[test]
fn test_same_seed_gives_identical_totals() {
    let mut first = one_die(20_000, 42).expect("build");
    let mut second = one_die(20_000, 42).expect("build");
    let a = first.run().expect("run");
    let b = second.run().expect("run");
    assert_eq!(a.cumulative_total.to_bits(), b.cumulative_total.to_bits());
    assert_eq!(first.primary_samples(), second.primary_samples());
    assert_eq!(first.rng().draw_count(), second.rng().draw_count());
}

#[test]
fn test_different_seeds_diverge() {
    let mut first = one_die(20_000, 1).expect("build");
    let mut second = one_die(20_000, 2).expect("build");
    first.run().expect("run");
    second.run().expect("run");
    assert_ne!(first.cumulative_total(), second.cumulative_total());
}

#[test]
fn test_indicator_estimates_stay_in_unit_interval() {
    for trials in [1, 2, 7, 100, 1_000] {
        for seed in 0..5 {
            let mut engine = coin(0.5, trials, seed).expect("build");
            let estimate = engine.run().expect("run").estimate();
            assert!((0.0..=1.0).contains(&estimate), "estimate {estimate}");
        }
    }
}

#[test]
fn test_cumulative_total_never_decreases() {
    let mut engine = one_die(1, 9).expect("build");
    let mut previous = engine.cumulative_total();
    for _ in 0..500 {
        engine.run().expect("run");
        assert!(engine.cumulative_total() >= previous);
        previous = engine.cumulative_total();
    }
    assert_eq!(engine.trials_run(), 500);
}

#[test]
fn test_run_is_not_idempotent() {
    let mut engine = one_die(10_000, 4).expect("build");
    let first = engine.run().expect("first run");
    let second = engine.run().expect("second run");
    assert_eq!(second.trials, 2 * first.trials);
    assert!(second.cumulative_total > first.cumulative_total);

    let mut fresh = one_die(20_000, 4).expect("build");
    let single = fresh.run().expect("single run");
    assert_eq!(single.cumulative_total, second.cumulative_total);
}

#[test]
fn test_negative_payoffs_are_summed() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 1).expect("valid"))
            .trials(1_000)
            .predicate_fn("lose_one", |_, payoff| {
                *payoff = -1.0;
                true
            })
            .build()
            .expect("build");
    let report = engine.run().expect("run");
    assert_eq!(report.estimate(), -1.0);
}
