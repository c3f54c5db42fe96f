//! Estimates that must land near their exact values.

use digital_dice_core::RandomVariableSource;
use digital_dice_sim::SimulationBuilder;
use digital_dice_sim::simulations::{
    coin, dice_payout, duel_dual_reload, duel_fixed_threshold, one_die,
};

fn assert_close(estimate: f64, exact: f64, tolerance: f64) {
    assert!(
        (estimate - exact).abs() <= tolerance,
        "estimate {estimate} not within {tolerance} of {exact}"
    );
}

#[test]
fn test_one_die_six() {
    let mut engine = one_die(100_000, 1).expect("build");
    let report = engine.run().expect("run");
    assert_eq!(report.trials, 100_000);
    assert_close(report.estimate(), 1.0 / 6.0, 0.01);
}

#[test]
fn test_bernoulli_point_three() {
    let mut engine = coin(0.3, 200_000, 1).expect("build");
    let report = engine.run().expect("run");
    assert_close(report.estimate(), 0.3, 0.005);
}

#[test]
fn test_dice_payout_through_interim() {
    let mut engine = dice_payout(200_000, 3).expect("build");
    let report = engine.run().expect("run");
    assert_close(report.estimate(), 7.0 / 6.0, 0.04);
}

#[test]
fn test_fixed_threshold_is_not_reloaded() {
    let mut engine = duel_fixed_threshold(3, 100_000, 5).expect("build");
    let report = engine.run().expect("run");
    assert_eq!(engine.secondary_samples().map(|s| s.values().to_vec()), Some(vec![3]));
    assert_close(report.estimate(), 0.5, 0.01);
}

#[test]
fn test_dual_reload_duel() {
    let mut engine = duel_dual_reload(100_000, 5).expect("build");
    let report = engine.run().expect("run");
    assert_close(report.estimate(), 15.0 / 36.0, 0.01);
}

#[test]
fn test_sum_of_two_dice_is_seven() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 2).expect("valid"))
            .trials(60_000)
            .seed(11)
            .predicate_fn("sum_seven", |trial, _| trial.primary().sum() == 7)
            .build()
            .expect("build");
    let report = engine.run().expect("run");
    assert_close(report.estimate(), 1.0 / 6.0, 0.01);
}

#[test]
fn test_predicate_draws_from_shared_stream() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_real(0.0, 1.0, 1).expect("valid"))
            .trials(100_000)
            .seed(2)
            .predicate_fn("below_extra_draw", |trial, _| {
                let extra = trial.rng().random_f64();
                trial.primary()[0] < extra
            })
            .build()
            .expect("build");
    let report = engine.run().expect("run");
    assert_close(report.estimate(), 0.5, 0.01);
}
