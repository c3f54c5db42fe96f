//! Drawn values respect each distribution's support.

use digital_dice_core::{RandomVariableSource, SimRng};

#[test]
fn test_uniform_integral_stays_in_bounds_across_reloads() {
    let source = RandomVariableSource::uniform_integral(-2, 4, 8).expect("valid");
    let mut rng = SimRng::new(1);
    let mut samples = source.load(&mut rng);
    for _ in 0..1_000 {
        assert!(samples.iter().all(|v| (-2..=4).contains(&v)));
        source.reload(&mut rng, &mut samples);
    }
}

#[test]
fn test_bernoulli_ratio_frequency() {
    let source = RandomVariableSource::bernoulli_ratio(3, 10, 100).expect("valid");
    let mut rng = SimRng::new(2);
    let mut samples = source.load(&mut rng);
    let mut ones = 0;
    for _ in 0..1_000 {
        ones += source.sum(&samples);
        source.reload(&mut rng, &mut samples);
    }
    let share = ones as f64 / 100_000.0;
    assert!((share - 0.3).abs() < 0.01, "share {share}");
}

#[test]
fn test_sums_at_integer_limits_do_not_wrap() {
    let mut rng = SimRng::new(5);

    let high = RandomVariableSource::uniform_integral(i64::MAX - 1, i64::MAX, 2).expect("valid");
    let mut samples = high.load(&mut rng);
    for _ in 0..100 {
        let total = high.sum(&samples);
        assert!((2 * i128::from(i64::MAX - 1)..=2 * i128::from(i64::MAX)).contains(&total));
        assert!(samples.mean().is_some_and(|m| m > 0.0));
        high.reload(&mut rng, &mut samples);
    }

    let low = RandomVariableSource::uniform_integral(i64::MIN, i64::MIN + 1, 3).expect("valid");
    let samples = low.load(&mut rng);
    assert!(low.sum(&samples) <= 3 * i128::from(i64::MIN + 1));
    assert!(samples.mean().is_some_and(|m| m < 0.0));
}

#[test]
fn test_poisson_mean() {
    let source = RandomVariableSource::poisson(4.0, 50_000).expect("valid");
    let mut rng = SimRng::new(3);
    let samples = source.load(&mut rng);
    assert!(samples.iter().all(|v| v >= 0));
    let mean = samples.mean().expect("non-empty");
    assert!((mean - 4.0).abs() < 0.05, "mean {mean}");
}

#[test]
fn test_real_sources_stay_in_support() {
    let mut rng = SimRng::new(4);

    let uniform = RandomVariableSource::uniform_real(2.0, 3.0, 1_000).expect("valid");
    assert!(uniform.load(&mut rng).iter().all(|v| (2.0..3.0).contains(&v)));

    let waits = RandomVariableSource::exponential(0.5, 1_000).expect("valid");
    assert!(waits.load(&mut rng).iter().all(|v| v >= 0.0));

    let steps =
        RandomVariableSource::piecewise_constant(vec![0.0, 1.0, 5.0], vec![1.0, 0.0], 1_000)
            .expect("valid");
    assert!(steps.load(&mut rng).iter().all(|v| (0.0..=1.0).contains(&v)));

    let ramp = RandomVariableSource::piecewise_linear(vec![0.0, 10.0], vec![0.0, 1.0], 1_000)
        .expect("valid");
    assert!(ramp.load(&mut rng).iter().all(|v| (0.0..=10.0).contains(&v)));
}

#[test]
fn test_invalid_parameters_rejected() {
    assert!(RandomVariableSource::uniform_integral(6, 1, 1).is_err());
    assert!(RandomVariableSource::uniform_real(1.0, 1.0, 1).is_err());
    assert!(RandomVariableSource::bernoulli(1.5, 1).is_err());
    assert!(RandomVariableSource::bernoulli_ratio(1, 0, 1).is_err());
    assert!(RandomVariableSource::poisson(0.0, 1).is_err());
    assert!(RandomVariableSource::exponential(-1.0, 1).is_err());
    assert!(RandomVariableSource::piecewise_constant(vec![0.0, 1.0], vec![], 1).is_err());
    assert!(RandomVariableSource::piecewise_linear(vec![1.0, 0.0], vec![1.0, 1.0], 1).is_err());
}
