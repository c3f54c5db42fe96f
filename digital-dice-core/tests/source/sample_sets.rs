//! Sample set shape under reloads and shared streams.

use digital_dice_core::{DiceError, RandomVariableSource, SimRng, TrialSampleSet};

#[test]
fn test_reload_keeps_length() {
    let source = RandomVariableSource::uniform_real(0.0, 1.0, 6).expect("valid");
    let mut rng = SimRng::new(5);
    let mut samples = source.load(&mut rng);
    for _ in 0..100 {
        source.reload(&mut rng, &mut samples);
        assert_eq!(samples.len(), 6);
    }
}

#[test]
fn test_reload_one_touches_only_its_slot() {
    let source = RandomVariableSource::uniform_real(0.0, 1.0, 5).expect("valid");
    let mut rng = SimRng::new(6);
    let mut samples = source.load(&mut rng);
    let before = samples.values().to_vec();
    source.reload_one(&mut rng, &mut samples, 3).expect("in range");
    for (i, (old, new)) in before.iter().zip(samples.values()).enumerate() {
        if i == 3 {
            assert_ne!(old.to_bits(), new.to_bits());
        } else {
            assert_eq!(old.to_bits(), new.to_bits());
        }
    }
}

#[test]
fn test_reload_one_checks_current_length() {
    let source = RandomVariableSource::uniform_integral(1, 6, 2).expect("valid");
    let mut rng = SimRng::new(7);
    let mut samples = source.load(&mut rng);
    samples.set_from_external(&[1, 2, 3, 4]);
    assert!(source.reload_one(&mut rng, &mut samples, 3).is_ok());
    assert!(matches!(
        source.reload_one(&mut rng, &mut samples, 4),
        Err(DiceError::IndexOutOfRange { index: 4, len: 4 })
    ));
}

#[test]
fn test_sources_share_one_stream() {
    let first = RandomVariableSource::uniform_integral(1, 6, 3).expect("valid");
    let second = RandomVariableSource::uniform_integral(1, 6, 3).expect("valid");

    let mut rng = SimRng::new(8);
    let a = first.load(&mut rng);
    let b = second.load(&mut rng);
    assert_eq!(rng.draw_count(), 6);

    let mut replay = SimRng::new(8);
    assert_eq!(first.load(&mut replay), a);
    assert_eq!(second.load(&mut replay), b);
}

#[test]
fn test_permutation_holds_every_index_once() {
    let source = RandomVariableSource::permutation(10).expect("valid");
    let mut rng = SimRng::new(9);
    let mut samples = source.load(&mut rng);
    for _ in 0..50 {
        let mut sorted: Vec<i64> = samples.values().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        source.reload(&mut rng, &mut samples);
    }
}

#[test]
fn test_external_values_display() {
    let samples = TrialSampleSet::from_values(vec![0.5_f64, 1.25]);
    assert_eq!(samples.to_string(), "0.5  1.25");
}
