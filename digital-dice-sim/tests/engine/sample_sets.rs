//! How the engine and predicates refresh sample sets.

use digital_dice_core::{DiceError, RandomVariableSource};
use digital_dice_sim::{ReloadPolicy, SimulationBuilder};

#[test]
fn test_reload_one_leaves_other_slots_untouched() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 1_000, 5).expect("valid"))
            .trials(300)
            .predicate_fn("reload_middle", |trial, _| {
                let before = trial.primary().values().to_vec();
                trial.reload_primary_one(2).expect("in range");
                let after = trial.primary().values();
                for (i, (old, new)) in before.iter().zip(after).enumerate() {
                    if i != 2 {
                        assert_eq!(old, new, "slot {i} changed");
                    }
                }
                after.len() == 5
            })
            .build()
            .expect("build");
    assert_eq!(engine.run().expect("run").estimate(), 1.0);
}

#[test]
fn test_engine_reload_keeps_length_and_bounds() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(-3, 3, 4).expect("valid"))
            .trials(2_000)
            .predicate_fn("in_bounds", |trial, _| {
                trial.primary().len() == 4 && trial.primary().iter().all(|v| (-3..=3).contains(&v))
            })
            .build()
            .expect("build");
    assert_eq!(engine.run().expect("run").estimate(), 1.0);
    assert_eq!(engine.primary_samples().len(), 4);
}

#[test]
fn test_append_grows_primary_set() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 1).expect("valid"))
            .trials(5)
            .try_predicate_fn("grow", |trial, _| {
                trial.append_primary()?;
                Ok(true)
            })
            .build()
            .expect("build");
    engine.run().expect("run");
    assert_eq!(engine.primary_samples().len(), 6);
}

#[test]
fn test_secondary_state_vector_installed_externally() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 1).expect("valid"))
            .secondary(RandomVariableSource::uniform_integral(1, 6, 3).expect("valid"))
            .reload(ReloadPolicy::PrimaryOnly)
            .trials(1_000)
            .predicate_fn("in_state", |trial, _| {
                let face = trial.primary()[0];
                trial
                    .secondary()
                    .is_some_and(|states| states.iter().any(|s| s == face))
            })
            .build()
            .expect("build");
    engine
        .secondary_samples_mut()
        .expect("secondary")
        .set_from_external(&[1, 2]);
    let estimate = engine.run().expect("run").estimate();
    assert!((estimate - 1.0 / 3.0).abs() < 0.06, "estimate {estimate}");
    assert_eq!(engine.secondary_samples().map(|s| s.len()), Some(2));
}

#[test]
fn test_out_of_range_reload_aborts_run() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 2).expect("valid"))
            .trials(10)
            .try_predicate_fn("bad_slot", |trial, _| {
                trial.reload_primary_one(2)?;
                Ok(true)
            })
            .build()
            .expect("build");
    let err = engine.run().unwrap_err();
    match err {
        DiceError::TrialAborted { trial, source } => {
            assert_eq!(trial, 0);
            assert!(matches!(*source, DiceError::IndexOutOfRange { index: 2, len: 2 }));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(engine.trials_run(), 0);
}

#[test]
fn test_secondary_reload_without_secondary_aborts_run() {
    let mut engine =
        SimulationBuilder::new(RandomVariableSource::uniform_integral(1, 6, 2).expect("valid"))
            .trials(10)
            .try_predicate_fn("missing_secondary", |trial, _| {
                trial.reload_secondary_one(99)?;
                Ok(true)
            })
            .build()
            .expect("build");
    let err = engine.run().unwrap_err();
    match err {
        DiceError::TrialAborted { trial, source } => {
            assert_eq!(trial, 0);
            assert!(matches!(*source, DiceError::IndexOutOfRange { index: 99, len: 0 }));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(engine.trials_run(), 0);
    assert!(engine.secondary_samples().is_none());
}
