//! Runs split across workers.

use digital_dice_core::DiceError;
use digital_dice_sim::simulations::{one_die, three_state};
use digital_dice_sim::{Parallelism, run_partitioned};

#[test]
fn test_partitioned_estimate_merges_all_trials() {
    let report = run_partitioned(Parallelism::Cores(4), 100_001, 7, |slot| {
        one_die(slot.trials, slot.seed)
    })
    .expect("partitioned run");
    assert_eq!(report.trials, 100_001);
    assert!((report.estimate() - 1.0 / 6.0).abs() < 0.01);
}

#[test]
fn test_partitioned_run_is_reproducible() {
    let run = || {
        run_partitioned(Parallelism::Cores(3), 30_000, 99, |slot| {
            three_state(slot.trials, slot.seed)
        })
        .expect("partitioned run")
    };
    let (a, b) = (run(), run());
    assert_eq!(a.cumulative_total, b.cumulative_total);
    assert!((a.estimate() - 1.5).abs() < 0.03);
}

#[test]
fn test_worker_error_is_returned() {
    let result = run_partitioned(Parallelism::Cores(2), 10, 1, |slot| {
        if slot.index == 1 {
            Err(DiceError::invalid_state("worker refused"))
        } else {
            one_die(slot.trials, slot.seed)
        }
    });
    assert!(matches!(result, Err(DiceError::InvalidState { .. })));
}

#[test]
fn test_zero_total_trials_rejected() {
    let result = run_partitioned(Parallelism::Cores(2), 0, 1, |slot| {
        one_die(slot.trials, slot.seed)
    });
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "worker exploded")]
fn test_worker_panic_reaches_caller() {
    let _ = run_partitioned(Parallelism::Cores(2), 10, 1, |slot| {
        if slot.index == 0 {
            panic!("worker exploded");
        }
        one_die(slot.trials, slot.seed)
    });
}

#[test]
fn test_zero_workers_rejected() {
    let result = run_partitioned(Parallelism::Cores(0), 10, 1, |slot| {
        one_die(slot.trials, slot.seed)
    });
    assert!(matches!(result, Err(DiceError::InvalidParameter { .. })));
}
