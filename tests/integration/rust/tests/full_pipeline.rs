//! End-to-End Harness Integration Tests
//!
//! Drives the full measurement pipeline (catalogue, input pools, timed
//! loops, alternating scheduler, aggregation) with short budgets.

use harness::{Harness, HarnessError, InputCaches, InputKind, TrialConfig};
use op_registry::{Kernel, Operation, OperationTable, NOOP};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

fn quick_config() -> TrialConfig {
    TrialConfig {
        loop_count: 4,
        loop_budget: Duration::from_millis(10),
    }
}

fn quick_harness() -> Harness {
    let caches = InputCaches::generate(&mut StdRng::seed_from_u64(42));
    Harness::new(OperationTable::standard(), caches, quick_config())
}

/// Test: a trial of a real operation yields all four metrics
#[test]
fn test_trial_yields_metrics() {
    let mut bench = quick_harness();
    let result = bench.run_trial("add", InputKind::Float).expect("trial failed");

    assert!(result.rate > 0);
    assert!(result.raw_duration_ns > 0.0);
    assert!(result.baseline_duration_ns > 0.0);
    assert!(result.ratio > 0.0);
    assert!(
        (result.adjusted_duration_ns - (result.raw_duration_ns - result.baseline_duration_ns))
            .abs()
            < 1e-9
    );
}

/// Test: aggregation of a measurement matches running the trial directly
#[test]
fn test_measure_then_aggregate_matches_run_trial_shape() {
    let mut bench = quick_harness();
    let measurement = bench.measure("multiply", InputKind::Uint32).expect("measure failed");

    assert!(measurement.test_iterations > 0);
    assert!(measurement.baseline_iterations > 0);

    let result = harness::aggregate(measurement, bench.config()).expect("aggregate failed");
    assert!(result.raw_duration_ns > 0.0);
}

/// Test: every catalogue operation completes a short trial
#[test]
fn test_every_operation_survives_a_trial() {
    let caches = InputCaches::generate(&mut StdRng::seed_from_u64(7));
    let config = TrialConfig {
        loop_count: 2,
        loop_budget: Duration::from_millis(2),
    };
    let mut bench = Harness::new(OperationTable::standard(), caches, config);

    for name in bench.registry().names() {
        let result = bench.run_trial(name, InputKind::Uint8);
        assert!(result.is_ok(), "operation '{}' failed: {:?}", name, result.err());
    }
}

/// Test: unknown operation names fail before any kernel executes
#[test]
fn test_unknown_name_runs_no_kernel() {
    static CALLS: AtomicU64 = AtomicU64::new(0);

    fn counting(n: f64) -> f64 {
        CALLS.fetch_add(1, Ordering::Relaxed);
        n
    }

    let ops = vec![
        Operation {
            name: NOOP,
            section: "Control",
            expr: "n",
            kernel: Kernel::Numeric(counting),
        },
        Operation {
            name: "counted",
            section: "Test",
            expr: "n",
            kernel: Kernel::Numeric(counting),
        },
    ];
    let registry = OperationTable::new(ops).expect("valid table");
    let caches = InputCaches::generate(&mut StdRng::seed_from_u64(3));
    let mut bench = Harness::new(registry, caches, quick_config());

    let err = bench.run_trial("not-registered", InputKind::Float).unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfiguration(_)));
    assert_eq!(CALLS.load(Ordering::Relaxed), 0);
}

/// Test: configuration faults fail fast
#[test]
fn test_bad_configuration_rejected_up_front() {
    let caches = InputCaches::generate(&mut StdRng::seed_from_u64(5));

    let odd = TrialConfig {
        loop_count: 3,
        loop_budget: Duration::from_millis(5),
    };
    let mut bench = Harness::new(OperationTable::standard(), caches.clone(), odd);
    assert!(matches!(
        bench.run_trial("add", InputKind::Float).unwrap_err(),
        HarnessError::InvalidConfiguration(_)
    ));

    let zero_budget = TrialConfig {
        loop_count: 4,
        loop_budget: Duration::ZERO,
    };
    let mut bench = Harness::new(OperationTable::standard(), caches, zero_budget);
    assert!(matches!(
        bench.run_trial("add", InputKind::Float).unwrap_err(),
        HarnessError::InvalidConfiguration(_)
    ));
}

/// Test: a kernel panic mid-trial aborts the whole trial
#[test]
fn test_kernel_panic_aborts_trial() {
    fn exploding(n: f64) -> f64 {
        if n >= 0.0 {
            panic!("unsupported input");
        }
        n
    }

    let ops = vec![
        Operation {
            name: NOOP,
            section: "Control",
            expr: "n",
            kernel: Kernel::Numeric(|n: f64| n),
        },
        Operation {
            name: "exploding",
            section: "Test",
            expr: "panic",
            kernel: Kernel::Numeric(exploding),
        },
    ];
    let registry = OperationTable::new(ops).expect("valid table");
    let caches = InputCaches::generate(&mut StdRng::seed_from_u64(11));
    let mut bench = Harness::new(registry, caches, quick_config());

    let err = bench.run_trial("exploding", InputKind::Uint8).unwrap_err();
    match err {
        HarnessError::OperationFailure { name, .. } => assert_eq!(name, "exploding"),
        other => panic!("expected OperationFailure, got {other:?}"),
    }
}

/// Test: cursor positions persist across trials and stay per-kind
#[test]
fn test_cursor_state_is_per_kind_and_persistent() {
    let mut bench = quick_harness();
    let measurement = bench.measure("add", InputKind::Uint8).expect("measure failed");

    // The cursor advances once per completed iteration, wrapping at the
    // pool length.
    let consumed = measurement.test_iterations + measurement.baseline_iterations;
    assert_eq!(
        bench.cursor_position(InputKind::Uint8),
        (consumed % harness::CACHE_LEN as u64) as usize
    );
    assert_eq!(bench.cursor_position(InputKind::Uint32), 0);
    assert_eq!(bench.cursor_position(InputKind::MaxInt), 0);
    assert_eq!(bench.cursor_position(InputKind::Float), 0);
}
