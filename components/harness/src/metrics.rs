//! Reduction of raw iteration totals into the displayed timing metrics.

use crate::error::{HarnessError, HarnessResult};
use crate::trial::{TrialConfig, TrialMeasurement};
use serde::{Deserialize, Serialize};

/// Aggregated metrics for one trial of an operation against one input
/// kind. Derived from the iteration totals and the fixed time budget; not
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Completed test iterations per second, floored.
    pub rate: u64,
    /// Average wall-clock cost per test call, loop overhead included.
    pub raw_duration_ns: f64,
    /// Average cost per `noop` call, i.e. the loop overhead itself.
    pub baseline_duration_ns: f64,
    /// Raw minus baseline: the estimated operation-only cost. Can come
    /// out negative at high iteration rates given timer granularity, and
    /// is reported as measured rather than clamped.
    pub adjusted_duration_ns: f64,
    /// How many times slower one test call is than one `noop` call.
    pub ratio: f64,
}

/// Reduce a trial's iteration totals into metrics.
///
/// This is a pure function of the measurement and the configuration: the
/// same inputs produce bit-for-bit identical output.
///
/// # Errors
/// `DegenerateMeasurement` if either group's total is zero, since the
/// per-call durations would divide by zero; that indicates a measurement
/// fault rather than an extreme but valid result.
pub fn aggregate(measurement: TrialMeasurement, config: TrialConfig) -> HarnessResult<TrialResult> {
    config.validate()?;
    if measurement.baseline_iterations == 0 {
        return Err(HarnessError::DegenerateMeasurement { group: "baseline" });
    }
    if measurement.test_iterations == 0 {
        return Err(HarnessError::DegenerateMeasurement { group: "test" });
    }

    let total_budget_ns =
        f64::from(config.loops_per_group()) * config.loop_budget.as_secs_f64() * 1e9;
    let test_total = measurement.test_iterations as f64;
    let baseline_total = measurement.baseline_iterations as f64;

    let raw_duration_ns = total_budget_ns / test_total;
    let baseline_duration_ns = total_budget_ns / baseline_total;

    Ok(TrialResult {
        rate: (test_total / (total_budget_ns / 1e9)).floor() as u64,
        raw_duration_ns,
        baseline_duration_ns,
        adjusted_duration_ns: raw_duration_ns - baseline_duration_ns,
        ratio: raw_duration_ns / baseline_duration_ns,
    })
}
