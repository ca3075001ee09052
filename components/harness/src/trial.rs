//! The alternating trial scheduler and the harness context that owns the
//! catalogue, the input pools, and the per-kind cursor positions.
//!
//! A trial runs its timed loops in the fixed interleaving `test, baseline,
//! baseline, test`, repeated. Spreading both groups across the full
//! measurement window is the bias-mitigation mechanism: monotonic drift
//! (thermal throttling, background load, re-optimization) lands on the
//! test and control sums roughly equally, which running one group after
//! the other would not give.

use crate::error::{HarnessError, HarnessResult};
use crate::inputs::{CacheCursor, InputCaches, InputKind};
use crate::metrics::{aggregate, TrialResult};
use crate::sampling::run_loop;
use op_registry::{OperationTable, NOOP};
use std::time::Duration;

/// Tunable trial parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    /// Total timed loops per trial, split evenly between the test and
    /// baseline groups. Must be even and non-zero.
    pub loop_count: u32,
    /// Wall-clock budget for each individual loop.
    pub loop_budget: Duration,
}

impl Default for TrialConfig {
    /// Eight loops of 2.5s: ten seconds of sampling per group.
    fn default() -> Self {
        Self {
            loop_count: 8,
            loop_budget: Duration::from_millis(2500),
        }
    }
}

impl TrialConfig {
    /// Reject configurations no trial should start with.
    pub fn validate(&self) -> HarnessResult<()> {
        if self.loop_count == 0 || self.loop_count % 2 != 0 {
            return Err(HarnessError::InvalidConfiguration(format!(
                "loop count must be a positive even number, got {}",
                self.loop_count
            )));
        }
        if self.loop_budget.is_zero() {
            return Err(HarnessError::InvalidConfiguration(
                "loop budget must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Loops each group receives.
    pub fn loops_per_group(&self) -> u32 {
        self.loop_count / 2
    }
}

/// Raw iteration totals for one trial, before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialMeasurement {
    /// Iterations completed by the operation under test.
    pub test_iterations: u64,
    /// Iterations completed by the `noop` control.
    pub baseline_iterations: u64,
}

/// Owns everything a trial needs: the operation catalogue, the input
/// pools, the trial configuration, and each pool's cursor position.
///
/// `run_trial` takes `&mut self` because cursor positions persist across
/// trials; that also makes concurrent trials against one harness
/// unrepresentable, matching the single-threaded measurement model.
pub struct Harness {
    registry: OperationTable,
    caches: InputCaches,
    config: TrialConfig,
    positions: [usize; InputKind::ALL.len()],
}

impl Harness {
    /// Assemble a harness from its parts.
    pub fn new(registry: OperationTable, caches: InputCaches, config: TrialConfig) -> Self {
        Self {
            registry,
            caches,
            config,
            positions: [0; InputKind::ALL.len()],
        }
    }

    /// The operation catalogue this harness measures.
    pub fn registry(&self) -> &OperationTable {
        &self.registry
    }

    /// The active trial configuration.
    pub fn config(&self) -> TrialConfig {
        self.config
    }

    /// Where the next trial for `kind` will resume reading its pool.
    pub fn cursor_position(&self, kind: InputKind) -> usize {
        self.positions[kind as usize]
    }

    /// Run one full alternating trial of `name` against `kind` and reduce
    /// the totals to metrics.
    ///
    /// # Errors
    /// `InvalidConfiguration` before any loop runs, `OperationFailure` if
    /// a kernel panics mid-trial, `DegenerateMeasurement` if either group
    /// finishes with zero iterations.
    pub fn run_trial(&mut self, name: &str, kind: InputKind) -> HarnessResult<TrialResult> {
        let measurement = self.measure(name, kind)?;
        aggregate(measurement, self.config)
    }

    /// Run the alternating loop sequence and return the raw totals.
    pub fn measure(&mut self, name: &str, kind: InputKind) -> HarnessResult<TrialMeasurement> {
        self.config.validate()?;
        let operation = self.registry.get(name).ok_or_else(|| {
            HarnessError::InvalidConfiguration(format!("unknown operation '{name}'"))
        })?;
        let baseline = self.registry.get(NOOP).ok_or_else(|| {
            HarnessError::InvalidConfiguration("catalogue has no noop control".to_string())
        })?;

        // Both groups share one cursor so they sample the same pool region
        // within the same window.
        let slot = kind as usize;
        let mut cursor = CacheCursor::at(self.caches.cache(kind), self.positions[slot]);

        let mut test_total: u64 = 0;
        let mut baseline_total: u64 = 0;
        for i in 0..self.config.loop_count {
            let is_baseline = is_baseline_slot(i);
            let subject = if is_baseline { baseline } else { operation };
            let count = run_loop(subject, &mut cursor, self.config.loop_budget)?;
            if is_baseline {
                baseline_total += count;
            } else {
                test_total += count;
            }
        }

        self.positions[slot] = cursor.position();
        Ok(TrialMeasurement {
            test_iterations: test_total,
            baseline_iterations: baseline_total,
        })
    }
}

/// Whether slot `i` of the loop sequence runs the `noop` control.
///
/// The sequence interleaves as `test, baseline, baseline, test`,
/// repeated, so for any even loop count both groups get exactly half the
/// slots and both are spread across the whole measurement window.
fn is_baseline_slot(i: u32) -> bool {
    matches!(i % 4, 1 | 2)
}
