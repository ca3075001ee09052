//! The fixed-budget timed sampling loop.
//!
//! The loop is wall-clock bounded rather than iteration bounded: a slower
//! host completes fewer iterations in the same budget, so a measurement
//! takes the same time everywhere. [`Instant`] is monotonic, so a system
//! clock adjustment mid-loop cannot skew the deadline.

use crate::error::{HarnessError, HarnessResult};
use crate::inputs::CacheCursor;
use op_registry::Operation;
use std::any::Any;
use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Run `operation` against successive cached inputs until `budget` elapses,
/// returning the number of completed invocations.
///
/// The deadline is checked before each invocation, so the final call never
/// starts past it. Inputs and outputs pass through `black_box` to keep the
/// optimizer from deleting or hoisting the measured work.
///
/// # Errors
/// `InvalidConfiguration` for a zero budget; `OperationFailure` if the
/// kernel panics, in which case no partial count is reported.
pub fn run_loop(
    operation: &Operation,
    cursor: &mut CacheCursor<'_>,
    budget: Duration,
) -> HarnessResult<u64> {
    if budget.is_zero() {
        return Err(HarnessError::InvalidConfiguration(
            "loop budget must be positive".to_string(),
        ));
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let deadline = Instant::now() + budget;
        let mut count: u64 = 0;
        while Instant::now() < deadline {
            let input = black_box(cursor.next_value());
            black_box(operation.invoke(input));
            count += 1;
        }
        count
    }));

    outcome.map_err(|payload| HarnessError::OperationFailure {
        name: operation.name.to_string(),
        message: panic_message(payload),
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "kernel panicked".to_string()
    }
}
