//! Benchmarking harness for the Math Perf operation catalogue.
//!
//! Measures the relative execution cost of small numeric operations by
//! running each one in fixed-duration sampling loops against precomputed
//! random inputs, alternating with a `noop` control so environmental drift
//! lands on both sides of the comparison. It includes:
//!
//! - Random input pools per input kind, with a cyclic cursor
//! - A wall-clock-bounded sampling loop
//! - The alternating trial scheduler
//! - Reduction of iteration totals into rate, per-call duration,
//!   baseline-subtracted duration, and ratio
//!
//! # Examples
//!
//! ```rust,no_run
//! use harness::{Harness, InputCaches, InputKind, TrialConfig};
//! use op_registry::OperationTable;
//!
//! let caches = InputCaches::generate(&mut rand::rng());
//! let mut bench = Harness::new(OperationTable::standard(), caches, TrialConfig::default());
//! let result = bench.run_trial("add", InputKind::Float).unwrap();
//! println!("{} runs/s, ratio {:.3}", result.rate, result.ratio);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod inputs;
pub mod metrics;
pub mod sampling;
pub mod trial;

pub use error::{HarnessError, HarnessResult};
pub use inputs::{CacheCursor, InputCaches, InputKind, RandomCache, CACHE_LEN, MAX_SAFE_INTEGER};
pub use metrics::{aggregate, TrialResult};
pub use sampling::run_loop;
pub use trial::{Harness, TrialConfig, TrialMeasurement};
