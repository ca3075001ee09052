//! Math Perf CLI Library
//!
//! Argument parsing and result rendering for the `mathperf` binary. This
//! is the display layer: it selects an operation and input kind, invokes
//! the harness, and renders the four derived metrics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod report;

pub use cli::Cli;
pub use report::{format_catalogue, format_reports, format_reports_json, TrialReport};
