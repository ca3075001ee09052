//! Command-line arguments for the benchmark front-end.

use clap::Parser;
use harness::InputKind;

/// Measure the relative cost of small numeric operations.
#[derive(Debug, Parser)]
#[command(name = "mathperf", version, about = "Numeric operation micro-benchmarks")]
pub struct Cli {
    /// List the operation catalogue and exit
    #[arg(long)]
    pub list: bool,

    /// Operation to measure (see --list)
    #[arg(long, conflicts_with = "all")]
    pub op: Option<String>,

    /// Measure every operation in the catalogue
    #[arg(long)]
    pub all: bool,

    /// Input kind: uint8, uint32, maxint, or float
    #[arg(long, default_value = "float")]
    pub inputs: InputKind,

    /// Total timed loops per trial, split between test and noop control
    /// (must be even)
    #[arg(long, default_value_t = 8)]
    pub loops: u32,

    /// Wall-clock budget per loop, in milliseconds
    #[arg(long = "budget-ms", default_value_t = 2500)]
    pub budget_ms: u64,

    /// Seed for the random input pools (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,
}
