//! Error types for the harness

use thiserror::Error;

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors produced while configuring or running a trial.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Bad trial parameters, an unknown operation name, or an unknown
    /// input kind. Detected before any timed loop starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The operation under test panicked inside a timed loop. The trial
    /// is aborted; no partial counts survive.
    #[error("operation '{name}' failed during a timed loop: {message}")]
    OperationFailure {
        /// Name of the operation whose kernel failed.
        name: String,
        /// The panic payload, as text.
        message: String,
    },

    /// A loop group finished with zero completed iterations, so per-call
    /// durations would divide by zero. Indicates the budget is far too
    /// short for the execution environment.
    #[error("degenerate measurement: {group} group completed zero iterations")]
    DegenerateMeasurement {
        /// Which group came back empty, `"test"` or `"baseline"`.
        group: &'static str,
    },
}
