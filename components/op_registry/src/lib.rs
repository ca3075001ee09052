//! Operation catalogue for the Math Perf harness.
//!
//! Provides the named numeric kernels whose relative cost the harness
//! measures, along with the precomputed trigonometric lookup tables the
//! LUT-based kernels index into. The catalogue is immutable after
//! construction; the `noop` identity operation is the timing control every
//! trial is compared against.
//!
//! # Examples
//!
//! ```rust
//! use op_registry::OperationTable;
//!
//! let table = OperationTable::standard();
//! let add = table.get("add").unwrap();
//! assert_eq!(add.section, "Arithmetic");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lut;
pub mod registry;

pub use lut::{TrigTable, LUT_RESOLUTION};
pub use registry::{Kernel, Operation, OperationTable, RegistryError, Sample, NOOP};
