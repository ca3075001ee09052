//! The operation catalogue: named single-argument numeric kernels.
//!
//! Every operation is a pure function of one `f64`, registered under a
//! stable name and grouped into a display section. The table is validated
//! once at construction and never mutated afterwards; lookups against an
//! unknown name return `None` so callers can reject it before timing
//! anything.

use crate::lut::TrigTable;
use std::fmt;
use thiserror::Error;

/// Name of the identity control operation every trial compares against.
pub const NOOP: &str = "noop";

/// Errors detected while building an operation table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two operations were registered under the same name.
    #[error("duplicate operation name '{0}'")]
    DuplicateName(String),

    /// The table has no identity control to measure loop overhead against.
    #[error("catalogue has no 'noop' control operation")]
    MissingControl,
}

/// The callable measured by a sampling loop.
#[derive(Clone, Copy)]
pub enum Kernel {
    /// A number-to-number function.
    Numeric(fn(f64) -> f64),
    /// A number-to-boolean comparison.
    Predicate(fn(f64) -> bool),
    /// A trig approximation that indexes a precomputed table.
    Lookup(&'static TrigTable),
}

impl Kernel {
    /// Invoke the kernel against one input value.
    #[inline]
    pub fn invoke(self, x: f64) -> Sample {
        match self {
            Kernel::Numeric(f) => Sample::Number(f(x)),
            Kernel::Predicate(f) => Sample::Flag(f(x)),
            Kernel::Lookup(table) => Sample::Number(table.lookup(x)),
        }
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kernel::Numeric(_) => write!(f, "Numeric"),
            Kernel::Predicate(_) => write!(f, "Predicate"),
            Kernel::Lookup(_) => write!(f, "Lookup"),
        }
    }
}

/// Result of one kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Numeric result.
    Number(f64),
    /// Boolean result, from the comparison kernels.
    Flag(bool),
}

/// A named operation under test.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Stable lookup name.
    pub name: &'static str,
    /// Catalogue section the operation is listed under.
    pub section: &'static str,
    /// Display form of the kernel body.
    pub expr: &'static str,
    /// The measured callable.
    pub kernel: Kernel,
}

impl Operation {
    /// Invoke this operation's kernel against one input value.
    #[inline]
    pub fn invoke(&self, x: f64) -> Sample {
        self.kernel.invoke(x)
    }
}

/// Immutable, name-addressable operation catalogue.
#[derive(Debug, Clone)]
pub struct OperationTable {
    operations: Vec<Operation>,
}

impl OperationTable {
    /// Build a table from a list of operations.
    ///
    /// # Errors
    /// Fails if two operations share a name or if no `noop` control is
    /// present.
    pub fn new(operations: Vec<Operation>) -> Result<Self, RegistryError> {
        for (i, op) in operations.iter().enumerate() {
            if operations[..i].iter().any(|prior| prior.name == op.name) {
                return Err(RegistryError::DuplicateName(op.name.to_string()));
            }
        }
        if !operations.iter().any(|op| op.name == NOOP) {
            return Err(RegistryError::MissingControl);
        }
        Ok(Self { operations })
    }

    /// The full standard catalogue: arithmetic, higher math, trig (direct
    /// and LUT-based), comparisons, bit tricks, and polynomials, plus the
    /// `noop` control.
    pub fn standard() -> Self {
        Self::new(catalogue()).expect("standard catalogue is valid")
    }

    /// Look up an operation by exact name.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Registered names, in catalogue order.
    pub fn names(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.name).collect()
    }

    /// All operations, in catalogue order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the table is empty (never true for a validated table).
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn op(name: &'static str, section: &'static str, expr: &'static str, kernel: Kernel) -> Operation {
    Operation {
        name,
        section,
        expr,
        kernel,
    }
}

fn abs_bit(n: f64) -> f64 {
    let i = n as i64;
    let mask = i >> 63;
    ((i ^ mask) - mask) as f64
}

fn ten_ops(n: f64) -> f64 {
    (n - 23.0) / (n + 17.0) * (n + 19.0) / (n - 13.0) * (n - 29.0) - 113.0
}

fn is_shorter_sqrt(n: f64) -> bool {
    ((n - 17.0).powi(2) + (n - 13.0).powi(2)).sqrt() < 113.0
}

fn is_shorter_sqr(n: f64) -> bool {
    (n - 17.0).powi(2) + (n - 13.0).powi(2) < 113.0_f64.powi(2)
}

fn catalogue() -> Vec<Operation> {
    vec![
        op("add", "Arithmetic", "n + 113", Kernel::Numeric(|n: f64| n + 113.0)),
        op("multiply", "Arithmetic", "n * 113", Kernel::Numeric(|n: f64| n * 113.0)),
        op("divide", "Arithmetic", "n / 113", Kernel::Numeric(|n: f64| n / 113.0)),
        op("modulo", "Arithmetic", "n % 113", Kernel::Numeric(|n: f64| n % 113.0)),
        op("power", "Higher Math", "n.powf(113.0)", Kernel::Numeric(|n: f64| n.powf(113.0))),
        op("pow", "Higher Math", "n.powi(113)", Kernel::Numeric(|n: f64| n.powi(113))),
        op("sqr", "Higher Math", "n * n", Kernel::Numeric(|n: f64| n * n)),
        op("sqrt", "Higher Math", "n.sqrt()", Kernel::Numeric(f64::sqrt)),
        op("sin", "Trig Functions", "n.sin()", Kernel::Numeric(f64::sin)),
        op("cos", "Trig Functions", "n.cos()", Kernel::Numeric(f64::cos)),
        op("tan", "Trig Functions", "n.tan()", Kernel::Numeric(f64::tan)),
        op("sin-lut", "Trig Functions", "SIN[phase(n)]", Kernel::Lookup(TrigTable::sin())),
        op("cos-lut", "Trig Functions", "COS[phase(n)]", Kernel::Lookup(TrigTable::cos())),
        op("tan-lut", "Trig Functions", "TAN[phase(n)]", Kernel::Lookup(TrigTable::tan())),
        op("gt", "Logic", "n > 113", Kernel::Predicate(|n: f64| n > 113.0)),
        op("lte", "Logic", "n <= 113", Kernel::Predicate(|n: f64| n <= 113.0)),
        op("eq", "Logic", "n == 113", Kernel::Predicate(|n: f64| n == 113.0)),
        op("floor", "Number Manipulation", "n.floor()", Kernel::Numeric(f64::floor)),
        op("round", "Number Manipulation", "n.round()", Kernel::Numeric(f64::round)),
        op(
            "floor-bit",
            "Number Manipulation",
            "n as i64 as f64",
            Kernel::Numeric(|n: f64| n as i64 as f64),
        ),
        op("abs", "Number Manipulation", "n.abs()", Kernel::Numeric(f64::abs)),
        op(
            "abs-bit",
            "Number Manipulation",
            "(i ^ (i >> 63)) - (i >> 63)",
            Kernel::Numeric(abs_bit),
        ),
        op("is-odd", "Number Manipulation", "n % 2", Kernel::Numeric(|n: f64| n % 2.0)),
        op(
            "is-odd-bit",
            "Number Manipulation",
            "n as i64 & 1",
            Kernel::Numeric(|n: f64| (n as i64 & 1) as f64),
        ),
        op(
            "quadratic",
            "Polynomials",
            "n.powi(2) + 17 * n - 113",
            Kernel::Numeric(|n: f64| n.powi(2) + 17.0 * n - 113.0),
        ),
        op(
            "factors",
            "Polynomials",
            "(n + 17) * (n - 113)",
            Kernel::Numeric(|n: f64| (n + 17.0) * (n - 113.0)),
        ),
        op(
            "ten-ops",
            "Polynomials",
            "(n - 23) / (n + 17) * (n + 19) / (n - 13) * (n - 29) - 113",
            Kernel::Numeric(ten_ops),
        ),
        op(
            "is-shorter-sqrt",
            "Polynomials",
            "((n - 17)^2 + (n - 13)^2).sqrt() < 113",
            Kernel::Predicate(is_shorter_sqrt),
        ),
        op(
            "is-shorter-sqr",
            "Polynomials",
            "(n - 17)^2 + (n - 13)^2 < 113^2",
            Kernel::Predicate(is_shorter_sqr),
        ),
        op(NOOP, "Control", "n", Kernel::Numeric(|n: f64| n)),
    ]
}
