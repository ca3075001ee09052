//! Integration test support for the Math Perf workspace.
//!
//! The actual tests live in `tests/`; this crate exists to give them a
//! single place to declare their component dependencies.
