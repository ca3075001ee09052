//! Precomputed trigonometric lookup tables.
//!
//! Each table samples one trig function uniformly over a full period. A
//! LUT-based kernel trades accuracy for avoiding a transcendental call: it
//! reduces its argument to a fractional phase and indexes the nearest
//! sample at or below it.

use std::f64::consts::TAU;
use std::sync::OnceLock;

/// Entries per table. Lookups are exact at the sample points and off by at
/// most one phase step of 2π/1024 in between.
pub const LUT_RESOLUTION: usize = 1024;

/// One trig function sampled at fixed resolution over one period.
#[derive(Debug)]
pub struct TrigTable {
    values: [f64; LUT_RESOLUTION],
}

impl TrigTable {
    fn build(f: fn(f64) -> f64) -> Self {
        let mut values = [0.0; LUT_RESOLUTION];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = f(i as f64 * TAU / LUT_RESOLUTION as f64);
        }
        Self { values }
    }

    /// Sine over one period, built on first use and shared after.
    pub fn sin() -> &'static TrigTable {
        static SIN: OnceLock<TrigTable> = OnceLock::new();
        SIN.get_or_init(|| TrigTable::build(f64::sin))
    }

    /// Cosine over one period.
    pub fn cos() -> &'static TrigTable {
        static COS: OnceLock<TrigTable> = OnceLock::new();
        COS.get_or_init(|| TrigTable::build(f64::cos))
    }

    /// Tangent over one period.
    pub fn tan() -> &'static TrigTable {
        static TAN: OnceLock<TrigTable> = OnceLock::new();
        TAN.get_or_init(|| TrigTable::build(f64::tan))
    }

    /// Approximate the sampled function at `x` by indexing the entry at
    /// `floor(frac(x / 2π) * resolution)`.
    #[inline]
    pub fn lookup(&self, x: f64) -> f64 {
        let phase = (x / TAU).rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        let index = ((phase * LUT_RESOLUTION as f64) as usize).min(LUT_RESOLUTION - 1);
        self.values[index]
    }

    /// The raw sample at `index`.
    pub fn sample(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Number of samples in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; tables are fixed-size.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
