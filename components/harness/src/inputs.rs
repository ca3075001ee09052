//! Random input pools and the cyclic cursor that feeds the sampling loop.
//!
//! Random values are expensive relative to the operations under test, so
//! each input kind gets a pool generated once up front; the timed loop
//! only ever pays for an index increment and a read. A pool is traversed
//! by a [`CacheCursor`] that wraps at the end, and cursor positions are
//! kept by the harness so consecutive trials keep advancing through the
//! pool instead of replaying its head.

use crate::error::HarnessError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Values per pool. The largest prime below 2^16, so cyclic reuse does
/// not resonate with small periodicities in a test function.
pub const CACHE_LEN: usize = 65521;

/// Largest integer exactly representable in an `f64` (2^53 - 1), the
/// ceiling of every generated input domain.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Domain and distribution of the random values fed to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Whole numbers in [0, 255].
    Uint8,
    /// Whole numbers in [0, 2^32 - 1].
    Uint32,
    /// Whole numbers in [0, 2^53 - 2].
    MaxInt,
    /// Reals in [0, 2^53 - 1).
    Float,
}

impl InputKind {
    /// Every kind, in canonical order.
    pub const ALL: [InputKind; 4] = [
        InputKind::Uint8,
        InputKind::Uint32,
        InputKind::MaxInt,
        InputKind::Float,
    ];

    /// The kind's stable selector name.
    pub fn name(self) -> &'static str {
        match self {
            InputKind::Uint8 => "uint8",
            InputKind::Uint32 => "uint32",
            InputKind::MaxInt => "maxint",
            InputKind::Float => "float",
        }
    }

    /// Map a uniform `u` in [0, 1) into this kind's domain.
    fn transform(self, u: f64) -> f64 {
        match self {
            InputKind::Uint8 => (u * 256.0).floor(),
            InputKind::Uint32 => (u * 4_294_967_296.0).floor(),
            InputKind::MaxInt => (u * MAX_SAFE_INTEGER).floor(),
            InputKind::Float => u * MAX_SAFE_INTEGER,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputKind {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uint8" => Ok(InputKind::Uint8),
            "uint32" => Ok(InputKind::Uint32),
            "maxint" => Ok(InputKind::MaxInt),
            "float" => Ok(InputKind::Float),
            other => Err(HarnessError::InvalidConfiguration(format!(
                "unknown input kind '{other}' (expected uint8, uint32, maxint, or float)"
            ))),
        }
    }
}

/// A fixed-length pool of pre-generated values for one input kind.
/// Immutable after creation.
#[derive(Debug, Clone)]
pub struct RandomCache {
    kind: InputKind,
    values: Vec<f64>,
}

impl RandomCache {
    /// Generate a pool of [`CACHE_LEN`] values for `kind`.
    pub fn generate(kind: InputKind, rng: &mut impl Rng) -> Self {
        let values = (0..CACHE_LEN).map(|_| kind.transform(rng.random::<f64>())).collect();
        Self { kind, values }
    }

    /// The input kind this pool was generated for.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Number of values in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; pools are fixed-length.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index`.
    pub fn value_at(&self, index: usize) -> f64 {
        self.values[index]
    }
}

/// One pool per input kind, generated from a single RNG and shared by
/// every trial a harness runs.
#[derive(Debug, Clone)]
pub struct InputCaches {
    caches: [RandomCache; InputKind::ALL.len()],
}

impl InputCaches {
    /// Generate all four pools. Seed the RNG for reproducible inputs.
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            caches: InputKind::ALL.map(|kind| RandomCache::generate(kind, rng)),
        }
    }

    /// The pool for `kind`.
    pub fn cache(&self, kind: InputKind) -> &RandomCache {
        &self.caches[kind as usize]
    }
}

/// A stateful index into one pool, wrapping modulo its length.
#[derive(Debug)]
pub struct CacheCursor<'a> {
    cache: &'a RandomCache,
    position: usize,
}

impl<'a> CacheCursor<'a> {
    /// A cursor at the start of `cache`.
    pub fn new(cache: &'a RandomCache) -> Self {
        Self::at(cache, 0)
    }

    /// A cursor resuming from `position` (taken modulo the pool length).
    pub fn at(cache: &'a RandomCache, position: usize) -> Self {
        Self {
            cache,
            position: position % cache.len(),
        }
    }

    /// Yield the value under the cursor and advance, wrapping to index 0
    /// after the last entry.
    #[inline]
    pub fn next_value(&mut self) -> f64 {
        let value = self.cache.values[self.position];
        self.position += 1;
        if self.position == self.cache.values.len() {
            self.position = 0;
        }
        value
    }

    /// Current position, always in `[0, len)`.
    pub fn position(&self) -> usize {
        self.position
    }
}
