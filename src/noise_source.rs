//! Seeded single-octave coherent noise.

use std::fmt;

use noise::{NoiseFn, Simplex};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh32::xxh32;

/// Token identifying one noise field.
///
/// Numeric and text tokens are both accepted; any value (including the empty
/// string) maps to a usable field. Two seeds select the same field exactly
/// when they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoiseSeed {
    Numeric(u64),
    Text(String),
}

impl NoiseSeed {
    /// Folds the token into the 32-bit seed consumed by the simplex generator.
    pub fn to_u32(&self) -> u32 {
        match self {
            NoiseSeed::Numeric(n) => xxh32(&n.to_le_bytes(), 0),
            NoiseSeed::Text(s) => xxh32(s.as_bytes(), 0),
        }
    }
}

impl Default for NoiseSeed {
    fn default() -> Self {
        NoiseSeed::Text("terrain".to_owned())
    }
}

impl From<u64> for NoiseSeed {
    fn from(value: u64) -> Self {
        NoiseSeed::Numeric(value)
    }
}

impl From<&str> for NoiseSeed {
    fn from(value: &str) -> Self {
        NoiseSeed::Text(value.to_owned())
    }
}

impl From<String> for NoiseSeed {
    fn from(value: String) -> Self {
        NoiseSeed::Text(value)
    }
}

impl fmt::Display for NoiseSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseSeed::Numeric(n) => write!(f, "{n}"),
            NoiseSeed::Text(s) => f.write_str(s),
        }
    }
}

/// Deterministic 2D simplex noise bound to a [`NoiseSeed`].
///
/// [`sample`](Self::sample) returns values in `[-0.5, 0.5]`.
#[derive(Clone)]
pub struct NoiseSource {
    seed: NoiseSeed,
    simplex: Simplex,
}

impl NoiseSource {
    pub fn new(seed: NoiseSeed) -> Self {
        let simplex = Simplex::new(seed.to_u32());
        Self { seed, simplex }
    }

    pub fn seed(&self) -> &NoiseSeed {
        &self.seed
    }

    /// Replaces the generator state; later samples depend only on `seed`.
    pub fn reseed(&mut self, seed: NoiseSeed) {
        self.simplex = Simplex::new(seed.to_u32());
        self.seed = seed;
    }

    /// Samples the field at `(x, z)`.
    ///
    /// Coordinates are `f64` so scrolled positions far from the origin keep
    /// sub-vertex precision.
    pub fn sample(&self, x: f64, z: f64) -> f32 {
        let raw = self.simplex.get([x, z]) * 0.5;
        (raw as f32).clamp(-0.5, 0.5)
    }
}

impl fmt::Debug for NoiseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseSource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
