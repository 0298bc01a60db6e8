//! Seed derivation for the stochastic parts of batching.
//!
//! Noise-driven stages sample the world [`NoiseSource`](crate::NoiseSource)
//! directly. The canopy needs a stream of independent draws instead, which
//! comes from a ChaCha8 generator seeded from the world seed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Where canopy leaf decisions draw their randomness from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanopyMode {
    /// Derived from the world seed; the whole terrain is reproducible.
    #[default]
    Seeded,
    /// Fresh entropy per generation; canopies differ between runs.
    Entropy,
}

/// Derive a sub-seed for one purpose from the world seed.
///
/// Uses SipHash (via std's `DefaultHasher`) to mix the world seed with a
/// purpose tag into a well-distributed u64.
pub fn derive_seed(world_seed: i64, purpose: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    purpose.hash(&mut hasher);
    hasher.finish()
}

/// Build the leaf-decision RNG for one generation.
pub fn canopy_rng(world_seed: i64, mode: CanopyMode) -> ChaCha8Rng {
    match mode {
        CanopyMode::Seeded => ChaCha8Rng::seed_from_u64(derive_seed(world_seed, "canopy")),
        CanopyMode::Entropy => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}
