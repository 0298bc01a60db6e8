//! Seeded multi-octave noise shared by every stochastic stage of the pipeline.
//!
//! All sampling goes through a single [`NoiseSource`] built once per
//! generation. Different purposes (terrain, mountains, river jitter, tree
//! decisions) read different slices of the same 3D field, selected by the
//! `z_offset` argument, so they never correlate at the same column.

use noise::{NoiseFn, Simplex};

/// Channel offsets used to decorrelate the noise fields of each stage.
pub mod channel {
    /// Base terrain elevation.
    pub const TERRAIN: f64 = 0.0;
    /// Broad mountain band layered on top of the base terrain.
    pub const MOUNTAIN: f64 = 100.0;
    /// Lateral jitter of the river path.
    pub const RIVER: f64 = 200.0;
    /// Tree acceptance test.
    pub const TREE_DECISION: f64 = 300.0;
    /// Trunk height selection.
    pub const TREE_HEIGHT: f64 = 400.0;
}

/// Deterministic, seedable noise function.
///
/// The only state is the seed-derived permutation table inside the simplex
/// generator, built once in [`NoiseSource::new`]. Every sample is a pure
/// function of `(seed, x, z, z_offset)`.
#[derive(Clone, Debug)]
pub struct NoiseSource {
    simplex: Simplex,
    seed: i64,
}

impl NoiseSource {
    /// Build a noise source for the given world seed.
    pub fn new(seed: i64) -> Self {
        // Fold the high half in so seeds that differ only above bit 32 still
        // produce different tables.
        let folded = (seed ^ (seed >> 32)) as u32;
        Self {
            simplex: Simplex::new(folded),
            seed,
        }
    }

    /// The seed this source was built from.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Single-octave sample in `[-1, 1]`.
    pub fn noise(&self, x: f64, z: f64, z_offset: f64) -> f64 {
        self.simplex.get([x, z, z_offset]).clamp(-1.0, 1.0)
    }

    /// Fractal sum of `octaves` samples, normalized by the total amplitude.
    ///
    /// Octave `i` samples at `(x, z) * lacunarity^i` and contributes with
    /// weight `persistence^i`. The channel offset is not scaled, so each
    /// octave stays on the caller's channel. Zero octaves yields `0.0`.
    pub fn octave_noise(
        &self,
        x: f64,
        z: f64,
        z_offset: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.noise(x * frequency, z * frequency, z_offset) * amplitude;
            max_amplitude += amplitude;

            frequency *= lacunarity;
            amplitude *= persistence;
        }

        if max_amplitude == 0.0 {
            return 0.0;
        }
        total / max_amplitude
    }
}
