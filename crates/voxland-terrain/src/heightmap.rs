//! Two-band heightfield synthesis.
//!
//! A detailed base band and a broad, lower-frequency mountain band are summed,
//! normalized and reshaped into integer column heights.

use crate::grid::HeightField;
use crate::noise_source::{NoiseSource, channel};

/// Fractal parameters for one noise band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandParams {
    /// Multiplier applied to the user-facing noise scale.
    pub scale_factor: f64,
    /// Number of octaves to composite.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Noise channel this band samples.
    pub channel: f64,
}

/// Fine-grained rolling terrain.
pub const BASE_BAND: BandParams = BandParams {
    scale_factor: 1.0,
    octaves: 4,
    persistence: 0.5,
    lacunarity: 2.0,
    channel: channel::TERRAIN,
};

/// Broad mountain features, at 0.3x the base frequency.
pub const MOUNTAIN_BAND: BandParams = BandParams {
    scale_factor: 0.3,
    octaves: 6,
    persistence: 0.6,
    lacunarity: 2.0,
    channel: channel::MOUNTAIN,
};

/// Exponent of the final reshape. Values above 1 push most columns low and
/// sharpen the peaks.
pub const RESHAPE_EXPONENT: f64 = 1.5;

/// Samples column heights from a [`NoiseSource`].
pub struct HeightmapSampler<'a> {
    noise: &'a NoiseSource,
    max_height: u32,
    noise_scale: f64,
    mountain_height: f64,
}

impl<'a> HeightmapSampler<'a> {
    /// Create a sampler over the given noise source.
    pub fn new(
        noise: &'a NoiseSource,
        max_height: u32,
        noise_scale: f64,
        mountain_height: f64,
    ) -> Self {
        Self {
            noise,
            max_height,
            noise_scale,
            mountain_height,
        }
    }

    fn band(&self, band: &BandParams, x: f64, z: f64) -> f64 {
        self.noise.octave_noise(
            x * self.noise_scale * band.scale_factor,
            z * self.noise_scale * band.scale_factor,
            band.channel,
            band.octaves,
            band.persistence,
            band.lacunarity,
        )
    }

    /// Shaped elevation in `[0, 1]` before scaling to blocks.
    ///
    /// The order combine, normalize, clamp, reshape must not change: the
    /// terrain for a given seed depends on it.
    pub fn elevation(&self, x: usize, z: usize) -> f64 {
        let (xf, zf) = (x as f64, z as f64);
        let base = self.band(&BASE_BAND, xf, zf);
        let mountain = self.band(&MOUNTAIN_BAND, xf, zf);

        let combined = base + mountain * self.mountain_height * 0.5;
        let normalized = ((combined + 1.0) / 2.0).clamp(0.0, 1.0);
        libm::pow(normalized, RESHAPE_EXPONENT)
    }

    /// Integer surface height of column `(x, z)`, never below 1.
    pub fn column_height(&self, x: usize, z: usize) -> u32 {
        let scaled = self.elevation(x, z) * self.max_height as f64 * self.mountain_height;
        (libm::floor(scaled) as u32).max(1)
    }
}

/// Build the full `size × size` heightfield.
pub fn synthesize(
    noise: &NoiseSource,
    size: usize,
    max_height: u32,
    noise_scale: f64,
    mountain_height: f64,
) -> HeightField {
    let sampler = HeightmapSampler::new(noise, max_height, noise_scale, mountain_height);
    let mut field = HeightField::filled(size, 1);
    for x in 0..size {
        for z in 0..size {
            field.set(x, z, sampler.column_height(x, z));
        }
    }
    field
}
