//! Generation parameters and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when a parameter record cannot drive generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// The grid must have at least one column per side.
    #[error("terrain size must be at least 1")]
    ZeroSize,

    /// Heights are scaled by `max_height`; zero flattens every ratio.
    #[error("max height must be at least 1")]
    ZeroMaxHeight,

    /// Noise scale must be finite and strictly positive.
    #[error("noise scale must be a positive finite number, got {0}")]
    InvalidNoiseScale(f64),

    /// Mountain multiplier must be finite and non-negative.
    #[error("mountain height must be a non-negative finite number, got {0}")]
    InvalidMountainHeight(f64),

    /// Tree density is a percentage.
    #[error("tree count is a percentage in 0..=100, got {0}")]
    TreeCountOutOfRange(u32),
}

/// The full parameter record for one terrain. Fully determines the
/// heightfield, river and tree placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Grid side length in columns.
    pub size: u32,
    /// Nominal maximum surface height in blocks.
    pub max_height: u32,
    /// Horizontal noise frequency; smaller values give broader hills.
    pub noise_scale: f64,
    /// World seed.
    pub seed: i64,
    /// Mountain intensity multiplier.
    pub mountain_height: f64,
    /// Tree density as a percentage of eligible columns, 0-100.
    pub tree_count: u32,
    /// River brush radius in columns.
    pub river_width: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            size: 64,
            max_height: 16,
            noise_scale: 0.05,
            seed: 123,
            mountain_height: 2.0,
            tree_count: 30,
            river_width: 3,
        }
    }
}

impl GenerationParams {
    /// Reject records the pipeline would turn into degenerate terrain.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamsError`] found, checking fields in
    /// declaration order.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.size == 0 {
            return Err(ParamsError::ZeroSize);
        }
        if self.max_height == 0 {
            return Err(ParamsError::ZeroMaxHeight);
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ParamsError::InvalidNoiseScale(self.noise_scale));
        }
        if !self.mountain_height.is_finite() || self.mountain_height < 0.0 {
            return Err(ParamsError::InvalidMountainHeight(self.mountain_height));
        }
        if self.tree_count > 100 {
            return Err(ParamsError::TreeCountOutOfRange(self.tree_count));
        }
        Ok(())
    }

    /// Grid side length as an index type.
    pub fn grid_size(&self) -> usize {
        self.size as usize
    }
}
