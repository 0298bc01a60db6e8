//! Vegetation placement: mid-elevation band filter plus a noise acceptance test.

use serde::{Deserialize, Serialize};

use crate::grid::HeightField;
use crate::noise_source::{NoiseSource, channel};

/// Columns excluded on every edge so canopies stay inside the grid.
pub const TREE_MARGIN: usize = 2;

/// Exclusive relative-height band where trees may grow.
pub const TREE_BAND: (f64, f64) = (0.3, 0.7);

/// Shortest trunk, in blocks.
pub const MIN_TRUNK_HEIGHT: u32 = 3;

/// Number of distinct trunk heights above the minimum (3..=6).
const TRUNK_HEIGHT_STEPS: f64 = 4.0;

/// A tree anchored on a terrain column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreePlacement {
    /// Column x.
    pub x: usize,
    /// Column z.
    pub z: usize,
    /// Surface height of the column when the tree was placed.
    pub base_height: u32,
    /// Trunk height in blocks, 3 to 6.
    pub height: u32,
}

impl TreePlacement {
    /// Y of the topmost trunk block, which is also the canopy centre.
    pub fn crown_y(&self) -> u32 {
        self.base_height + self.height
    }
}

/// Acceptance threshold for a tree-count percentage.
///
/// 100% gives -1 (every eligible column), 0% gives 1 (none).
pub fn acceptance_threshold(tree_count: u32) -> f64 {
    1.0 - 2.0 * (f64::from(tree_count) / 100.0)
}

/// Choose tree columns in raster order (`x` outer, `z` inner).
pub fn place(
    noise: &NoiseSource,
    height_field: &HeightField,
    max_height: u32,
    tree_count: u32,
) -> Vec<TreePlacement> {
    let size = height_field.size();
    let threshold = acceptance_threshold(tree_count);
    let max = f64::from(max_height);
    let mut trees = Vec::new();

    for x in TREE_MARGIN..size.saturating_sub(TREE_MARGIN) {
        for z in TREE_MARGIN..size.saturating_sub(TREE_MARGIN) {
            let base_height = height_field.get(x, z);
            let relative = f64::from(base_height) / max;
            if relative <= TREE_BAND.0 || relative >= TREE_BAND.1 {
                continue;
            }

            let (xf, zf) = (x as f64, z as f64);
            if noise.noise(xf * 0.1, zf * 0.1, channel::TREE_DECISION) <= threshold {
                continue;
            }

            trees.push(TreePlacement {
                x,
                z,
                base_height,
                height: trunk_height(noise, xf, zf),
            });
        }
    }

    trees
}

fn trunk_height(noise: &NoiseSource, x: f64, z: f64) -> u32 {
    let sample = noise.noise(x, z, channel::TREE_HEIGHT).abs();
    let steps = libm::floor(sample * TRUNK_HEIGHT_STEPS).min(TRUNK_HEIGHT_STEPS - 1.0);
    MIN_TRUNK_HEIGHT + steps as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::synthesize;
    use crate::river::{apply_to_height_field, carve};

    fn carved_field(seed: i64, size: usize, max_height: u32) -> (NoiseSource, HeightField) {
        let noise = NoiseSource::new(seed);
        let mut field = synthesize(&noise, size, max_height, 0.05, 2.0);
        let mask = carve(&noise, size, 3);
        apply_to_height_field(&mut field, &mask);
        (noise, field)
    }

    #[test]
    fn test_threshold_endpoints() {
        assert_eq!(acceptance_threshold(0), 1.0);
        assert_eq!(acceptance_threshold(50), 0.0);
        assert_eq!(acceptance_threshold(100), -1.0);
    }

    #[test]
    fn test_zero_density_places_nothing() {
        let (noise, field) = carved_field(123, 64, 16);
        assert!(place(&noise, &field, 16, 0).is_empty());
    }

    #[test]
    fn test_full_density_takes_every_eligible_column() {
        let noise = NoiseSource::new(5);
        // Every interior column at relative height 0.5.
        let field = HeightField::filled(12, 5);
        let trees = place(&noise, &field, 10, 100);
        let eligible = (12 - 2 * TREE_MARGIN) * (12 - 2 * TREE_MARGIN);
        // Threshold is -1 and samples are clamped to [-1, 1]; only an exact -1
        // sample is rejected.
        assert!(trees.len() + 2 >= eligible, "{} of {eligible}", trees.len());
    }

    #[test]
    fn test_band_is_exclusive() {
        let noise = NoiseSource::new(5);
        let low = HeightField::filled(10, 3);
        let high = HeightField::filled(10, 7);
        assert!(place(&noise, &low, 10, 100).is_empty());
        assert!(place(&noise, &high, 10, 100).is_empty());
    }

    #[test]
    fn test_trees_respect_margin_and_band() {
        let size = 64;
        let max_height = 16;
        let (noise, field) = carved_field(123, size, max_height);
        let trees = place(&noise, &field, max_height, 60);
        assert!(!trees.is_empty(), "expected some trees at 60% density");
        for tree in &trees {
            assert!(tree.x >= TREE_MARGIN && tree.x < size - TREE_MARGIN);
            assert!(tree.z >= TREE_MARGIN && tree.z < size - TREE_MARGIN);
            let relative = f64::from(tree.base_height) / f64::from(max_height);
            assert!(relative > 0.3 && relative < 0.7, "relative height {relative}");
            assert_eq!(tree.base_height, field.get(tree.x, tree.z));
            assert!((3..=6).contains(&tree.height), "trunk {}", tree.height);
        }
    }

    #[test]
    fn test_placement_in_raster_order() {
        let (noise, field) = carved_field(42, 48, 16);
        let trees = place(&noise, &field, 16, 70);
        for pair in trees.windows(2) {
            assert!((pair[0].x, pair[0].z) < (pair[1].x, pair[1].z));
        }
    }

    #[test]
    fn test_tiny_grid_has_no_interior() {
        let noise = NoiseSource::new(1);
        let field = HeightField::filled(3, 5);
        assert!(place(&noise, &field, 10, 100).is_empty());
    }

    #[test]
    fn test_crown_y() {
        let tree = TreePlacement {
            x: 4,
            z: 4,
            base_height: 7,
            height: 5,
        };
        assert_eq!(tree.crown_y(), 12);
    }
}
