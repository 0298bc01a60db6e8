//! River path generation, rasterization and carving.
//!
//! The river is a single S-curve sweeping across the grid along +X, with a
//! noise-driven lateral jitter. Its path is stamped into a [`RiverMask`] with a
//! circular brush and then cut into the heightfield.

use std::f64::consts::TAU;

use crate::grid::{HeightField, RiverMask};
use crate::noise_source::{NoiseSource, channel};

/// Number of path segments; the path has `RIVER_SEGMENTS + 1` points.
pub const RIVER_SEGMENTS: usize = 20;

/// Blocks removed from every river column.
pub const RIVER_DEPTH: u32 = 3;

/// Column coordinates of the river path, possibly outside the grid.
pub fn river_path(noise: &NoiseSource, size: usize) -> Vec<(i64, i64)> {
    let size_f = size as f64;
    (0..=RIVER_SEGMENTS)
        .map(|i| {
            let t = i as f64 / RIVER_SEGMENTS as f64;
            let jitter = noise.noise(t * 10.0, 0.0, channel::RIVER) * size_f * 0.1;
            let x = t * size_f + jitter;
            let z = size_f * 0.3 + libm::sin(t * TAU) * size_f * 0.2;
            (libm::floor(x) as i64, libm::floor(z) as i64)
        })
        .collect()
}

/// Mark every column within `river_width` of a path point.
///
/// A width of zero marks only the path points that land inside the grid.
pub fn carve(noise: &NoiseSource, size: usize, river_width: u32) -> RiverMask {
    let mut mask = RiverMask::filled(size, false);
    let w = i64::from(river_width);
    let reach = f64::from(river_width);

    for (px, pz) in river_path(noise, size) {
        for dx in -w..=w {
            for dz in -w..=w {
                let (x, z) = (px + dx, pz + dz);
                if !mask.contains(x, z) {
                    continue;
                }
                let distance = libm::sqrt((dx * dx + dz * dz) as f64);
                if distance <= reach {
                    mask.set(x as usize, z as usize, true);
                }
            }
        }
    }

    mask
}

/// Lower every river column by [`RIVER_DEPTH`], never below 1.
///
/// Must run after synthesis and before vegetation placement and batching,
/// both of which read the final surface heights.
pub fn apply_to_height_field(height_field: &mut HeightField, river_mask: &RiverMask) {
    assert_eq!(
        height_field.size(),
        river_mask.size(),
        "river mask does not match heightfield"
    );
    for (height, &wet) in height_field
        .cells_mut()
        .iter_mut()
        .zip(river_mask.as_slice())
    {
        if wet {
            *height = height.saturating_sub(RIVER_DEPTH).max(1);
        }
    }
}
