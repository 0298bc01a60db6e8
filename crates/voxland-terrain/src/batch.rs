//! Per-material instance batching: the payload handed to the renderer.
//!
//! Every voxel of the landscape becomes one translation-only placement of a
//! unit cube, grouped by [`MaterialCategory`] so the renderer can draw each
//! group with a single instanced draw call.

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Mat4, Vec3};
use rand::Rng;

use crate::feature::TreePlacement;
use crate::grid::{HeightField, RiverMask};
use crate::material::{Feature, MaterialCategory, classify};

/// Canopy radius around the crown, in blocks.
pub const CANOPY_RADIUS: i32 = 2;

/// Vertical extent of the canopy relative to the crown, inclusive.
pub const CANOPY_DY: (i32, i32) = (-1, 2);

/// Probability that a leaf voxel inside the canopy sphere is kept.
pub const LEAF_DENSITY: f64 = 0.7;

// ---------------------------------------------------------------------------
// InstanceRaw
// ---------------------------------------------------------------------------

/// Column-major model matrix for one instance, ready for a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    /// Model matrix columns.
    pub model: [[f32; 4]; 4],
}

impl From<IVec3> for InstanceRaw {
    fn from(position: IVec3) -> Self {
        Self {
            model: Mat4::from_translation(position.as_vec3()).to_cols_array_2d(),
        }
    }
}

// ---------------------------------------------------------------------------
// InstanceBatch
// ---------------------------------------------------------------------------

/// Block positions grouped by material, in generation order within a group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceBatch {
    groups: [Vec<IVec3>; MaterialCategory::COUNT],
}

impl InstanceBatch {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placement to its material group.
    pub fn push(&mut self, material: MaterialCategory, position: IVec3) {
        self.groups[material.index()].push(position);
    }

    /// Positions of one material, in insertion order.
    pub fn positions(&self, material: MaterialCategory) -> &[IVec3] {
        &self.groups[material.index()]
    }

    /// Number of instances of one material.
    pub fn len(&self, material: MaterialCategory) -> usize {
        self.groups[material.index()].len()
    }

    /// Total instances across every material.
    pub fn total_instances(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the batch holds no instances at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Non-empty groups in category order.
    pub fn groups(&self) -> impl Iterator<Item = (MaterialCategory, &[IVec3])> {
        MaterialCategory::ALL
            .into_iter()
            .zip(self.groups.iter())
            .filter(|(_, positions)| !positions.is_empty())
            .map(|(category, positions)| (category, positions.as_slice()))
    }

    /// Translation-only transforms of one material's instances.
    pub fn transforms(&self, material: MaterialCategory) -> impl Iterator<Item = Mat4> + '_ {
        self.positions(material)
            .iter()
            .map(|p| Mat4::from_translation(p.as_vec3()))
    }

    /// GPU instance data for one material.
    pub fn gpu_instances(&self, material: MaterialCategory) -> Vec<InstanceRaw> {
        self.positions(material)
            .iter()
            .copied()
            .map(InstanceRaw::from)
            .collect()
    }

    /// Axis-aligned bounds `(min, max)` of every block centre, or `None` if empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut all = self.groups.iter().flatten();
        let first = all.next()?.as_vec3();
        Some(all.fold((first, first), |(lo, hi), p| {
            let p = p.as_vec3();
            (lo.min(p), hi.max(p))
        }))
    }
}

// ---------------------------------------------------------------------------
// Batching
// ---------------------------------------------------------------------------

/// Walk every voxel of the landscape and group it by material.
///
/// Emission order: terrain fill in raster order, then river water caps, then
/// each tree's trunk followed by its canopy. `leaf_rng` decides which canopy
/// voxels are kept; it is the only source of randomness here.
pub fn batch<R: Rng>(
    height_field: &HeightField,
    river_mask: &RiverMask,
    trees: &[TreePlacement],
    max_height: u32,
    leaf_rng: &mut R,
) -> InstanceBatch {
    let mut out = InstanceBatch::new();

    for (x, z, surface) in height_field.iter() {
        for y in 0..=surface {
            let material = classify(y, max_height, surface, None);
            out.push(material, block(x, y, z));
        }
    }

    for (x, z, wet) in river_mask.iter() {
        if wet {
            let material = classify(0, max_height, 0, Some(Feature::Water));
            out.push(material, block(x, height_field.get(x, z) + 1, z));
        }
    }

    for tree in trees {
        push_trunk(&mut out, tree);
        push_canopy(&mut out, height_field, tree, leaf_rng);
    }

    out
}

fn push_trunk(out: &mut InstanceBatch, tree: &TreePlacement) {
    for dy in 1..=tree.height {
        out.push(
            Feature::Wood.material(),
            block(tree.x, tree.base_height + dy, tree.z),
        );
    }
}

fn push_canopy<R: Rng>(
    out: &mut InstanceBatch,
    height_field: &HeightField,
    tree: &TreePlacement,
    leaf_rng: &mut R,
) {
    let crown = block(tree.x, tree.crown_y(), tree.z);
    let r = CANOPY_RADIUS;

    for dx in -r..=r {
        for dy in CANOPY_DY.0..=CANOPY_DY.1 {
            for dz in -r..=r {
                if dx * dx + dy * dy + dz * dz > r * r {
                    continue;
                }
                if leaf_rng.random::<f64>() >= LEAF_DENSITY {
                    continue;
                }
                let leaf = crown + IVec3::new(dx, dy, dz);
                // Only x/z are clipped; canopies may rise above max height.
                if height_field.contains(i64::from(leaf.x), i64::from(leaf.z)) {
                    out.push(Feature::Leaves.material(), leaf);
                }
            }
        }
    }
}

#[inline]
fn block(x: usize, y: u32, z: usize) -> IVec3 {
    IVec3::new(x as i32, y as i32, z as i32)
}
