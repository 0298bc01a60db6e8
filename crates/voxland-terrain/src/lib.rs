//! Procedural voxel landscape synthesis: seeded noise, two-band heightfield,
//! river carving, vegetation placement, voxel classification, and per-material
//! instance batching for an instanced renderer.

mod batch;
mod feature;
mod framing;
mod generation;
mod grid;
mod heightmap;
mod material;
mod noise_source;
mod params;
mod river;
mod seed;

pub use batch::{CANOPY_RADIUS, InstanceBatch, InstanceRaw, LEAF_DENSITY, batch};
pub use feature::{TREE_BAND, TREE_MARGIN, TreePlacement, acceptance_threshold, place};
pub use framing::CameraFraming;
pub use generation::{
    GeneratedTerrain, GenerationError, TerrainSession, TerrainSink, generate, generate_with_rng,
};
pub use grid::{ColumnGrid, HeightField, RiverMask};
pub use heightmap::{BASE_BAND, BandParams, HeightmapSampler, MOUNTAIN_BAND, synthesize};
pub use material::{Feature, MaterialAppearance, MaterialCategory, classify};
pub use noise_source::{NoiseSource, channel};
pub use params::{GenerationParams, ParamsError};
pub use river::{RIVER_DEPTH, RIVER_SEGMENTS, apply_to_height_field, carve, river_path};
pub use seed::{CanopyMode, canopy_rng, derive_seed};
