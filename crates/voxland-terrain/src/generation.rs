//! The end-to-end terrain pipeline and the session that owns displayed terrain.
//!
//! Generation is a single synchronous computation over a validated
//! [`GenerationParams`]. [`TerrainSession`] wraps it with the regeneration
//! contract: the previous terrain is only released once a new one exists.

use std::time::Instant;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::batch::{InstanceBatch, batch};
use crate::feature::{TreePlacement, place};
use crate::grid::{HeightField, RiverMask};
use crate::heightmap::synthesize;
use crate::noise_source::NoiseSource;
use crate::params::{GenerationParams, ParamsError};
use crate::river::{apply_to_height_field, carve};
use crate::seed::{CanopyMode, canopy_rng};

/// Errors that abort a generation call. No partial terrain is returned.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The parameter record failed validation.
    #[error("invalid terrain parameters: {0}")]
    InvalidParams(#[from] ParamsError),
}

/// Everything one generation call produced.
#[derive(Clone, Debug)]
pub struct GeneratedTerrain {
    /// The parameters this terrain was generated from.
    pub params: GenerationParams,
    /// Final surface heights, after carving.
    pub height_field: HeightField,
    /// River coverage.
    pub river_mask: RiverMask,
    /// Placed trees, in raster order.
    pub trees: Vec<TreePlacement>,
    /// Renderer payload.
    pub batch: InstanceBatch,
    /// Wall time spent generating, in microseconds.
    pub generation_time_us: u64,
}

/// Generate a terrain, drawing canopy randomness according to `canopy`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidParams`] if `params` fails validation.
pub fn generate(
    params: &GenerationParams,
    canopy: CanopyMode,
) -> Result<GeneratedTerrain, GenerationError> {
    let mut rng = canopy_rng(params.seed, canopy);
    generate_with_rng(params, &mut rng)
}

/// Generate a terrain with an explicit canopy random source.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidParams`] if `params` fails validation.
pub fn generate_with_rng<R: Rng>(
    params: &GenerationParams,
    leaf_rng: &mut R,
) -> Result<GeneratedTerrain, GenerationError> {
    params.validate()?;

    let _span = tracing::info_span!("generate_terrain", seed = params.seed, size = params.size)
        .entered();
    let start = Instant::now();
    let size = params.grid_size();

    let noise = NoiseSource::new(params.seed);

    let mut height_field = synthesize(
        &noise,
        size,
        params.max_height,
        params.noise_scale,
        params.mountain_height,
    );
    debug!(columns = size * size, "heightfield synthesized");

    let river_mask = carve(&noise, size, params.river_width);
    apply_to_height_field(&mut height_field, &river_mask);
    debug!(river_columns = river_mask.count(), "river carved");

    let trees = place(&noise, &height_field, params.max_height, params.tree_count);
    debug!(trees = trees.len(), "vegetation placed");

    let batch = batch(
        &height_field,
        &river_mask,
        &trees,
        params.max_height,
        leaf_rng,
    );

    let generation_time_us = start.elapsed().as_micros() as u64;
    info!(
        instances = batch.total_instances(),
        trees = trees.len(),
        generation_time_us,
        "terrain generated"
    );

    Ok(GeneratedTerrain {
        params: params.clone(),
        height_field,
        river_mask,
        trees,
        batch,
        generation_time_us,
    })
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The renderer side of the core/renderer boundary.
///
/// An implementation owns the cube geometry and one material per
/// [`MaterialCategory`](crate::MaterialCategory), and builds one instanced
/// group per non-empty category of a submitted batch.
pub trait TerrainSink {
    /// Drop the instance buffers of the currently displayed terrain.
    /// Shared geometry and per-category materials may be kept.
    fn release_terrain(&mut self);

    /// Upload and display a new terrain.
    fn submit_terrain(&mut self, batch: &InstanceBatch);
}

/// Owns the currently displayed terrain and enforces the regeneration order.
///
/// `regenerate` takes `&mut self`, so at most one generation is in flight.
#[derive(Debug, Default)]
pub struct TerrainSession {
    canopy: CanopyMode,
    current: Option<GeneratedTerrain>,
    generations: u64,
}

impl TerrainSession {
    /// Create an empty session.
    pub fn new(canopy: CanopyMode) -> Self {
        Self {
            canopy,
            current: None,
            generations: 0,
        }
    }

    /// The terrain currently on display, if any.
    pub fn current(&self) -> Option<&GeneratedTerrain> {
        self.current.as_ref()
    }

    /// Number of terrains successfully submitted so far.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Generate a new terrain and swap it in.
    ///
    /// On failure nothing is released or submitted and the previous terrain
    /// stays current.
    ///
    /// # Errors
    ///
    /// Propagates any [`GenerationError`] from [`generate`].
    pub fn regenerate<S: TerrainSink + ?Sized>(
        &mut self,
        params: &GenerationParams,
        sink: &mut S,
    ) -> Result<&GeneratedTerrain, GenerationError> {
        let terrain = generate(params, self.canopy).inspect_err(|err| {
            warn!(%err, "terrain generation failed; keeping previous terrain");
        })?;

        if self.current.is_some() {
            sink.release_terrain();
        }
        sink.submit_terrain(&terrain.batch);
        self.generations += 1;

        Ok(self.current.insert(terrain))
    }
}
