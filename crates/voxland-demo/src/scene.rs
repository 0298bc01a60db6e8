//! In-memory stand-in for the instanced renderer.
//!
//! Mirrors what a GPU backend does with a submitted batch: one instance group
//! per non-empty material, each holding the material's appearance and the
//! packed instance matrices, all tagged as terrain so they can be released on
//! regeneration.

use tracing::{debug, info};
use voxland_terrain::{
    InstanceBatch, InstanceRaw, MaterialAppearance, MaterialCategory, TerrainSink,
};

/// One instanced draw: a unit cube drawn `instances.len()` times.
#[derive(Debug)]
pub struct InstanceGroup {
    pub category: MaterialCategory,
    pub appearance: MaterialAppearance,
    pub instances: Vec<InstanceRaw>,
    pub is_terrain: bool,
}

/// Holds the instance groups of the terrain currently on display.
#[derive(Debug, Default)]
pub struct InstancedScene {
    groups: Vec<InstanceGroup>,
}

impl InstancedScene {
    pub fn groups(&self) -> &[InstanceGroup] {
        &self.groups
    }

    /// Groups in draw order: opaque first, then alpha-blended.
    pub fn draw_order(&self) -> impl Iterator<Item = &InstanceGroup> {
        let opaque = self.groups.iter().filter(|g| !g.appearance.transparent);
        let blended = self.groups.iter().filter(|g| g.appearance.transparent);
        opaque.chain(blended)
    }
}

impl TerrainSink for InstancedScene {
    fn release_terrain(&mut self) {
        let before = self.groups.len();
        self.groups.retain(|g| !g.is_terrain);
        let freed = before - self.groups.len();
        debug!(freed, "released terrain instance groups");
    }

    fn submit_terrain(&mut self, batch: &InstanceBatch) {
        for (category, positions) in batch.groups() {
            let appearance = category.appearance();
            info!(
                "{:>10}: {:>7} instances, color #{:06x}{}",
                category.name(),
                positions.len(),
                appearance.color,
                if appearance.transparent { " (transparent)" } else { "" },
            );
            self.groups.push(InstanceGroup {
                category,
                appearance,
                instances: batch.gpu_instances(category),
                is_terrain: true,
            });
        }
    }
}
