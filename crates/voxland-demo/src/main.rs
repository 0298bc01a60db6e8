//! Command-line front end for Voxland.
//!
//! Loads `config.ron`, applies CLI overrides, generates one terrain and hands
//! its instance batches to an in-memory instanced scene.
//! Run with `cargo run -p voxland-demo -- --seed 7 --size 96`.

mod scene;

use clap::Parser;
use tracing::{error, info};
use voxland_config::{CliArgs, Config, default_config_dir};
use voxland_terrain::{CameraFraming, TerrainSession};

use crate::scene::InstancedScene;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    voxland_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let params = &config.terrain;
    info!(
        "Generating {0}x{0} terrain (max height {1}, seed {2}, trees {3}%, river {4})",
        params.size, params.max_height, params.seed, params.tree_count, params.river_width
    );

    let mut scene = InstancedScene::default();
    let mut session = TerrainSession::new(config.canopy);
    let terrain = match session.regenerate(params, &mut scene) {
        Ok(terrain) => terrain,
        Err(e) => {
            error!("Terrain generation failed: {e}");
            return Err(e.into());
        }
    };

    info!(
        "{} instances in {} draw groups, {} trees, {} river columns, {:.1} ms",
        terrain.batch.total_instances(),
        scene.groups().len(),
        terrain.trees.len(),
        terrain.river_mask.count(),
        terrain.generation_time_us as f64 / 1000.0
    );

    let instance_bytes: usize = scene
        .groups()
        .iter()
        .map(|g| std::mem::size_of_val(g.instances.as_slice()))
        .sum();
    info!("Instance buffers: {:.1} KiB", instance_bytes as f64 / 1024.0);

    let order: Vec<_> = scene.draw_order().map(|g| g.category.name()).collect();
    info!("Draw order: {}", order.join(", "));

    if let Some((lo, hi)) = terrain.batch.bounds() {
        info!("Block bounds: {lo} .. {hi}");
    }
    let framing = CameraFraming::for_terrain(params.size, params.max_height);
    info!("Camera eye {} looking at {}", framing.eye, framing.target);

    Ok(())
}
