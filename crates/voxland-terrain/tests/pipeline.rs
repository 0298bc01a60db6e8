//! Whole-pipeline properties of terrain generation.

use std::collections::HashSet;

use voxland_terrain::{
    CanopyMode, GenerationParams, MaterialCategory, NoiseSource, RiverMask, carve, generate,
    river_path, synthesize,
};

fn scenario_params() -> GenerationParams {
    GenerationParams {
        size: 8,
        max_height: 10,
        noise_scale: 0.1,
        seed: 1,
        mountain_height: 1.0,
        tree_count: 0,
        river_width: 0,
    }
}

#[test]
fn small_scenario_has_no_trees_and_bounded_heights() {
    let terrain = generate(&scenario_params(), CanopyMode::Seeded).unwrap();
    assert!(terrain.trees.is_empty());
    assert_eq!(terrain.height_field.size(), 8);
    for (x, z, h) in terrain.height_field.iter() {
        assert!((1..=10).contains(&h), "column ({x}, {z}) height {h}");
    }
    assert_eq!(terrain.batch.len(MaterialCategory::Wood), 0);
    assert_eq!(terrain.batch.len(MaterialCategory::Leaves), 0);
}

#[test]
fn zero_width_river_is_exactly_the_path() {
    let params = scenario_params();
    let terrain = generate(&params, CanopyMode::Seeded).unwrap();
    let noise = NoiseSource::new(params.seed);
    let path: HashSet<(usize, usize)> = river_path(&noise, 8)
        .into_iter()
        .filter(|&(x, z)| terrain.river_mask.contains(x, z))
        .map(|(x, z)| (x as usize, z as usize))
        .collect();
    let marked: HashSet<(usize, usize)> = terrain
        .river_mask
        .iter()
        .filter(|&(_, _, wet)| wet)
        .map(|(x, z, _)| (x, z))
        .collect();
    assert_eq!(marked, path);
}

#[test]
fn heightfield_and_river_are_deterministic() {
    let params = GenerationParams::default();
    let a = generate(&params, CanopyMode::Entropy).unwrap();
    let b = generate(&params, CanopyMode::Entropy).unwrap();
    assert_eq!(a.height_field, b.height_field);
    assert_eq!(a.river_mask, b.river_mask);
    assert_eq!(a.trees, b.trees);
}

#[test]
fn treeless_batches_identical_even_with_entropy() {
    let params = GenerationParams {
        tree_count: 0,
        ..Default::default()
    };
    let a = generate(&params, CanopyMode::Entropy).unwrap();
    let b = generate(&params, CanopyMode::Entropy).unwrap();
    assert_eq!(a.batch, b.batch);
}

#[test]
fn post_carve_heights_follow_river_rule() {
    let params = GenerationParams::default();
    let size = params.grid_size();
    let noise = NoiseSource::new(params.seed);
    let raw = synthesize(
        &noise,
        size,
        params.max_height,
        params.noise_scale,
        params.mountain_height,
    );
    let mask: RiverMask = carve(&noise, size, params.river_width);
    let terrain = generate(&params, CanopyMode::Seeded).unwrap();

    assert_eq!(terrain.river_mask, mask);
    for (x, z, final_height) in terrain.height_field.iter() {
        assert!(final_height >= 1);
        let expected = if mask.get(x, z) {
            raw.get(x, z).saturating_sub(3).max(1)
        } else {
            raw.get(x, z)
        };
        assert_eq!(final_height, expected, "column ({x}, {z})");
    }
}

#[test]
fn trees_stay_in_elevation_band() {
    let params = GenerationParams {
        tree_count: 80,
        ..Default::default()
    };
    let terrain = generate(&params, CanopyMode::Seeded).unwrap();
    assert!(!terrain.trees.is_empty());
    for tree in &terrain.trees {
        let relative = f64::from(tree.base_height) / f64::from(params.max_height);
        assert!(relative > 0.3 && relative < 0.7);
    }
}

#[test]
fn batch_accounts_for_every_voxel() {
    let params = GenerationParams {
        tree_count: 60,
        ..Default::default()
    };
    let terrain = generate(&params, CanopyMode::Seeded).unwrap();
    let batch = &terrain.batch;

    let fill: usize = terrain
        .height_field
        .iter()
        .map(|(_, _, h)| h as usize + 1)
        .sum();
    let water = terrain.river_mask.count();
    let trunks: usize = terrain.trees.iter().map(|t| t.height as usize).sum();
    let leaves = batch.len(MaterialCategory::Leaves);

    assert_eq!(batch.len(MaterialCategory::Water), water);
    assert_eq!(batch.len(MaterialCategory::Wood), trunks);
    assert_eq!(batch.total_instances(), fill + water + trunks + leaves);
}

#[test]
fn terrain_fill_stays_within_columns() {
    let terrain = generate(&GenerationParams::default(), CanopyMode::Seeded).unwrap();
    let terrain_categories = [
        MaterialCategory::Grass,
        MaterialCategory::Dirt,
        MaterialCategory::Stone,
        MaterialCategory::DeepStone,
        MaterialCategory::Snow,
    ];
    for category in terrain_categories {
        for p in terrain.batch.positions(category) {
            let surface = terrain.height_field.get(p.x as usize, p.z as usize);
            assert!(p.y >= 0 && p.y as u32 <= surface);
        }
    }
}

#[test]
fn different_seeds_give_different_terrain() {
    let a = generate(&GenerationParams::default(), CanopyMode::Seeded).unwrap();
    let b = generate(
        &GenerationParams {
            seed: 456,
            ..Default::default()
        },
        CanopyMode::Seeded,
    )
    .unwrap();
    assert_ne!(a.height_field, b.height_field);
}
