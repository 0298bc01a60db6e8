//! Command-line argument parsing for Voxland.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use voxland_terrain::CanopyMode;

use crate::Config;

/// Canopy randomness source as a CLI value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CanopyArg {
    /// Derive leaf decisions from the world seed.
    Seeded,
    /// Draw leaf decisions from fresh entropy.
    Entropy,
}

impl From<CanopyArg> for CanopyMode {
    fn from(arg: CanopyArg) -> Self {
        match arg {
            CanopyArg::Seeded => CanopyMode::Seeded,
            CanopyArg::Entropy => CanopyMode::Entropy,
        }
    }
}

/// Voxland command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "voxland", about = "Procedural voxel landscape generator")]
pub struct CliArgs {
    /// Grid side length in columns.
    #[arg(long)]
    pub size: Option<u32>,

    /// Nominal maximum terrain height in blocks.
    #[arg(long)]
    pub max_height: Option<u32>,

    /// Horizontal noise frequency.
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// World seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Mountain intensity multiplier.
    #[arg(long)]
    pub mountain_height: Option<f64>,

    /// Tree density, percent of eligible columns (0-100).
    #[arg(long)]
    pub tree_count: Option<u32>,

    /// River radius in columns.
    #[arg(long)]
    pub river_width: Option<u32>,

    /// Canopy randomness source.
    #[arg(long, value_enum)]
    pub canopy: Option<CanopyArg>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let terrain = &mut self.terrain;
        if let Some(size) = args.size {
            terrain.size = size;
        }
        if let Some(max_height) = args.max_height {
            terrain.max_height = max_height;
        }
        if let Some(scale) = args.noise_scale {
            terrain.noise_scale = scale;
        }
        if let Some(seed) = args.seed {
            terrain.seed = seed;
        }
        if let Some(mountain) = args.mountain_height {
            terrain.mountain_height = mountain;
        }
        if let Some(trees) = args.tree_count {
            terrain.tree_count = trees;
        }
        if let Some(width) = args.river_width {
            terrain.river_width = width;
        }
        if let Some(canopy) = args.canopy {
            self.canopy = canopy.into();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            size: Some(128),
            seed: Some(-4),
            canopy: Some(CanopyArg::Entropy),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.terrain.size, 128);
        assert_eq!(config.terrain.seed, -4);
        assert_eq!(config.canopy, CanopyMode::Entropy);
        // Non-overridden fields retain defaults
        assert_eq!(config.terrain.max_height, 16);
        assert_eq!(config.terrain.river_width, 3);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "voxland",
            "--size",
            "32",
            "--seed",
            "-9",
            "--noise-scale",
            "0.1",
            "--canopy",
            "entropy",
        ])
        .unwrap();
        assert_eq!(args.size, Some(32));
        assert_eq!(args.seed, Some(-9));
        assert_eq!(args.noise_scale, Some(0.1));
        assert_eq!(args.canopy, Some(CanopyArg::Entropy));
        assert!(args.tree_count.is_none());
    }

    #[test]
    fn test_negative_width_rejected_by_parser() {
        let result = CliArgs::try_parse_from(["voxland", "--river-width", "-1"]);
        assert!(result.is_err());
    }
}
