//! Configuration system for Voxland.
//!
//! Terrain parameters and runtime settings persist to disk as a RON file.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::{CanopyArg, CliArgs};
pub use config::{CONFIG_FILE, Config, DebugConfig, default_config_dir};
pub use error::ConfigError;
