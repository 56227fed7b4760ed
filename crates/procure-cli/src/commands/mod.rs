//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use procure_core::ProcureConfig;

/// Load the config file if one was given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ProcureConfig> {
    let config = match config_path {
        Some(path) => ProcureConfig::from_file(Path::new(path))?,
        None => ProcureConfig::default(),
    };
    Ok(config)
}
