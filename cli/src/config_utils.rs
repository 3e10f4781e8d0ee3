//! Configuration loading utilities for the CLI

use adyen_lib::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load and validate configuration from CLI arguments or default location.
pub fn load_config(config_path: Option<impl AsRef<Path>>) -> Result<Config> {
    Config::load_from(config_path).context("Failed to load configuration")
}

/// Path the CLI reads and writes: `--config` when given, else the default.
pub fn resolve_config_path(config_path: Option<&String>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(Config::default_config_path()?),
    }
}
