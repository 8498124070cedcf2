/// Demo parameter files
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use xform_core::DemoParams;

/// Load demo parameters from a TOML file, or fall back to the defaults.
///
/// Tables not present in the file, and fields not present in a table, keep
/// their default values.
pub fn load_params(path: Option<&Path>) -> Result<DemoParams> {
    let Some(path) = path else {
        info!("Using default demo parameters");
        return Ok(DemoParams::default());
    };

    info!("Loading demo parameters from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_params(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_params(content: &str) -> Result<DemoParams> {
    Ok(toml::from_str(content)?)
}
