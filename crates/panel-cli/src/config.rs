//! Loading of run configuration and carried-forward id mappings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use panel_model::{IdMappings, RunConfig};

/// Loads the sampler configuration from a JSON file.
pub fn load_run_config(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse config: {}", path.display()))
}

/// Loads id mappings exported by a previous run.
pub fn load_id_mappings(path: &Path) -> Result<IdMappings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read id mappings: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse id mappings: {}", path.display()))
}
