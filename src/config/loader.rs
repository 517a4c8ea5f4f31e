//! Loading YAML files from disk

use super::schema::{EngineConfig, ScenarioFile, UsageFile};
use super::validate::validate_config;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_yaml<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        context: format!("reading {what} {}", path.display()),
        source,
    })?;
    serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {what} {}: {e}", path.display())))
}

/// Parse an engine configuration file without validating it
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    read_yaml(path.as_ref(), "config file")
}

/// Load and validate an engine configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let config = read_config(path)?;
    validate_config(&config).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;

    tracing::debug!(
        path = %path.display(),
        custom_models = config.custom_models.len(),
        pue = ?config.defaults.pue,
        wue = ?config.defaults.wue,
        "loaded engine config"
    );
    Ok(config)
}

/// Load a baseline/proposed scenario file
pub fn load_scenario_file<P: AsRef<Path>>(path: P) -> Result<ScenarioFile> {
    let path = path.as_ref();
    let file: ScenarioFile = read_yaml(path, "scenario file")?;
    tracing::debug!(
        path = %path.display(),
        baseline = %file.baseline.name,
        proposed = %file.proposed.name,
        "loaded scenario file"
    );
    Ok(file)
}

/// Load a usage file
pub fn load_usage_file<P: AsRef<Path>>(path: P) -> Result<UsageFile> {
    let path = path.as_ref();
    let file: UsageFile = read_yaml(path, "usage file")?;
    tracing::debug!(path = %path.display(), entries = file.usage.len(), "loaded usage file");
    Ok(file)
}
