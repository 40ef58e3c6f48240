//! Reading and writing run specification files

use crate::config::schema::RunSpec;
use crate::config::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a run specification from a YAML file without validating it
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<RunSpec> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    let spec: RunSpec = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    tracing::debug!(path = %path.display(), "loaded run spec");
    Ok(spec)
}

/// Load and validate a run specification
pub fn load_and_validate<P: AsRef<Path>>(config_path: P) -> Result<RunSpec> {
    let spec = load_config(config_path)?;
    validate_config(&spec)?;
    Ok(spec)
}

/// Write a run specification as YAML
pub fn save_config<P: AsRef<Path>>(spec: &RunSpec, path: P) -> Result<()> {
    let yaml = serde_yaml::to_string(spec)?;
    fs::write(path.as_ref(), yaml)?;
    Ok(())
}
