//! Configuration file discovery and loading.
//!
//! The config file is optional. Without `--config`, envprobe looks for
//! `.envprobe.yml` in the project root and falls back to defaults when it
//! is missing. An explicit `--config` path must exist.

use crate::config::schema::ProbeConfig;
use crate::error::{EnvProbeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name in the project root.
pub const CONFIG_FILE_NAME: &str = ".envprobe.yml";

/// Path of the default project config (whether or not it exists).
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file and parse it into ProbeConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProbeConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvProbeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvProbeError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ProbeConfig.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProbeConfig> {
    if content.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvProbeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// Relative override paths resolve against the project root. The loaded
/// config is validated before it is returned.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProbeConfig> {
    let config = match config_override {
        Some(path) => {
            let path = project_root.join(path);
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            let path = default_config_path(project_root);
            if path.is_file() {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                ProbeConfig::default()
            }
        }
    };

    super::validate(&config)?;
    Ok(config)
}
