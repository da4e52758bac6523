//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! the project root in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::CompatConfig;
use crate::error::{CompatError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const CONFIG_FILE: &str = ".escompat.yml";

/// Local override file name (usually git-ignored).
pub const LOCAL_CONFIG_FILE: &str = ".escompat.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.escompat.yml`)
/// 2. Local overrides (`.escompat.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .escompat.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .escompat.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_FILE)),
            project_local: existing(project_root.join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.escompat.yml` (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompatError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CompatError::Io(e)
        }
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CompatConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into CompatConfig.
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CompatConfig> {
    if content.trim().is_empty() {
        return Ok(CompatConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CompatError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(&content).map_err(|e| CompatError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project and local config files.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<CompatConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_project_config() {
        return Err(CompatError::ConfigNotFound {
            path: project_root.join(CONFIG_FILE),
        });
    }

    let configs = paths
        .all_existing()
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Merging {} config file(s)", configs.len());
    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| CompatError::ConfigParseError {
        path: project_root.join(CONFIG_FILE),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CompatConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
