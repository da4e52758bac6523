//! Configuration loading, parsing, and validation for escompat.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use escompat::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".escompat.yml"), "targets: chrome 80").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.targets.unwrap().to_string(), "chrome 80");
//! ```
//!
//! # Configuration File Locations
//!
//! escompat discovers and merges configuration in this order:
//! 1. Project config (`.escompat.yml`)
//! 2. Local overrides (`.escompat.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{CompatConfig, DEFAULT_DATABASE};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_FILE, LOCAL_CONFIG_FILE,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
