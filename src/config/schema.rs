//! Configuration schema definitions for escompat.
//!
//! This module contains the struct definitions that map to the
//! `.escompat.yml` file format.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::Edition;
use crate::targets::query::{QueryOptions, ENV_OPTION};
use crate::targets::{ConfigExpander, FamilyAliasTable, TargetQuery};

/// Where the database lives when the config doesn't say.
pub const DEFAULT_DATABASE: &str = "node_modules/@mdn/browser-compat-data/data.json";

/// Root configuration structure for `.escompat.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CompatConfig {
    /// Compatibility database JSON file (relative to project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Default target query, e.g. "chrome 80, safari 13.1"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<TargetQuery>,

    /// Named target environments, selected with --env or ESCOMPAT_ENV
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environments: BTreeMap<String, TargetQuery>,

    /// Options forwarded to query expansion
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub query_options: QueryOptions,

    /// Polyfills the project loads; matching features are not reported
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub polyfills: Vec<String>,

    /// Editions to check (all when empty)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub editions: Vec<Edition>,

    /// Extra query family aliases, layered over the built-in ones
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

impl CompatConfig {
    /// Database path resolved against the project root.
    pub fn database_path(&self, project_root: &Path) -> PathBuf {
        let path = self
            .database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
        if path.is_absolute() {
            path
        } else {
            project_root.join(path)
        }
    }

    /// Query expander over the configured queries.
    pub fn expander(&self) -> ConfigExpander {
        ConfigExpander::new(self.targets.clone(), self.environments.clone())
    }

    /// Built-in aliases plus configured ones.
    pub fn alias_table(&self) -> FamilyAliasTable {
        FamilyAliasTable::builtin().with_overrides(&self.aliases)
    }

    /// Query options, with `env` replaced when one is given.
    pub fn query_options_for(&self, env: Option<&str>) -> QueryOptions {
        let mut options = self.query_options.clone();
        if let Some(env) = env {
            options.insert(ENV_OPTION.to_string(), Value::String(env.to_string()));
        }
        options
    }
}
