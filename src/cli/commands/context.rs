//! Project state shared by the commands that need configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetArgs;
use crate::config::{load_config, validate, CompatConfig};
use crate::database::CompatDatabase;
use crate::error::Result;
use crate::targets::{Target, TargetQuery, TargetResolver};

/// Loaded and validated configuration for one project.
#[derive(Debug)]
pub struct ProjectContext {
    project_root: PathBuf,
    config: CompatConfig,
}

impl ProjectContext {
    /// Load configuration for `project_root`, or only `config_override`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when there is nothing to load, and
    /// `ConfigValidationError` when the configuration is invalid.
    pub fn load(project_root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let config = load_config(project_root, config_override)?;
        Self::new(project_root, config)
    }

    /// Wrap an already-loaded configuration after validating it.
    pub fn new(project_root: &Path, config: CompatConfig) -> Result<Self> {
        validate(&config)?;
        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
        })
    }

    pub fn config(&self) -> &CompatConfig {
        &self.config
    }

    /// Load the compatibility database, preferring `override_path`.
    pub fn database(&self, override_path: Option<&Path>) -> Result<CompatDatabase> {
        let path = match override_path {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => self.project_root.join(path),
            None => self.config.database_path(&self.project_root),
        };
        tracing::debug!("Loading compatibility data from {}", path.display());
        CompatDatabase::load(&path)
    }

    /// Resolve the targets selected by command-line arguments and config.
    pub fn resolve_targets(
        &self,
        database: &CompatDatabase,
        args: &TargetArgs,
    ) -> Result<Vec<Target>> {
        let aliases = self.config.alias_table();
        let expander = self.config.expander();
        let options = self.config.query_options_for(args.env.as_deref());
        let query = args.targets.as_deref().map(TargetQuery::from);

        let resolver = TargetResolver::new(database, &aliases);
        let targets = resolver.resolve(&expander, query.as_ref(), &options)?;
        tracing::debug!(
            "Resolved {} target(s): {}",
            targets.len(),
            targets
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(targets)
    }
}
