//! Check command implementation.
//!
//! The `escompat check` command reports catalog features that at least one
//! resolved target runtime does not support.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::features::{resolve_features, specs_for};
use crate::lint::{
    check_compatibility, HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter,
    OutputFormat,
};

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
            use_color: false,
        }
    }

    /// Color human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn load_context(&self) -> Result<ProjectContext> {
        let mut config = load_config(&self.project_root, self.config_override.as_deref())?;

        // Command-line polyfills add to the configured ones
        config.polyfills.extend(self.args.polyfills.iter().cloned());
        if !self.args.edition.is_empty() {
            config.editions = self.args.edition.clone();
        }

        ProjectContext::new(&self.project_root, config)
    }

    fn format_output(&self, diagnostics: &[LintDiagnostic], out: &mut dyn Write) -> Result<()> {
        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, out)?,
            OutputFormat::Human => HumanFormatter::new(self.use_color).format(diagnostics, out)?,
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let ctx = self.load_context()?;
        let database = ctx.database(self.args.target.database.as_deref())?;
        let targets = ctx.resolve_targets(&database, &self.args.target)?;

        let specs = specs_for(&ctx.config().editions);
        let features = resolve_features(&specs, &database);
        tracing::debug!(
            "Checking {} feature(s) against {} target(s)",
            features.len(),
            targets.len()
        );

        let diagnostics = check_compatibility(&features, &targets, &ctx.config().polyfills)?;

        if diagnostics.is_empty() && self.args.format == OutputFormat::Human {
            writeln!(
                out,
                "All {} checked feature(s) are supported by {} target(s)",
                features.len(),
                targets.len()
            )?;
            return Ok(CommandResult::success());
        }

        self.format_output(&diagnostics, out)?;

        if diagnostics.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
