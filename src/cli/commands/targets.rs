//! Targets command implementation.
//!
//! The `escompat targets` command shows the canonical target set a query
//! resolves to, with each family's display name and kind from the database.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::TargetsArgs;
use crate::compat::version::Version;
use crate::database::CompatDatabase;
use crate::error::Result;
use crate::targets::Target;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// One resolved target with its registry metadata.
#[derive(Serialize)]
struct TargetRow<'a> {
    family: &'a str,
    version: &'a Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
}

impl<'a> TargetRow<'a> {
    fn new(target: &'a Target, database: &'a CompatDatabase) -> Self {
        let info = database.family(&target.family);
        Self {
            family: &target.family,
            version: &target.version,
            name: info.and_then(|i| i.name.as_deref()),
            kind: info.and_then(|i| i.kind.as_deref()),
        }
    }
}

impl std::fmt::Display for TargetRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.version)?;
        if let Some(name) = self.name {
            write!(f, " - {}", name)?;
        }
        if let Some(kind) = self.kind {
            write!(f, " ({})", kind)?;
        }
        Ok(())
    }
}

/// The targets command implementation.
pub struct TargetsCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: TargetsArgs,
}

impl TargetsCommand {
    /// Create a new targets command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: TargetsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for TargetsCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let ctx = ProjectContext::load(&self.project_root, self.config_override.as_deref())?;
        let database = ctx.database(self.args.target.database.as_deref())?;
        let targets = ctx.resolve_targets(&database, &self.args.target)?;
        let rows: Vec<_> = targets
            .iter()
            .map(|target| TargetRow::new(target, &database))
            .collect();

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &rows).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        } else if rows.is_empty() {
            writeln!(out, "No known target runtimes")?;
        } else {
            for row in &rows {
                writeln!(out, "{}", row)?;
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TargetArgs;
    use crate::cli::commands::fixtures::project;
    use crate::error::CompatError;

    fn run(temp: &tempfile::TempDir, args: TargetsArgs) -> Result<String> {
        let mut out = Vec::new();
        TargetsCommand::new(temp.path(), None, args).execute(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_oldest_version_per_family() {
        let temp = project("targets: chrome 60, firefox 78, chrome 50, node 12.22");
        let output = run(&temp, TargetsArgs::default()).unwrap();
        assert_eq!(
            output,
            "chrome 50 - Chrome (desktop)\n\
             firefox 78 - Firefox (desktop)\n\
             nodejs 12.22 - Node.js (server)\n"
        );
    }

    #[test]
    fn ranges_resolve_to_lower_bound() {
        let temp = project("targets: safari 15.2-15.3");
        let output = run(&temp, TargetsArgs::default()).unwrap();
        assert!(output.starts_with("safari 15.2 - "));
    }

    #[test]
    fn json_output_lists_family_and_version() {
        let temp = project("targets: [safari 13.1, ie 11]");
        let args = TargetsArgs {
            json: true,
            ..Default::default()
        };
        let output = run(&temp, args).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["family"], "safari");
        assert_eq!(parsed[0]["version"], "13.1");
        assert_eq!(parsed[0]["name"], "Safari");
        assert_eq!(parsed[0]["type"], "desktop");
    }

    #[test]
    fn families_without_metadata_print_bare() {
        let db = CompatDatabase::from_json_str(r#"{ "browsers": { "opera": {} } }"#).unwrap();
        let target = Target::new("opera", "68").unwrap();
        let row = TargetRow::new(&target, &db);

        assert_eq!(row.to_string(), "opera 68");
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn only_unknown_families_is_empty() {
        let temp = project("targets: ie 11, op_mini 46");
        let output = run(&temp, TargetsArgs::default()).unwrap();
        assert_eq!(output.trim(), "No known target runtimes");
    }

    #[test]
    fn unknown_environment_is_error() {
        let temp = project("targets: chrome 80");
        let args = TargetsArgs {
            target: TargetArgs {
                env: Some("staging".to_string()),
                ..Default::default()
            },
            json: false,
        };
        let err = run(&temp, args).unwrap_err();
        assert!(matches!(err, CompatError::UnknownEnvironment { .. }));
    }
}
