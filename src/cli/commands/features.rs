//! Features command implementation.
//!
//! The `escompat features` command lists the built-in catalog.

use std::io::Write;

use crate::cli::args::FeaturesArgs;
use crate::error::Result;
use crate::features::specs_for;

use super::dispatcher::{Command, CommandResult};

/// The features command implementation.
pub struct FeaturesCommand {
    args: FeaturesArgs,
}

impl FeaturesCommand {
    /// Create a new features command.
    pub fn new(args: FeaturesArgs) -> Self {
        Self { args }
    }
}

impl Command for FeaturesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let specs = specs_for(&self.args.edition);
        let width = specs.iter().map(|s| s.rule.len()).max().unwrap_or(0);

        let mut edition = None;
        for spec in &specs {
            if edition != Some(spec.edition) {
                if edition.is_some() {
                    writeln!(out)?;
                }
                writeln!(out, "{}", console::style(spec.edition).bold())?;
                edition = Some(spec.edition);
            }

            write!(out, "  {:width$}  {}", spec.rule, spec.description, width = width)?;
            if let Some(polyfill) = spec.polyfill {
                write!(out, " (polyfill: {})", polyfill)?;
            }
            writeln!(out)?;
        }

        Ok(CommandResult::success())
    }
}
