//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::LintDiagnostic;
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.paint("error", Style::new().red().bold()),
                diag.rule_id.0,
                diag.message
            )?;

            if !diag.targets.is_empty() {
                writeln!(writer, "  --> unsupported by {}", diag.targets.join(", "))?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(
                    writer,
                    "   = {}: {}",
                    self.paint("help", Style::new().green()),
                    suggestion
                )?;
            }

            writeln!(writer)?;
        }

        if !diagnostics.is_empty() {
            writeln!(writer, "Found {} unsupported feature(s)", diagnostics.len())?;
        }

        Ok(())
    }
}
