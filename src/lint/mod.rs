//! Compatibility linting.
//!
//! This module connects the compatibility engine to reporting.
//!
//! # Overview
//!
//! - **Check** - Unsupported features minus polyfilled ones ([`check_compatibility`])
//! - **Diagnostics** - One report per unsupported feature ([`LintDiagnostic`])
//! - **Output** - Human and JSON formatters ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use escompat::lint::{LintDiagnostic, RuleId};
//!
//! let diag = LintDiagnostic::new(RuleId::new("no-optional-chaining"), "disallow `?.`")
//!     .with_target("safari 13");
//! assert_eq!(diag.rule_id.to_string(), "no-optional-chaining");
//! assert_eq!(diag.targets, vec!["safari 13"]);
//! ```

pub mod check;
pub mod diagnostic;
pub mod output;
pub mod rule;

pub use check::check_compatibility;
pub use diagnostic::LintDiagnostic;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use rule::RuleId;
