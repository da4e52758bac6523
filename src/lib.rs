//! escompat - Report ECMAScript features your target runtimes don't support.
//!
//! escompat resolves a target query to the oldest version of each runtime
//! family, evaluates a catalog of language features against a browser
//! compatibility database, and reports the features some target lacks.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compat`] - Version comparison and support evaluation
//! - [`config`] - Configuration loading, merging, and validation
//! - [`database`] - The compatibility database
//! - [`error`] - Error types and result aliases
//! - [`features`] - The built-in feature catalog
//! - [`lint`] - Diagnostics and their output formats
//! - [`targets`] - Target queries and their resolution
//!
//! # Example
//!
//! ```
//! use escompat::compat::unsupported_features;
//! use escompat::database::CompatDatabase;
//! use escompat::features::{CompatRef, Feature, RuleConfig};
//! use escompat::targets::{FamilyAliasTable, TargetResolver};
//!
//! let db = CompatDatabase::from_json_str(r#"{
//!     "browsers": { "chrome": {}, "safari": {} },
//!     "javascript": { "operators": { "exponentiation": { "__compat": { "support": {
//!         "chrome": { "version_added": "52" }, "safari": { "version_added": "10.1" }
//!     } } } } }
//! }"#).unwrap();
//!
//! let aliases = FamilyAliasTable::builtin();
//! let targets = TargetResolver::new(&db, &aliases)
//!     .resolve_named(&["chrome 60", "safari 9"])
//!     .unwrap();
//!
//! let entry = db.lookup("javascript.operators.exponentiation").unwrap();
//! let features = vec![Feature::new(
//!     RuleConfig::new("no-exponential-operators", "disallow exponential operators"),
//!     vec![CompatRef::present(entry)],
//! )];
//!
//! let unsupported = unsupported_features(&features, &targets).unwrap();
//! assert_eq!(unsupported.len(), 1);
//! ```

pub mod cli;
pub mod compat;
pub mod config;
pub mod database;
pub mod error;
pub mod features;
pub mod lint;
pub mod targets;

pub use error::{CompatError, Result};
