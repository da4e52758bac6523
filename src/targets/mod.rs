//! Target runtime environments.
//!
//! - [`query`] - Raw queries and the [`QueryExpander`] collaborator
//! - [`alias`] - Query family names to database family names
//! - [`resolver`] - Canonical "oldest version per family" target sets
//! - [`cache`] - Per-process memoization of resolved queries
//!
//! # Example
//!
//! ```
//! use escompat::database::CompatDatabase;
//! use escompat::targets::{FamilyAliasTable, TargetResolver};
//!
//! let db = CompatDatabase::from_json_str(r#"{ "browsers": { "chrome": {}, "nodejs": {} } }"#)
//!     .unwrap();
//! let aliases = FamilyAliasTable::builtin();
//! let resolver = TargetResolver::new(&db, &aliases);
//!
//! let targets = resolver
//!     .resolve_named(&["chrome 60", "chrome 50", "node 12", "ie 11"])
//!     .unwrap();
//! assert_eq!(targets.len(), 2);
//! assert_eq!(targets[0].to_string(), "chrome 50");
//! assert_eq!(targets[1].to_string(), "nodejs 12");
//! ```

pub mod alias;
pub mod cache;
pub mod query;
pub mod resolver;

use std::fmt;

use serde::Serialize;

use crate::compat::version::Version;
use crate::error::Result;

pub use alias::FamilyAliasTable;
pub use cache::TargetCache;
pub use query::{ConfigExpander, QueryExpander, QueryOptions, TargetQuery};
pub use resolver::TargetResolver;

/// One concrete runtime environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    /// Canonical family name, e.g. `chrome` or `nodejs`.
    pub family: String,
    pub version: Version,
}

impl Target {
    /// Create a target, parsing the version.
    pub fn new(family: impl Into<String>, version: &str) -> Result<Self> {
        Ok(Self {
            family: family.into(),
            version: Version::parse(version)?,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.version)
    }
}
