//! Compatibility database access.
//!
//! The database follows the MDN browser-compat-data layout:
//!
//! ```json
//! {
//!   "browsers": { "chrome": { "name": "Chrome" } },
//!   "javascript": {
//!     "builtins": {
//!       "Array": {
//!         "includes": {
//!           "__compat": { "support": { "chrome": { "version_added": "47" } } }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Every node carrying a `__compat` block is indexed under its dotted path.
//! The database is read-only once loaded and is passed explicitly to the
//! components that need it.

pub mod entry;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CompatError, Result};

pub use entry::CompatEntry;
use entry::RawCompat;

const COMPAT_KEY: &str = "__compat";
const BROWSERS_KEY: &str = "browsers";
const META_KEY: &str = "__meta";

/// Registry metadata for a runtime family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FamilyInfo {
    /// Display name, e.g. "Safari on iOS".
    #[serde(default)]
    pub name: Option<String>,
    /// Kind of runtime: desktop, mobile, server, xr.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// An indexed compatibility database.
#[derive(Debug, Clone, Default)]
pub struct CompatDatabase {
    families: BTreeMap<String, FamilyInfo>,
    entries: HashMap<String, CompatEntry>,
}

impl CompatDatabase {
    /// Load a database from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseNotFound` if the file doesn't exist.
    /// Returns `DatabaseParseError` if the JSON or any support statement is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CompatError::DatabaseNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CompatError::Io(e)
            }
        })?;

        let database = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded {} compat entries for {} families from {}",
            database.len(),
            database.families.len(),
            path.display()
        );
        Ok(database)
    }

    /// Parse a database from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| CompatError::DatabaseParseError {
                message: e.to_string(),
            })?;
        Self::from_value(value)
    }

    /// Index an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(CompatError::DatabaseParseError {
                message: "top level must be an object".to_string(),
            });
        };

        let mut database = Self::default();

        for (key, node) in root {
            match key.as_str() {
                BROWSERS_KEY => {
                    database.families = serde_json::from_value(node).map_err(|e| {
                        CompatError::DatabaseParseError {
                            message: format!("{}: {}", BROWSERS_KEY, e),
                        }
                    })?;
                }
                META_KEY => {}
                _ => database.index_node(key, node)?,
            }
        }

        Ok(database)
    }

    fn index_node(&mut self, path: String, node: Value) -> Result<()> {
        let Value::Object(children) = node else {
            return Ok(());
        };

        for (key, child) in children {
            if key == COMPAT_KEY {
                let raw: RawCompat =
                    serde_json::from_value(child).map_err(|e| CompatError::DatabaseParseError {
                        message: format!("{}: {}", path, e),
                    })?;
                self.entries
                    .insert(path.clone(), CompatEntry::new(path.clone(), raw.support));
            } else {
                self.index_node(format!("{}.{}", path, key), child)?;
            }
        }

        Ok(())
    }

    /// Look up an entry by dotted path.
    pub fn lookup(&self, path: &str) -> Option<&CompatEntry> {
        self.entries.get(path)
    }

    /// Whether a canonical family name is in the registry.
    pub fn has_family(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Registry metadata for a family.
    pub fn family(&self, name: &str) -> Option<&FamilyInfo> {
        self.families.get(name)
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
