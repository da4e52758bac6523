//! Compatibility entries.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::compat::support::SupportEntry;

/// One capability's per-family support data, e.g.
/// `javascript.builtins.Array.includes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatEntry {
    path: String,
    support: BTreeMap<String, SupportEntry>,
}

impl CompatEntry {
    /// Create an entry from its dotted path and support table.
    pub fn new(path: impl Into<String>, support: BTreeMap<String, SupportEntry>) -> Self {
        Self {
            path: path.into(),
            support,
        }
    }

    /// Dotted database path of this entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw support value recorded for a family.
    pub fn support_for(&self, family: &str) -> Option<&SupportEntry> {
        self.support.get(family)
    }

    /// Families with recorded data.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.support.keys().map(String::as_str)
    }
}

/// The `__compat` block of a database node.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCompat {
    #[serde(default)]
    pub support: BTreeMap<String, SupportEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::support::{Support, SupportStatement};

    #[test]
    fn support_for_returns_recorded_family() {
        let mut support = BTreeMap::new();
        support.insert(
            "firefox".to_string(),
            SupportEntry::Single(SupportStatement::new(Support::Unsupported)),
        );
        let entry = CompatEntry::new("javascript.builtins.BigInt", support);

        assert_eq!(entry.path(), "javascript.builtins.BigInt");
        assert!(entry.support_for("firefox").is_some());
        assert!(entry.support_for("chrome").is_none());
        assert_eq!(entry.families().collect::<Vec<_>>(), vec!["firefox"]);
    }
}
