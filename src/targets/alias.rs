//! Mapping from query family names to database family names.

use std::collections::BTreeMap;

/// Query names that differ from the compatibility database's names.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("and_chr", "chrome_android"),
    ("and_ff", "firefox_android"),
    ("android", "webview_android"),
    ("ios_saf", "safari_ios"),
    ("node", "nodejs"),
    ("op_mob", "opera_android"),
    ("samsung", "samsunginternet_android"),
];

/// Raw family name → canonical family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyAliasTable {
    aliases: BTreeMap<String, String>,
}

impl FamilyAliasTable {
    /// An empty table; every name maps to itself.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// The built-in query-name mapping.
    pub fn builtin() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// Layer extra aliases over this table. Later entries win.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (raw, canonical) in overrides {
            self.aliases.insert(raw.clone(), canonical.clone());
        }
        self
    }

    /// Canonical name for a raw family; identity when not aliased.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        self.aliases.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for FamilyAliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
