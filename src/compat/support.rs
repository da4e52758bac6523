//! Support statements from the compatibility database.
//!
//! The raw `version_added` field is loosely typed (`null`, `false`, `true` or
//! a version string). It is decoded once, at load time, into [`Support`].

use serde::{Deserialize, Deserializer};

use super::version::Version;
use crate::error::{CompatError, Result};

/// When, if ever, a runtime family started supporting an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Support {
    /// No data (`null` or missing).
    #[default]
    Unknown,
    /// Never supported (`false`).
    Unsupported,
    /// Supported since some unrecorded version (`true`).
    SupportedVersionUnknown,
    /// Supported from this version onward, inclusive.
    SupportedFrom(Version),
}

impl Support {
    /// Decode a textual `version_added` value.
    ///
    /// Ranged values such as `≤37` mean "at or before 37"; the upper bound is
    /// kept. `preview` means not in any released version.
    pub fn from_version_text(text: &str) -> Result<Self> {
        if text == "preview" {
            return Ok(Self::Unsupported);
        }
        let text = text.strip_prefix('≤').unwrap_or(text);
        Ok(Self::SupportedFrom(Version::parse(text)?))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVersionAdded {
    Flag(bool),
    Text(String),
}

fn deserialize_version_added<'de, D>(deserializer: D) -> std::result::Result<Support, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawVersionAdded>::deserialize(deserializer)? {
        None => Ok(Support::Unknown),
        Some(RawVersionAdded::Flag(false)) => Ok(Support::Unsupported),
        Some(RawVersionAdded::Flag(true)) => Ok(Support::SupportedVersionUnknown),
        Some(RawVersionAdded::Text(text)) => Support::from_version_text(&text)
            .map_err(|e: CompatError| serde::de::Error::custom(e.to_string())),
    }
}

/// Support data for one (entry, family) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SupportStatement {
    #[serde(default, deserialize_with = "deserialize_version_added")]
    pub version_added: Support,
}

impl SupportStatement {
    pub fn new(version_added: Support) -> Self {
        Self { version_added }
    }

    /// Stand-in used when a family has no statement at all.
    pub fn unknown() -> Self {
        Self::new(Support::Unknown)
    }
}

/// A family's support value: one statement, or several where the first is
/// the most general (the rest cover flags, prefixes and alternative names).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SupportEntry {
    Single(SupportStatement),
    Multiple(Vec<SupportStatement>),
}

impl SupportEntry {
    /// The authoritative statement, if any.
    pub fn primary(&self) -> Option<&SupportStatement> {
        match self {
            SupportEntry::Single(statement) => Some(statement),
            SupportEntry::Multiple(statements) => statements.first(),
        }
    }
}
