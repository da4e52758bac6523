//! Dotted version parsing and comparison.
//!
//! Versions are any number of dot-separated integer segments. Text after the
//! first hyphen (pre-release or build suffix) is ignored, and a missing
//! trailing segment compares as `0`, so `1.2` and `1.2.0` are equal.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CompatError, Result};

/// A parsed dotted version such as `15.4` or `105`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    segments: Vec<u64>,
}

impl Version {
    /// Parse a version string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` if any segment before the first hyphen is
    /// not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self> {
        let numeric = input.split('-').next().unwrap_or_default();

        let segments = numeric
            .split('.')
            .map(|segment| segment.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| CompatError::InvalidVersion {
                version: input.to_string(),
            })?;

        Ok(Self {
            raw: input.to_string(),
            segments,
        })
    }

    /// The version as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric segments, suffix already stripped.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Segments with trailing zeros removed; equal versions share this form.
    fn significant(&self) -> &[u64] {
        let end = self
            .segments
            .iter()
            .rposition(|&s| s != 0)
            .map_or(0, |i| i + 1);
        &self.segments[..end]
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl FromStr for Version {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Compare two version strings.
///
/// # Errors
///
/// Returns `InvalidVersion` if either side has a non-numeric segment.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering> {
    Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
}
