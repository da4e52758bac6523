//! Memoization of target resolution.
//!
//! Resolution is pure, so results can be reused for the lifetime of the
//! database and alias table they were computed against.

use std::collections::HashMap;

use super::query::{QueryExpander, QueryOptions, TargetQuery};
use super::resolver::TargetResolver;
use super::Target;
use crate::error::Result;

/// Resolved targets keyed by raw query and options.
#[derive(Debug, Default)]
pub struct TargetCache {
    entries: HashMap<String, Vec<Target>>,
}

impl TargetCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(query: Option<&TargetQuery>, options: &QueryOptions) -> String {
        let query = query.map(ToString::to_string).unwrap_or_default();
        let options = serde_json::to_string(options).unwrap_or_default();
        format!("{}|{}", query, options)
    }

    /// Return cached targets, resolving on first use.
    ///
    /// Failed resolutions are not cached.
    pub fn get_or_resolve(
        &mut self,
        resolver: &TargetResolver<'_>,
        expander: &dyn QueryExpander,
        query: Option<&TargetQuery>,
        options: &QueryOptions,
    ) -> Result<&[Target]> {
        let key = Self::key(query, options);
        if !self.entries.contains_key(&key) {
            let targets = resolver.resolve(expander, query, options)?;
            self.entries.insert(key.clone(), targets);
        } else {
            tracing::trace!("Target cache hit for '{}'", key);
        }
        Ok(&self.entries[&key])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
