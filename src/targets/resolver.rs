//! Normalization of named versions into a canonical target set.
//!
//! Resolution keeps the *oldest* version seen for each family: a target set
//! is a "must work on all of these" contract, so the least capable runtime
//! is the one that matters. Families the database does not know are dropped
//! without error.

use std::collections::HashMap;

use super::alias::FamilyAliasTable;
use super::query::{QueryExpander, QueryOptions, TargetQuery};
use super::Target;
use crate::compat::version::Version;
use crate::database::CompatDatabase;
use crate::error::{CompatError, Result};

/// Resolves raw target queries against a database and alias table.
#[derive(Debug, Clone, Copy)]
pub struct TargetResolver<'a> {
    database: &'a CompatDatabase,
    aliases: &'a FamilyAliasTable,
}

impl<'a> TargetResolver<'a> {
    pub fn new(database: &'a CompatDatabase, aliases: &'a FamilyAliasTable) -> Self {
        Self { database, aliases }
    }

    /// Expand a query and resolve the result.
    ///
    /// # Errors
    ///
    /// Expansion errors propagate unchanged. Returns `QueryError` or
    /// `InvalidVersion` for malformed named versions.
    pub fn resolve(
        &self,
        expander: &dyn QueryExpander,
        query: Option<&TargetQuery>,
        options: &QueryOptions,
    ) -> Result<Vec<Target>> {
        let named = expander.expand(query, options)?;
        self.resolve_named(&named)
    }

    /// Resolve already-expanded `"family version"` strings.
    ///
    /// Output order follows the first appearance of each family. Versions of
    /// families the database does not know are never parsed, so entries like
    /// `op_mini all` are dropped rather than rejected.
    pub fn resolve_named<S: AsRef<str>>(&self, named: &[S]) -> Result<Vec<Target>> {
        let mut targets: Vec<Target> = Vec::new();
        let mut by_family: HashMap<&str, usize> = HashMap::new();

        for entry in named {
            let (raw, version) = split_named_version(entry.as_ref())?;
            let family = self.aliases.canonical(raw);
            if !self.database.has_family(family) {
                tracing::debug!("Ignoring target family '{}' (not in compat data)", family);
                continue;
            }
            let version = Version::parse(version)?;

            // Two query names can share a canonical family.
            match by_family.get(family) {
                Some(&i) => {
                    if version < targets[i].version {
                        targets[i].version = version;
                    }
                }
                None => {
                    by_family.insert(family, targets.len());
                    targets.push(Target {
                        family: family.to_string(),
                        version,
                    });
                }
            }
        }

        tracing::debug!(
            "Resolved {} named versions into {} targets",
            named.len(),
            targets.len()
        );
        Ok(targets)
    }
}

/// Split `"family version"`, collapsing `low-high` ranges to `low`.
fn split_named_version(entry: &str) -> Result<(&str, &str)> {
    let (family, version) =
        entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| CompatError::QueryError {
                query: entry.to_string(),
                message: "expected 'family version'".to_string(),
            })?;

    let version = version.trim();
    Ok((family, version.split('-').next().unwrap_or(version)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database() -> CompatDatabase {
        CompatDatabase::from_json_str(
            r#"{ "browsers": {
                "chrome": {}, "firefox": {}, "nodejs": {}, "safari_ios": {}, "opera": {}
            } }"#,
        )
        .unwrap()
    }

    fn resolve(named: &[&str]) -> Vec<(String, String)> {
        let db = database();
        let aliases = FamilyAliasTable::builtin();
        TargetResolver::new(&db, &aliases)
            .resolve_named(named)
            .unwrap()
            .into_iter()
            .map(|t| (t.family, t.version.to_string()))
            .collect()
    }

    fn pair(family: &str, version: &str) -> (String, String) {
        (family.to_string(), version.to_string())
    }

    #[test]
    fn oldest_version_per_family_wins() {
        let targets = resolve(&["chrome 50", "chrome 60", "chrome 55"]);
        assert_eq!(targets, vec![pair("chrome", "50")]);
    }

    #[test]
    fn oldest_is_numeric_not_lexicographic() {
        let targets = resolve(&["firefox 100", "firefox 99", "firefox 102"]);
        assert_eq!(targets, vec![pair("firefox", "99")]);
    }

    #[test]
    fn ranges_collapse_to_lower_bound() {
        let targets = resolve(&["opera 68-70"]);
        assert_eq!(targets, vec![pair("opera", "68")]);
    }

    #[test]
    fn aliased_family_uses_canonical_name() {
        let targets = resolve(&["node 12.22.0", "ios_saf 12.2-12.5"]);
        assert_eq!(
            targets,
            vec![pair("nodejs", "12.22.0"), pair("safari_ios", "12.2")]
        );
    }

    #[test]
    fn unknown_family_is_dropped() {
        let targets = resolve(&["chrome 80", "op_mini 5", "kaios 2.5"]);
        assert_eq!(targets, vec![pair("chrome", "80")]);
    }

    #[test]
    fn unknown_family_with_non_numeric_version_is_dropped() {
        let targets = resolve(&["chrome 100", "op_mini all", "safari TP"]);
        assert_eq!(targets, vec![pair("chrome", "100")]);
    }

    #[test]
    fn families_sharing_canonical_name_keep_oldest() {
        let targets = resolve(&["nodejs 14", "node 10"]);
        assert_eq!(targets, vec![pair("nodejs", "10")]);
    }

    #[test]
    fn order_follows_first_appearance() {
        let targets = resolve(&["firefox 90", "chrome 80", "firefox 88"]);
        assert_eq!(targets, vec![pair("firefox", "88"), pair("chrome", "80")]);
    }

    #[test]
    fn empty_input_resolves_to_empty_set() {
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn entry_without_version_is_error() {
        let db = database();
        let aliases = FamilyAliasTable::builtin();
        let err = TargetResolver::new(&db, &aliases)
            .resolve_named(&["chrome"])
            .unwrap_err();
        assert!(matches!(err, CompatError::QueryError { .. }));
    }

    #[test]
    fn non_numeric_version_is_error() {
        let db = database();
        let aliases = FamilyAliasTable::builtin();
        let err = TargetResolver::new(&db, &aliases)
            .resolve_named(&["firefox TP"])
            .unwrap_err();
        assert!(matches!(err, CompatError::InvalidVersion { .. }));
    }

    #[test]
    fn resolve_runs_expander() {
        use crate::targets::query::ConfigExpander;

        let db = database();
        let aliases = FamilyAliasTable::builtin();
        let expander = ConfigExpander::default();
        let query = TargetQuery::from("chrome 61, chrome 58, node 8");

        let targets = TargetResolver::new(&db, &aliases)
            .resolve(&expander, Some(&query), &QueryOptions::new())
            .unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].family, "chrome");
        assert_eq!(targets[0].version.to_string(), "58");
        assert_eq!(targets[1].family, "nodejs");
    }

    #[test]
    fn expander_failure_propagates() {
        use crate::targets::query::ConfigExpander;

        let db = database();
        let aliases = FamilyAliasTable::builtin();
        let result = TargetResolver::new(&db, &aliases).resolve(
            &ConfigExpander::default(),
            None,
            &QueryOptions::new(),
        );
        assert!(matches!(result, Err(CompatError::QueryError { .. })));
    }
}
