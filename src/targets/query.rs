//! Target queries and their expansion into named versions.
//!
//! The resolver depends only on the [`QueryExpander`] trait. The bundled
//! [`ConfigExpander`] understands explicit `family version` terms, version
//! ranges (`safari 15.2-15.3`) and `env:<name>` references to environments
//! declared in the configuration file.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CompatError, Result};

/// Opaque key/value options forwarded to the expander.
pub type QueryOptions = BTreeMap<String, Value>;

/// Option key selecting a named environment.
pub const ENV_OPTION: &str = "env";

static NAMED_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_]+)\s+(\d+(?:\.\d+)*(?:-\d+(?:\.\d+)*)?)$")
        .expect("named version pattern is valid")
});

/// A raw target query: one comma-separated string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TargetQuery {
    One(String),
    Many(Vec<String>),
}

impl TargetQuery {
    /// Individual terms, trimmed, empty ones dropped.
    pub fn terms(&self) -> Vec<&str> {
        let parts: Vec<&str> = match self {
            TargetQuery::One(query) => vec![query.as_str()],
            TargetQuery::Many(queries) => queries.iter().map(String::as_str).collect(),
        };
        parts
            .into_iter()
            .flat_map(|part| part.split(','))
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect()
    }
}

impl fmt::Display for TargetQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms().join(", "))
    }
}

impl From<&str> for TargetQuery {
    fn from(query: &str) -> Self {
        TargetQuery::One(query.to_string())
    }
}

/// Name of the environment selected by the query options, if any.
pub fn selected_env(options: &QueryOptions) -> Option<&str> {
    options.get(ENV_OPTION).and_then(Value::as_str)
}

/// Expands a raw query into `"family version"` strings.
pub trait QueryExpander {
    /// Expand `query`, or the expander's default when `None`.
    ///
    /// # Errors
    ///
    /// Failures propagate unchanged to the resolver's caller.
    fn expand(&self, query: Option<&TargetQuery>, options: &QueryOptions) -> Result<Vec<String>>;
}

/// Expander backed by the queries declared in configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigExpander {
    default_query: Option<TargetQuery>,
    environments: BTreeMap<String, TargetQuery>,
}

impl ConfigExpander {
    pub fn new(
        default_query: Option<TargetQuery>,
        environments: BTreeMap<String, TargetQuery>,
    ) -> Self {
        Self {
            default_query,
            environments,
        }
    }

    fn environment(&self, name: &str) -> Result<&TargetQuery> {
        self.environments
            .get(name)
            .ok_or_else(|| CompatError::UnknownEnvironment {
                name: name.to_string(),
            })
    }

    fn expand_terms<'a>(
        &'a self,
        query: &'a TargetQuery,
        visiting: &mut Vec<&'a str>,
        out: &mut Vec<String>,
    ) -> Result<()> {
        for term in query.terms() {
            if let Some(name) = term.strip_prefix("env:") {
                let name = name.trim();
                if visiting.contains(&name) {
                    return Err(CompatError::QueryError {
                        query: term.to_string(),
                        message: format!("environment '{}' refers to itself", name),
                    });
                }
                let nested = self.environment(name)?;
                visiting.push(name);
                self.expand_terms(nested, visiting, out)?;
                visiting.pop();
                continue;
            }

            let captures =
                NAMED_VERSION
                    .captures(term)
                    .ok_or_else(|| CompatError::QueryError {
                        query: term.to_string(),
                        message: "expected 'family version' or 'env:<name>'".to_string(),
                    })?;
            out.push(format!(
                "{} {}",
                captures[1].to_ascii_lowercase(),
                &captures[2]
            ));
        }
        Ok(())
    }
}

impl QueryExpander for ConfigExpander {
    fn expand(&self, query: Option<&TargetQuery>, options: &QueryOptions) -> Result<Vec<String>> {
        let root = match (query, selected_env(options)) {
            (Some(query), _) => query,
            (None, Some(env)) => self.environment(env)?,
            (None, None) => {
                self.default_query
                    .as_ref()
                    .ok_or_else(|| CompatError::QueryError {
                        query: String::new(),
                        message: "no target query configured".to_string(),
                    })?
            }
        };

        let mut named = Vec::new();
        self.expand_terms(root, &mut Vec::new(), &mut named)?;
        tracing::debug!("Expanded '{}' into {} named versions", root, named.len());
        Ok(named)
    }
}
