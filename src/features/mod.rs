//! Features: lint rules paired with the compatibility entries they need.
//!
//! A [`FeatureSpec`] is a static catalog declaration naming database paths.
//! Resolving it against a [`CompatDatabase`] yields a [`Feature`], which is
//! what the compatibility engine reasons about.

pub mod catalog;
pub mod edition;

use serde_json::{json, Value};

use crate::database::{CompatDatabase, CompatEntry};

pub use catalog::{catalog, specs_for, KNOWN_POLYFILLS};
pub use edition::Edition;

/// Options passed to a generic restriction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOptions {
    /// Restrict calls of a prototype method, e.g. `Array.prototype.includes`.
    PrototypeMethod { method: &'static str },
    /// Restrict access to a static property, e.g. `Atomics.notify`.
    RestrictedProperty {
        object: &'static str,
        property: &'static str,
    },
}

impl RuleOptions {
    /// Render as the rule's option array.
    pub fn to_value(self, edition: Edition) -> Value {
        match self {
            RuleOptions::PrototypeMethod { method } => {
                let name = method.rsplit('.').next().unwrap_or(method);
                json!([{
                    "selector": format!(
                        "CallExpression[callee.property.name='{}']",
                        name
                    ),
                    "message": format!("{} is not supported in {}", method, edition),
                }])
            }
            RuleOptions::RestrictedProperty { object, property } => json!([{
                "object": object,
                "property": property,
                "message": format!("({})", edition),
            }]),
        }
    }
}

/// Opaque descriptor of the lint rule a feature enables.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    /// Rule identifier, e.g. `no-bigint`.
    pub rule: String,
    /// Human-readable description.
    pub description: String,
    /// Rule options, if the rule is configurable.
    pub options: Option<Value>,
}

impl RuleConfig {
    pub fn new(rule: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            description: description.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// A reference from a feature to a database entry, which may not resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatRef<'db> {
    pub path: &'db str,
    pub entry: Option<&'db CompatEntry>,
}

impl<'db> CompatRef<'db> {
    /// A resolved reference.
    pub fn present(entry: &'db CompatEntry) -> Self {
        Self {
            path: entry.path(),
            entry: Some(entry),
        }
    }

    /// A reference whose entry could not be found.
    pub fn absent(path: &'db str) -> Self {
        Self { path, entry: None }
    }
}

/// A lint-rule-level unit evaluated against targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<'db> {
    pub rule_config: RuleConfig,
    pub compat_features: Vec<CompatRef<'db>>,
    pub polyfill: Option<String>,
}

impl<'db> Feature<'db> {
    pub fn new(rule_config: RuleConfig, compat_features: Vec<CompatRef<'db>>) -> Self {
        Self {
            rule_config,
            compat_features,
            polyfill: None,
        }
    }

    pub fn with_polyfill(mut self, polyfill: impl Into<String>) -> Self {
        self.polyfill = Some(polyfill.into());
        self
    }

    /// Human-readable rule description.
    pub fn description(&self) -> &str {
        &self.rule_config.description
    }
}

/// A static catalog declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub edition: Edition,
    pub rule: &'static str,
    pub description: &'static str,
    pub compat: &'static [&'static str],
    pub polyfill: Option<&'static str>,
    pub options: Option<RuleOptions>,
}

impl FeatureSpec {
    /// Resolve compat paths against the database.
    ///
    /// Unresolved paths stay in place as absent references.
    pub fn resolve<'db>(&'static self, database: &'db CompatDatabase) -> Feature<'db> {
        let mut rule_config = RuleConfig::new(self.rule, self.description);
        if let Some(options) = self.options {
            rule_config = rule_config.with_options(options.to_value(self.edition));
        }

        let compat_features = self
            .compat
            .iter()
            .map(|path| match database.lookup(path) {
                Some(entry) => CompatRef::present(entry),
                None => CompatRef::absent(path),
            })
            .collect();

        Feature {
            rule_config,
            compat_features,
            polyfill: self.polyfill.map(String::from),
        }
    }
}

/// Resolve a list of catalog declarations, preserving order.
pub fn resolve_features<'db>(
    specs: &[&'static FeatureSpec],
    database: &'db CompatDatabase,
) -> Vec<Feature<'db>> {
    specs.iter().map(|spec| spec.resolve(database)).collect()
}
