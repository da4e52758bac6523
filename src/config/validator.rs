//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Polyfills must be ones the feature catalog knows
//! - Environments must not be empty
//! - `env:<name>` references and the `env` query option must name
//!   declared environments
//! - Environments must not reference each other in a cycle
//! - Aliases must map a non-empty family to a non-empty family

use crate::config::schema::CompatConfig;
use crate::error::{CompatError, Result};
use crate::features::KNOWN_POLYFILLS;
use crate::targets::query::selected_env;
use crate::targets::TargetQuery;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Environment name if error is environment-specific
    pub environment: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            environment: None,
        }
    }

    fn in_environment(mut self, name: &str) -> Self {
        self.environment = Some(name.to_string());
        self
    }
}

/// Validate a configuration and return all errors.
///
/// Every rule runs, so one pass reports every problem.
pub fn validate_config(config: &CompatConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_polyfills(config));
    errors.extend(validate_environments(config));
    errors.extend(validate_env_cycles(config));
    errors.extend(validate_aliases(config));

    errors
}

fn validate_polyfills(config: &CompatConfig) -> Vec<ValidationError> {
    config
        .polyfills
        .iter()
        .filter(|polyfill| !KNOWN_POLYFILLS.contains(&polyfill.as_str()))
        .map(|polyfill| {
            ValidationError::new(
                "unknown-polyfill",
                format!("Polyfill '{}' is not a known polyfill", polyfill),
            )
        })
        .collect()
}

fn env_references(query: &TargetQuery) -> impl Iterator<Item = &str> {
    query
        .terms()
        .into_iter()
        .filter_map(|term| term.strip_prefix("env:"))
        .map(str::trim)
}

fn validate_environments(config: &CompatConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, query) in &config.environments {
        if query.terms().is_empty() {
            errors.push(
                ValidationError::new(
                    "empty-environment",
                    format!("Environment '{}' has no targets", name),
                )
                .in_environment(name),
            );
        }

        for reference in env_references(query) {
            if !config.environments.contains_key(reference) {
                errors.push(
                    ValidationError::new(
                        "unknown-environment",
                        format!(
                            "Environment '{}' references 'env:{}' which does not exist",
                            name, reference
                        ),
                    )
                    .in_environment(name),
                );
            }
        }
    }

    if let Some(targets) = &config.targets {
        for reference in env_references(targets) {
            if !config.environments.contains_key(reference) {
                errors.push(ValidationError::new(
                    "unknown-environment",
                    format!("Targets reference 'env:{}' which does not exist", reference),
                ));
            }
        }
    }

    if let Some(env) = selected_env(&config.query_options) {
        if !config.environments.contains_key(env) {
            errors.push(ValidationError::new(
                "unknown-environment",
                format!("Query option 'env' selects '{}' which does not exist", env),
            ));
        }
    }

    errors
}

fn validate_env_cycles(config: &CompatConfig) -> Vec<ValidationError> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();

    for name in config.environments.keys() {
        if let Some(cycle) = detect_cycle(name, config, &mut visited, &mut path) {
            // Only report one cycle
            return vec![ValidationError::new(
                "circular-environment",
                format!("Circular environment reference detected: {}", cycle),
            )
            .in_environment(name)];
        }
    }

    Vec::new()
}

fn detect_cycle<'a>(
    name: &'a str,
    config: &'a CompatConfig,
    visited: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<String> {
    if let Some(start) = path.iter().position(|entry| *entry == name) {
        let mut cycle: Vec<&str> = path[start..].to_vec();
        cycle.push(name);
        return Some(cycle.join(" -> "));
    }
    if !visited.insert(name) {
        return None;
    }

    let query = config.environments.get(name)?;
    path.push(name);
    for reference in env_references(query) {
        if let Some(cycle) = detect_cycle(reference, config, visited, path) {
            return Some(cycle);
        }
    }
    path.pop();

    None
}

fn validate_aliases(config: &CompatConfig) -> Vec<ValidationError> {
    config
        .aliases
        .iter()
        .filter(|(alias, family)| alias.trim().is_empty() || family.trim().is_empty())
        .map(|(alias, family)| {
            ValidationError::new(
                "empty-alias",
                format!("Alias '{}' -> '{}' must name two families", alias, family),
            )
        })
        .collect()
}

/// Validate configuration, returning an error if invalid.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &CompatConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CompatError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
