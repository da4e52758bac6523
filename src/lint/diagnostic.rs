//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for reporting a feature
//! that at least one target runtime does not support.

use super::rule::RuleId;

/// A diagnostic produced for one unsupported feature.
///
/// Every diagnostic is an error: it fails `escompat check`.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule the feature enables.
    pub rule_id: RuleId,
    /// Human-readable message.
    pub message: String,
    /// Targets lacking support, rendered as `family version`.
    pub targets: Vec<String>,
    /// Polyfill that would silence this diagnostic.
    pub polyfill: Option<String>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            message: message.into(),
            targets: vec![],
            polyfill: None,
            suggestion: None,
        }
    }

    /// Record a target lacking support.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Record the feature's polyfill identifier.
    pub fn with_polyfill(mut self, polyfill: impl Into<String>) -> Self {
        self.polyfill = Some(polyfill.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("no-bigint"), "Test message");

        assert_eq!(diag.rule_id, RuleId::new("no-bigint"));
        assert_eq!(diag.message, "Test message");
        assert!(diag.targets.is_empty());
        assert!(diag.polyfill.is_none());
        assert!(diag.suggestion.is_none());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new(RuleId::new("no-global-this"), "msg")
            .with_target("safari 12")
            .with_target("ie 11")
            .with_polyfill("globalThis")
            .with_suggestion("Fix it like this");

        assert_eq!(diag.targets, vec!["safari 12", "ie 11"]);
        assert_eq!(diag.polyfill.as_deref(), Some("globalThis"));
        assert_eq!(diag.suggestion.unwrap(), "Fix it like this");
    }
}
