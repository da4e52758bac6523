//! Turning unsupported features into diagnostics.
//!
//! This is where the polyfill allow-list applies: an unsupported feature
//! whose polyfill the project already loads is not reported.

use super::diagnostic::LintDiagnostic;
use super::rule::RuleId;
use crate::compat::{unsupported_features, unsupported_targets};
use crate::error::Result;
use crate::features::Feature;
use crate::targets::Target;

/// Report every feature some target cannot run, minus polyfilled ones.
///
/// # Errors
///
/// Returns `MalformedFeature` if any feature has an absent compat reference.
pub fn check_compatibility(
    features: &[Feature<'_>],
    targets: &[Target],
    polyfills: &[String],
) -> Result<Vec<LintDiagnostic>> {
    let mut diagnostics = Vec::new();

    for feature in unsupported_features(features, targets)? {
        let polyfill = feature.polyfill.as_deref();

        let loaded = |p: &&str| polyfills.iter().any(|known| known.as_str() == *p);
        if let Some(polyfill) = polyfill.filter(loaded) {
            tracing::debug!(
                "Skipping '{}' (polyfilled by {})",
                feature.description(),
                polyfill
            );
            continue;
        }

        let mut diagnostic = LintDiagnostic::new(
            RuleId::new(feature.rule_config.rule.as_str()),
            feature.description(),
        );
        for target in unsupported_targets(feature, targets)? {
            diagnostic = diagnostic.with_target(target.to_string());
        }
        if let Some(polyfill) = polyfill {
            diagnostic = diagnostic.with_polyfill(polyfill).with_suggestion(format!(
                "if you load a polyfill, add '{}' to `polyfills`",
                polyfill
            ));
        }

        diagnostics.push(diagnostic);
    }

    Ok(diagnostics)
}
