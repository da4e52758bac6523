//! Support evaluation of features against targets.
//!
//! Missing or vague data is resolved optimistically: when the database
//! cannot show that a target lacks an entry, the entry counts as supported.
//! A feature whose compat references did not resolve is a catalog bug and
//! fails evaluation instead.

use std::borrow::Cow;

use super::support::{Support, SupportStatement};
use crate::database::CompatEntry;
use crate::error::{CompatError, Result};
use crate::features::Feature;
use crate::targets::Target;

/// The single statement that governs `family` for this entry.
///
/// Lists resolve to their first element; no data at all resolves to an
/// unknown statement.
pub fn simple_statement<'e>(entry: &'e CompatEntry, family: &str) -> Cow<'e, SupportStatement> {
    match entry.support_for(family).and_then(|s| s.primary()) {
        Some(statement) => Cow::Borrowed(statement),
        None => Cow::Owned(SupportStatement::unknown()),
    }
}

/// Whether one entry is supported by one target.
pub fn is_entry_supported_by_target(entry: &CompatEntry, target: &Target) -> bool {
    let statement = simple_statement(entry, &target.family);

    match &statement.version_added {
        Support::Unknown | Support::SupportedVersionUnknown => {
            tracing::trace!(
                "Assuming {} supports {} (no version data)",
                target,
                entry.path()
            );
            true
        }
        Support::Unsupported => false,
        Support::SupportedFrom(added) => target.version >= *added,
    }
}

/// Resolved entries of a feature, or a `MalformedFeature` error naming every
/// reference's status.
fn resolved_entries<'db>(feature: &Feature<'db>) -> Result<Vec<&'db CompatEntry>> {
    let entries: Option<Vec<_>> = feature.compat_features.iter().map(|r| r.entry).collect();

    entries.ok_or_else(|| {
        let summary = feature
            .compat_features
            .iter()
            .map(|r| {
                let status = if r.entry.is_some() { "present" } else { "absent" };
                format!("{}: {}", r.path, status)
            })
            .collect::<Vec<_>>()
            .join(", ");

        CompatError::MalformedFeature {
            rule: feature.description().to_string(),
            summary,
        }
    })
}

/// Whether every entry of `feature` is supported by `target`.
///
/// # Errors
///
/// Returns `MalformedFeature` if any compat reference is absent.
pub fn is_feature_supported_by_target(feature: &Feature<'_>, target: &Target) -> Result<bool> {
    Ok(resolved_entries(feature)?
        .into_iter()
        .all(|entry| is_entry_supported_by_target(entry, target)))
}

/// Whether `feature` is supported by every target.
///
/// Absent references fail even when `targets` is empty. This departs from a
/// plain "every target supports it" check, which would pass vacuously and
/// leave a broken catalog entry unnoticed until the first target is added.
pub fn is_feature_supported_by_targets(feature: &Feature<'_>, targets: &[Target]) -> Result<bool> {
    Ok(unsupported_targets(feature, targets)?.is_empty())
}

/// The targets that lack support for `feature`, in input order.
pub fn unsupported_targets<'t>(
    feature: &Feature<'_>,
    targets: &'t [Target],
) -> Result<Vec<&'t Target>> {
    let entries = resolved_entries(feature)?;

    Ok(targets
        .iter()
        .filter(|target| {
            !entries
                .iter()
                .all(|entry| is_entry_supported_by_target(entry, target))
        })
        .collect())
}
