//! The unsupported-feature filter.

use super::evaluator::is_feature_supported_by_targets;
use crate::error::Result;
use crate::features::Feature;
use crate::targets::Target;

/// Features not supported by every target, in input order.
///
/// # Errors
///
/// Returns `MalformedFeature` for the first feature with an absent compat
/// reference; no partial result is produced.
pub fn unsupported_features<'f, 'db>(
    features: &'f [Feature<'db>],
    targets: &[Target],
) -> Result<Vec<&'f Feature<'db>>> {
    let mut unsupported = Vec::new();
    for feature in features {
        if !is_feature_supported_by_targets(feature, targets)? {
            unsupported.push(feature);
        }
    }
    Ok(unsupported)
}
