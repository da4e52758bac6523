//! The feature compatibility engine.
//!
//! - [`version`] - Dotted version comparison
//! - [`support`] - Support statements decoded from the database
//! - [`evaluator`] - Per-entry, per-feature and per-target support checks
//! - [`filter`] - The [`unsupported_features`] entry point
//!
//! Every function here is pure: the same features, targets and database
//! always produce the same answer.

pub mod evaluator;
pub mod filter;
pub mod support;
pub mod version;

pub use evaluator::{
    is_entry_supported_by_target, is_feature_supported_by_target, is_feature_supported_by_targets,
    simple_statement, unsupported_targets,
};
pub use filter::unsupported_features;
pub use support::{Support, SupportEntry, SupportStatement};
pub use version::{compare_versions, Version};
