//! Error types for escompat operations.
//!
//! This module defines [`CompatError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CompatError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CompatError::Other`) for unexpected errors
//! - Unknown support data and unknown target families are policies, not errors,
//!   and never surface here

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for escompat operations.
#[derive(Debug, Error)]
pub enum CompatError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Compatibility database file not found.
    #[error("Compatibility database not found: {path}")]
    DatabaseNotFound { path: PathBuf },

    /// Compatibility database could not be decoded.
    #[error("Failed to parse compatibility data: {message}")]
    DatabaseParseError { message: String },

    /// A version string contained a non-numeric segment.
    #[error("Invalid version '{version}'")]
    InvalidVersion { version: String },

    /// The target query could not be expanded into named versions.
    #[error("Invalid target query '{query}': {message}")]
    QueryError { query: String, message: String },

    /// A named target environment was requested but is not configured.
    #[error("Unknown target environment: {name}")]
    UnknownEnvironment { name: String },

    /// A feature was declared with a compatibility reference that did not resolve.
    #[error("Sparse compatFeatures for rule '{rule}': {summary}")]
    MalformedFeature { rule: String, summary: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for escompat operations.
pub type Result<T> = std::result::Result<T, CompatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CompatError::ConfigNotFound {
            path: PathBuf::from("/foo/.escompat.yml"),
        };
        assert!(err.to_string().contains("/foo/.escompat.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CompatError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_version_displays_version() {
        let err = CompatError::InvalidVersion {
            version: "1.x".into(),
        };
        assert!(err.to_string().contains("'1.x'"));
    }

    #[test]
    fn query_error_displays_query_and_message() {
        let err = CompatError::QueryError {
            query: "last 2 versions".into(),
            message: "unsupported term".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("last 2 versions"));
        assert!(msg.contains("unsupported term"));
    }

    #[test]
    fn malformed_feature_names_rule_and_summary() {
        let err = CompatError::MalformedFeature {
            rule: "disallow the `**` operator".into(),
            summary: "javascript.operators.exponentiation: absent".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("disallow the `**` operator"));
        assert!(msg.contains("absent"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CompatError = io_err.into();
        assert!(matches!(err, CompatError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CompatError::UnknownEnvironment {
                name: "staging".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
