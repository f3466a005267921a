//! Unified error types for djread
//!
//! Error strategy:
//! - Every error is fatal for the document being read: there is no partial
//!   collection or half-built playlist tree
//! - Unknown playlist node types are not errors, they are skipped
//!
//! All errors include actionable suggestions where possible.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for djread operations
#[derive(Debug, Error)]
pub enum DjreadError {
    // =========================================================================
    // Input errors
    // =========================================================================
    #[error("File not found: '{0}'\n  Tip: Export your library from Rekordbox via File > Export Collection in xml format")]
    FileNotFound(PathBuf),

    #[error("Failed to parse XML in '{path}': {reason}\n  Tip: The file may be truncated or not a Rekordbox export")]
    Xml { path: PathBuf, reason: String },

    // =========================================================================
    // Record construction errors
    // =========================================================================
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("<{element}> attribute '{attribute}' has invalid value '{value}': {reason}")]
    InvalidValue {
        element: String,
        attribute: String,
        value: String,
        reason: String,
    },

    #[error("Playlist folders are nested deeper than {limit} levels\n  Tip: Flatten the folder structure in Rekordbox and export again")]
    NestingTooDeep { limit: usize },

    // =========================================================================
    // Output errors
    // =========================================================================
    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    OutputError { path: PathBuf, reason: String },

    #[error("Failed to read JSON export '{path}': {reason}")]
    Json { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for djread operations
pub type Result<T> = std::result::Result<T, DjreadError>;

impl DjreadError {
    /// Returns true if the error comes from the content of the document
    /// rather than from the filesystem
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            DjreadError::Xml { .. }
                | DjreadError::MissingAttribute { .. }
                | DjreadError::InvalidValue { .. }
                | DjreadError::NestingTooDeep { .. }
        )
    }

    /// Create a missing attribute error
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        DjreadError::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an invalid value error from a parser failure
    pub fn invalid_value(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        DjreadError::InvalidValue {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!("Permission denied. Check that you have write access to {}", path.display())
            }
            std::io::ErrorKind::NotFound => {
                format!("Directory does not exist: {}", path.parent().map(|p| p.display().to_string()).unwrap_or_default())
            }
            _ => err.to_string(),
        };
        DjreadError::OutputError { path, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_errors_classified() {
        assert!(DjreadError::missing_attribute("TRACK", "Name").is_document_error());
        assert!(DjreadError::NestingTooDeep { limit: 64 }.is_document_error());
        assert!(!DjreadError::FileNotFound(PathBuf::from("x.xml")).is_document_error());
    }

    #[test]
    fn test_invalid_value_message() {
        let err = DjreadError::invalid_value("TRACK", "TrackID", "abc", "invalid digit found in string");
        let msg = err.to_string();
        assert!(msg.contains("TrackID"));
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("<TRACK>"));
    }

    #[test]
    fn test_output_error_permission_denied() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        match DjreadError::output_error("/root/out.json", io) {
            DjreadError::OutputError { reason, .. } => assert!(reason.contains("Permission denied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
