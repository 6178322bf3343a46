//! Centralized error types for the scaffold engine.

use std::path::Path;
use thiserror::Error;

/// Main error type for scaffold operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Cannot resolve base package: {0}")]
    NamespaceNotFound(String),

    #[error("Class not found in provided source code: {0}")]
    ClassNotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn fs(path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a template error from any displayable cause.
    pub fn template(cause: impl std::fmt::Display) -> Self {
        Self::Template(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_names_path() {
        let err = ScaffoldError::fs(
            Path::new("/tmp/x/CustomerEntity.java"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("CustomerEntity.java"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_class_not_found_message() {
        let err = ScaffoldError::ClassNotFound("CustomerService".to_string());
        assert_eq!(
            err.to_string(),
            "Class not found in provided source code: CustomerService"
        );
    }
}
