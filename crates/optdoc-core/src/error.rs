//! Error types and handling for tree completion

use crate::resolve::ResolveError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tree completion operations
#[derive(Debug, Error)]
pub enum OptdocError {
    /// The namespace member that anchors emission is absent
    #[error("Namespace root '{name}' not found in namespace tree")]
    MissingNamespaceRoot { name: String },

    /// Inheritance resolution failed for a chain of option nodes
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON reading or writing errors
    #[error("JSON error for path '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Structure,
    Resolve,
    Config,
    Io,
    Json,
    Internal,
}

impl OptdocError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OptdocError::MissingNamespaceRoot { .. } => ErrorKind::Structure,
            OptdocError::Resolve(_) => ErrorKind::Resolve,
            OptdocError::ConfigError { .. } => ErrorKind::Config,
            OptdocError::IoError { .. } => ErrorKind::Io,
            OptdocError::JsonError { .. } => ErrorKind::Json,
            OptdocError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Check if this error is recoverable (the tree walk can continue past it)
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Resolve)
    }

    /// Create a missing namespace root error
    pub fn missing_namespace_root(name: impl Into<String>) -> Self {
        Self::MissingNamespaceRoot { name: name.into() }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error with path context
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for OptdocError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_is_fatal() {
        let err = OptdocError::missing_namespace_root("Highcharts");
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("Highcharts"));
    }

    #[test]
    fn test_resolve_errors_are_recoverable() {
        let err: OptdocError = ResolveError::CyclicExtends {
            chain: vec!["a".to_string(), "a".to_string()],
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Resolve);
        assert!(err.is_recoverable());
    }
}
