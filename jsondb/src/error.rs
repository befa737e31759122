//! Error types for store operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Which name a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Collection,
    Resource,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Collection => write!(f, "collection"),
            NameKind::Resource => write!(f, "resource"),
        }
    }
}

/// Coarse classification of a [`StoreError`], for callers that branch on kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Serialization,
    Deserialization,
    Io,
}

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A collection or resource name was empty or unsafe for the filesystem
    #[error("invalid {kind} name: {message}")]
    Validation { kind: NameKind, message: String },

    /// Neither the bare path nor its `.json` form exists
    #[error("unable to find '{}'", display_target(.collection, .resource))]
    NotFound {
        collection: String,
        resource: String,
    },

    /// The value could not be encoded as JSON
    #[error("failed to serialize {collection}/{resource}: {source}")]
    Serialization {
        collection: String,
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored bytes are not valid JSON or do not match the target type
    #[error("failed to deserialize {collection}/{resource}: {source}")]
    Deserialization {
        collection: String,
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_target(collection: &str, resource: &str) -> String {
    if resource.is_empty() {
        collection.to_string()
    } else {
        format!("{}/{}", collection, resource)
    }
}

impl StoreError {
    /// Create a Validation error.
    pub fn validation(kind: NameKind, message: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
        }
    }

    /// Create a NotFound error.
    pub fn not_found(collection: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            resource: resource.into(),
        }
    }

    /// Create an Io error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation { .. } => ErrorKind::Validation,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Serialization { .. } => ErrorKind::Serialization,
            StoreError::Deserialization { .. } => ErrorKind::Deserialization,
            StoreError::Io { .. } => ErrorKind::Io,
        }
    }

    /// True for [`StoreError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found("users", "john");
        assert_eq!(err.to_string(), "unable to find 'users/john'");
        assert!(err.is_not_found());

        let err = StoreError::not_found("users", "");
        assert_eq!(err.to_string(), "unable to find 'users'");
    }

    #[test]
    fn test_validation_display() {
        let err = StoreError::validation(NameKind::Resource, "name is empty");
        assert_eq!(err.to_string(), "invalid resource name: name is empty");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::io("/tmp/db/users", source);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("/tmp/db/users"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_deserialization_kind() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Deserialization {
            collection: "users".into(),
            resource: "john".into(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Deserialization);
        assert!(err.to_string().starts_with("failed to deserialize users/john"));
    }
}
