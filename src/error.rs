//! Error types for pathstep
//!
//! Every failure in the crate is a local, synchronous precondition
//! violation surfaced to the caller:
//! - DuplicateKey: adding a node id that already exists
//! - NotFound: edge from an unregistered source, route to an unreached target
//! - EmptyCollection: peek/dequeue on an empty priority queue

mod macros;

use thiserror::Error;

/// Coarse classification of a [`PathstepError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    EmptyCollection,
    InvalidValue,
    Io,
    Config,
}

/// Errors that can occur during pathstep operations
#[derive(Error, Debug)]
pub enum PathstepError {
    #[error("{context} already exists: {value}")]
    DuplicateKey { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("cannot {operation} an empty collection")]
    EmptyCollection { operation: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PathstepError {
    /// Create an error for a key that is already registered
    pub fn duplicate_key(context: &str, value: impl std::fmt::Display) -> Self {
        PathstepError::DuplicateKey {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PathstepError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an operation that needs at least one element
    pub fn empty_collection(operation: &str) -> Self {
        PathstepError::EmptyCollection {
            operation: operation.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathstepError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PathstepError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            PathstepError::NotFound { .. } => ErrorKind::NotFound,
            PathstepError::EmptyCollection { .. } => ErrorKind::EmptyCollection,
            PathstepError::InvalidValue { .. } => ErrorKind::InvalidValue,
            PathstepError::Io(_) => ErrorKind::Io,
            PathstepError::Toml(_) => ErrorKind::Config,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathstepError::DuplicateKey { .. } => "duplicate_key",
            PathstepError::NotFound { .. } => "not_found",
            PathstepError::EmptyCollection { .. } => "empty_collection",
            PathstepError::InvalidValue { .. } => "invalid_value",
            PathstepError::Io(_) => "io_error",
            PathstepError::Toml(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathstep operations
pub type Result<T> = std::result::Result<T, PathstepError>;
