//! Custom error types for SignupCLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Field validation failures are not errors:
//! they are returned as data by the form model (see `form::ValidationOutcome`).

use thiserror::Error;

use crate::form::FieldName;

/// The main error type for SignupCLI operations
#[derive(Error, Debug)]
pub enum SignupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid input given on the command line
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catalog entry not found
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A field was given a value of the wrong kind
    #[error("Field '{field}' expects a {expected} value")]
    FieldType {
        field: FieldName,
        expected: &'static str,
    },

    /// The submission callback failed
    #[error("Submission error: {0}")]
    Submission(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SignupError {
    /// Create a "not found" error for plans
    pub fn plan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Plan",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for add-ons
    pub fn add_on_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Add-on",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SignupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SignupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SignupError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for SignupCLI operations
pub type SignupResult<T> = Result<T, SignupError>;
