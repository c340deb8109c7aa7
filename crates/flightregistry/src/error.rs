//! Error types for flightregistry.
//!
//! Duplicate inserts and removals or updates of unknown flights are not
//! errors. The only failure in normal registry use is a malformed record,
//! reported before any mutation takes place.

use thiserror::Error;

/// The main error type for flightregistry operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A record is missing a required field or carries one of the wrong type.
    #[error("malformed flight record: field '{field}' {reason}")]
    MalformedRecord {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightregistry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an error for a required field that is absent.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MalformedRecord {
            field,
            reason: "is missing".to_string(),
        }
    }

    /// Create an error for a required field with an unusable value.
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this error describes a malformed record.
    #[must_use]
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
