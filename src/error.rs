//! Custom error types for flatcsv
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. All errors are fatal to the current
//! serialization call; no partial output is ever returned alongside one.

use thiserror::Error;

/// The main error type for flatcsv operations
#[derive(Error, Debug)]
pub enum CsvError {
    /// The record collection is neither array-like nor iterable
    #[error("records must be an array or a traversable/iterable object")]
    MalformedObject,

    /// The field list or index list violates a structural rule
    #[error("Malformed fields: {0}")]
    MalformedFields(String),

    /// An extracted cell value has no string representation
    ///
    /// This indicates malformed record data supplied by the caller, not a
    /// recoverable condition.
    #[error("value for field '{field}' has no string representation")]
    UnrepresentableValue { field: String },
}

impl CsvError {
    /// Create a malformed-fields error
    pub fn malformed_fields(message: impl Into<String>) -> Self {
        Self::MalformedFields(message.into())
    }

    /// Create an unrepresentable-value error for a field
    pub fn unrepresentable(field: impl Into<String>) -> Self {
        Self::UnrepresentableValue {
            field: field.into(),
        }
    }

    /// Check if this is a malformed-object error
    pub fn is_malformed_object(&self) -> bool {
        matches!(self, Self::MalformedObject)
    }

    /// Check if this is a malformed-fields error
    pub fn is_malformed_fields(&self) -> bool {
        matches!(self, Self::MalformedFields(_))
    }
}

/// Result type alias for flatcsv operations
pub type CsvResult<T> = Result<T, CsvError>;
