//! # Error Types
//!
//! Structured error types for section_core. The geometry and property engine
//! itself never fails (degenerate input yields the all-zero property record),
//! so these errors only surface from the typed entry points: section type
//! parsing, dimension validation, and the section library.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{SectionError, SectionResult};
//!
//! fn validate_width(width: f64) -> SectionResult<()> {
//!     if width <= 0.0 {
//!         return Err(SectionError::InvalidInput {
//!             field: "Width".to_string(),
//!             value: width.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for section operations.
///
/// Each variant carries enough context for a caller (human or tool) to
/// understand and fix the input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// An input value is invalid (out of range, inconsistent, unparsable)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required dimension is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Section type name matches none of the supported families
    #[error("Unknown section type: {name}")]
    UnknownSectionType { name: String },

    /// Section not found in the library
    #[error("Section not found: {name}")]
    SectionNotFound { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl SectionError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        SectionError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownSectionType error
    pub fn unknown_section_type(name: impl Into<String>) -> Self {
        SectionError::UnknownSectionType { name: name.into() }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(name: impl Into<String>) -> Self {
        SectionError::SectionNotFound { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::InvalidInput { .. } => "INVALID_INPUT",
            SectionError::MissingField { .. } => "MISSING_FIELD",
            SectionError::UnknownSectionType { .. } => "UNKNOWN_SECTION_TYPE",
            SectionError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            SectionError::FileError { .. } => "FILE_ERROR",
            SectionError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for SectionError {
    fn from(err: serde_json::Error) -> Self {
        SectionError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::invalid_input("Thickness", "-5.0", "Thickness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SectionError::missing_field("Width").error_code(), "MISSING_FIELD");
        assert_eq!(SectionError::section_not_found("IPE 200").error_code(), "SECTION_NOT_FOUND");
        assert_eq!(
            SectionError::unknown_section_type("Z-Shape").error_code(),
            "UNKNOWN_SECTION_TYPE"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: SectionError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
