//! # Error Types
//!
//! Structured error types for elec_core. Numeric formulas never fail (a
//! guarded division yields `0.0`), so these errors only surface where inputs
//! are symbolic (colour names, material names), where a calculation record
//! is missing a required value, or where a settings file is read or written.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_ft: f64) -> CalcResult<()> {
//!     if length_ft < 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_ft".to_string(),
//!             value: length_ft.to_string(),
//!             reason: "Length cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for elec_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Colour name not present in the resistor colour table
    #[error("Unknown resistor band colour: {color}")]
    UnknownColor { color: String },

    /// Colour-code decode only accepts 3 to 6 bands
    #[error("Unsupported band count: {count} (expected 3 to 6)")]
    InvalidBandCount { count: usize },

    /// Conductor material not recognised
    #[error("Unknown conductor material: {name}")]
    UnknownMaterial { name: String },

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

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownColor error
    pub fn unknown_color(color: impl Into<String>) -> Self {
        CalcError::UnknownColor {
            color: color.into(),
        }
    }

    /// Create an UnknownMaterial error
    pub fn unknown_material(name: impl Into<String>) -> Self {
        CalcError::UnknownMaterial { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownColor { .. } => "UNKNOWN_COLOR",
            CalcError::InvalidBandCount { .. } => "INVALID_BAND_COUNT",
            CalcError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length_ft", "-5", "Length cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("voltage").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_color("pink").error_code(), "UNKNOWN_COLOR");
        assert_eq!(CalcError::InvalidBandCount { count: 2 }.error_code(), "INVALID_BAND_COUNT");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::InvalidBandCount { count: 7 };
        assert_eq!(error.to_string(), "Unsupported band count: 7 (expected 3 to 6)");
    }
}
