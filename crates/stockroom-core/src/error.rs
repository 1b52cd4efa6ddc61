//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Inventory operation failures                   │
//! │  └── ValidationError  - Staged input failures                          │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Storage read/write failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures never reach [`CoreError`]: the store logs and swallows
//! them, so only validation and edit-mode problems are reported to callers.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id exists in the collection.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// `save_edit` was called while the form is in create mode.
    #[error("No product is being edited")]
    NotEditing,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The single-field variants come from the field validators; the store
/// reports a failed save with [`ValidationError::InvalidFields`] so the caller
/// can list every flagged field at once.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Text that should be numeric does not parse.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value does not fit the allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// One or more staged fields failed validation.
    #[error("Please correct the following fields: {}", fields.join(", "))]
    InvalidFields { fields: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: u32::MAX as u64,
        };
        assert_eq!(err.to_string(), "quantity must be between 0 and 4294967295");
    }

    #[test]
    fn test_invalid_fields_lists_labels() {
        let err = ValidationError::InvalidFields {
            fields: vec!["Name".to_string(), "Price".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Please correct the following fields: Name, Price"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
