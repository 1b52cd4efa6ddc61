//! # Validation Module
//!
//! Checks and typed parsers for staged form text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: stage_field (sanitize)                                       │
//! │  ├── price: keep [0-9.,], comma → period                               │
//! │  └── quantity: keep [0-9]                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: validate (THIS MODULE)                                       │
//! │  ├── blank after trim?          → Required                             │
//! │  └── price/quantity unparsable? → InvalidFormat / OutOfRange           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: draft (typed values)                                         │
//! │  └── f64 price, u32 quantity handed to the Product                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product is never built from text that fails here, so a stored record
//! cannot carry a NaN price or a missing quantity.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_price("49.90").unwrap(), 49.9);
//! assert_eq!(parse_quantity("10").unwrap(), 10);
//! assert!(parse_price(".").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text Validators
// =============================================================================

/// Fails with [`ValidationError::Required`] when `value` is blank after trimming.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_name;
///
/// assert!(validate_name("Mouse").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)
}

/// Validates a product category.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required("category", category)
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses staged price text into a non-negative decimal.
///
/// ## Rules
/// - Must not be blank
/// - Must parse as a decimal number (`12`, `12.5`, `12.`, `.5`)
/// - Must be finite and non-negative
///
/// Expects sanitized text (period as the decimal separator); a comma is
/// rejected rather than reinterpreted.
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let text = text.trim();
    validate_required("price", text)?;

    let price: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: format!("'{}' is not a decimal number", text),
    })?;

    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite, non-negative number".to_string(),
        });
    }

    Ok(price)
}

/// Parses staged quantity text into a base-10 count.
///
/// ## Rules
/// - Must not be blank
/// - Must contain only digits
/// - Must fit in `u32`
pub fn parse_quantity(text: &str) -> ValidationResult<u32> {
    let text = text.trim();
    validate_required("quantity", text)?;

    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", text),
        });
    }

    // Only digits remain, so the sole failure left is overflow
    text.parse::<u32>().map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: u32::MAX as u64,
    })
}

/// Validates staged price text without keeping the parsed value.
pub fn validate_price(text: &str) -> ValidationResult<()> {
    parse_price(text).map(|_| ())
}

/// Validates staged quantity text without keeping the parsed value.
pub fn validate_quantity(text: &str) -> ValidationResult<()> {
    parse_quantity(text).map(|_| ())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_name("Mouse").is_ok());
        assert!(validate_category("Peripherals").is_ok());

        assert_eq!(
            validate_name("").unwrap_err(),
            ValidationError::Required {
                field: "name".to_string()
            }
        );
        assert!(validate_category(" \t ").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("49.90").unwrap(), 49.9);
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert_eq!(parse_price("12.").unwrap(), 12.0);
        assert_eq!(parse_price(".5").unwrap(), 0.5);

        assert!(matches!(
            parse_price(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_price("."),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("1.2.3"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_price("12,50").is_err());
    }

    #[test]
    fn test_parse_price_rejects_overflow_to_infinity() {
        let huge = "9".repeat(400);
        assert!(matches!(
            parse_price(&huge),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity("007").unwrap(), 7);

        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("1.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("99999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
