//! # Form Fields
//!
//! The four editable product fields and the table that gives each one its
//! sanitize and validate rules.
//!
//! ## Field Table
//! ```text
//! ┌────────────┬────────────────────────────────┬──────────────────────────┐
//! │ Field      │ sanitize                       │ validate                 │
//! ├────────────┼────────────────────────────────┼──────────────────────────┤
//! │ name       │ identity                       │ non-blank                │
//! │ category   │ identity                       │ non-blank                │
//! │ price      │ keep [0-9.,], ',' → '.'        │ non-blank, decimal ≥ 0   │
//! │ quantity   │ keep [0-9]                     │ non-blank, fits in u32   │
//! └────────────┴────────────────────────────────┴──────────────────────────┘
//! ```
//!
//! Callers look a field up with [`FormField::spec`] instead of branching on
//! the field name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{
    validate_category, validate_name, validate_price, validate_quantity, ValidationResult,
};

// =============================================================================
// Form Field
// =============================================================================

/// Identifier of an editable product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Category,
    Price,
    Quantity,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Quantity,
    ];

    /// Machine identifier (`name`, `category`, `price`, `quantity`).
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Price => "price",
            FormField::Quantity => "quantity",
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Price => "Price",
            FormField::Quantity => "Quantity",
        }
    }

    /// Sanitize/validate rules for this field.
    pub fn spec(&self) -> &'static FieldSpec {
        &FIELD_SPECS[*self as usize]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FormField::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "field".to_string(),
                reason: format!(
                    "unknown field '{}'. Valid options: name, category, price, quantity",
                    s
                ),
            })
    }
}

// =============================================================================
// Field Spec
// =============================================================================

/// Per-field input rules.
pub struct FieldSpec {
    pub field: FormField,

    /// Turns raw input into the text that gets staged.
    pub sanitize: fn(&str) -> String,

    /// Checks staged text; a failure raises the field's error flag.
    pub validate: fn(&str) -> ValidationResult<()>,
}

impl FieldSpec {
    /// Runs `sanitize` on `raw`.
    #[inline]
    pub fn sanitize(&self, raw: &str) -> String {
        (self.sanitize)(raw)
    }

    /// Runs `validate` on staged text.
    #[inline]
    pub fn validate(&self, staged: &str) -> ValidationResult<()> {
        (self.validate)(staged)
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Indexed by `FormField as usize`.
static FIELD_SPECS: [FieldSpec; 4] = [
    FieldSpec {
        field: FormField::Name,
        sanitize: keep_verbatim,
        validate: validate_name,
    },
    FieldSpec {
        field: FormField::Category,
        sanitize: keep_verbatim,
        validate: validate_category,
    },
    FieldSpec {
        field: FormField::Price,
        sanitize: sanitize_price,
        validate: validate_price,
    },
    FieldSpec {
        field: FormField::Quantity,
        sanitize: sanitize_quantity,
        validate: validate_quantity,
    },
];

// =============================================================================
// Sanitizers
// =============================================================================

fn keep_verbatim(raw: &str) -> String {
    raw.to_string()
}

/// Keeps digits, commas and periods, then turns every comma into a period.
///
/// ```rust
/// use stockroom_core::field::sanitize_price;
///
/// assert_eq!(sanitize_price("R$ 12,50"), "12.50");
/// ```
pub fn sanitize_price(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Keeps only ASCII digits.
pub fn sanitize_quantity(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_table_matches_field() {
        for field in FormField::ALL {
            assert_eq!(field.spec().field, field);
        }
    }

    #[test]
    fn test_sanitize_price() {
        assert_eq!(sanitize_price("12,50"), "12.50");
        assert_eq!(sanitize_price("abc"), "");
        assert_eq!(sanitize_price("-3.5"), "3.5");
        assert_eq!(FormField::Price.spec().sanitize(" 1,5 kg"), "1.5");
    }

    #[test]
    fn test_sanitize_quantity() {
        assert_eq!(sanitize_quantity("12a3"), "123");
        assert_eq!(sanitize_quantity("-4"), "4");
        assert_eq!(sanitize_quantity("1.5"), "15");
    }

    #[test]
    fn test_text_fields_are_verbatim() {
        assert_eq!(FormField::Name.spec().sanitize("  Mouse  "), "  Mouse  ");
        assert_eq!(FormField::Category.spec().sanitize("Périphériques"), "Périphériques");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("price".parse::<FormField>().unwrap(), FormField::Price);
        assert_eq!("Quantity".parse::<FormField>().unwrap(), FormField::Quantity);
        assert!("sku".parse::<FormField>().is_err());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = FormField::ALL.iter().map(FormField::label).collect();
        assert_eq!(labels, vec!["Name", "Category", "Price", "Quantity"]);
    }
}
