//! # Form Staging
//!
//! Raw text for the four product fields, their error flags, and whether the
//! form is creating a product or editing one.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Form Staging Lifecycle                           │
//! │                                                                         │
//! │          reset()                       load_product(p)                  │
//! │  ┌──────────────────┐  ──────────────────────────►  ┌────────────────┐ │
//! │  │   Create mode    │                               │   Edit mode    │ │
//! │  │  blank fields    │  ◄──────────────────────────  │  target = p.id │ │
//! │  │  no error flags  │    reset() (save / cancel)    │  fields from p │ │
//! │  └──────────────────┘                               └────────────────┘ │
//! │          │                                                  │          │
//! │          │ stage(field, raw)                                │          │
//! │          ▼                                                  ▼          │
//! │   sanitize → store text → non-blank? clear that flag               │
//! │                                                                         │
//! │   validate(): flag = field check fails, for every field                │
//! │   draft():    typed ProductDraft, only when every check passes         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::field::FormField;
use crate::types::Product;
use crate::validation::{parse_price, parse_quantity, ValidationResult};

// =============================================================================
// Field Errors
// =============================================================================

/// One error flag per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors {
    pub name: bool,
    pub category: bool,
    pub price: bool,
    pub quantity: bool,
}

impl FieldErrors {
    /// Returns the flag for `field`.
    pub fn get(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name,
            FormField::Category => self.category,
            FormField::Price => self.price,
            FormField::Quantity => self.quantity,
        }
    }

    /// Sets the flag for `field`.
    pub fn set(&mut self, field: FormField, flagged: bool) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::Quantity => &mut self.quantity,
        };
        *slot = flagged;
    }

    /// True if any field is flagged.
    pub fn any(&self) -> bool {
        FormField::ALL.into_iter().any(|f| self.get(f))
    }

    /// Flagged fields in form order.
    pub fn flagged(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f))
            .collect()
    }
}

// =============================================================================
// Form Mode
// =============================================================================

/// Whether staging describes a new product or an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum FormMode {
    #[default]
    Create,
    Edit { product_id: String },
}

// =============================================================================
// Product Draft
// =============================================================================

/// Typed field values parsed from a valid form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductDraft {
    /// Builds a product with the given id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }

    /// Overwrites the four business fields of `product`; the id is kept.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.category = self.category;
        product.price = self.price;
        product.quantity = self.quantity;
    }
}

// =============================================================================
// Form Staging
// =============================================================================

/// Pending, unvalidated form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormStaging {
    name: String,
    category: String,
    price: String,
    quantity: String,
    errors: FieldErrors,
    mode: FormMode,
}

impl FormStaging {
    /// Empty form in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Staged text for `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::Quantity => &mut self.quantity,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Id of the product being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { product_id } => Some(product_id),
            FormMode::Create => None,
        }
    }

    /// Sanitizes `raw` with the field's rule and stages the result.
    ///
    /// A non-blank result clears the field's error flag right away. A blank
    /// one leaves the flag as it is until the next [`validate`](Self::validate).
    pub fn stage(&mut self, field: FormField, raw: &str) {
        let staged = field.spec().sanitize(raw);
        let blank = staged.trim().is_empty();
        *self.value_mut(field) = staged;

        if !blank {
            self.errors.set(field, false);
        }
    }

    /// Re-checks every field and rewrites all four error flags.
    ///
    /// Returns true iff no field is flagged.
    pub fn validate(&mut self) -> bool {
        for field in FormField::ALL {
            let failed = field.spec().validate(self.value(field)).is_err();
            self.errors.set(field, failed);
        }
        !self.errors.any()
    }

    /// Fields whose error flag is currently raised.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        self.errors.flagged()
    }

    /// Parses the staged text into typed values.
    ///
    /// Does not touch the error flags; call [`validate`](Self::validate)
    /// first when the flags should reflect the result.
    pub fn draft(&self) -> ValidationResult<ProductDraft> {
        for field in [FormField::Name, FormField::Category] {
            field.spec().validate(self.value(field))?;
        }

        Ok(ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: parse_price(&self.price)?,
            quantity: parse_quantity(&self.quantity)?,
        })
    }

    /// Validation failure listing every flagged field by label.
    pub fn invalid_fields_error(&self) -> ValidationError {
        ValidationError::InvalidFields {
            fields: self
                .invalid_fields()
                .into_iter()
                .map(|f| f.label().to_string())
                .collect(),
        }
    }

    /// Switches to edit mode for `product` and stages its current values.
    ///
    /// Numbers are staged in their canonical text form (`49.9`, `10`).
    pub fn load_product(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.category = product.category.clone();
        self.price = product.price.to_string();
        self.quantity = product.quantity.to_string();
        self.errors = FieldErrors::default();
        self.mode = FormMode::Edit {
            product_id: product.id.clone(),
        };
    }

    /// Blank fields, no error flags, create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
