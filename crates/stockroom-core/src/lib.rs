//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate holds the inventory domain as pure types and functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (CLI / any UI)                    │   │
//! │  │     list ──► add ──► edit ──► delete                            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    InventoryStore (apps/cli)                    │   │
//! │  │    stage_field, add_product, save_edit, delete_product         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   field   │  │   form    │  │ validation│  │   │
//! │  │   │  Product  │  │ FormField │  │ Staging   │  │  parsers  │  │   │
//! │  │   │           │  │ FieldSpec │  │ FieldErrs │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING SINKS • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Storage Layer)                    │   │
//! │  │           key-value store, product blob codec                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`field`] - Form field identifiers and the per-field sanitize/validate table
//! - [`form`] - Form staging, error flags and create/edit mode
//! - [`validation`] - Typed parsers for staged text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{FormField, FormStaging};
//!
//! let mut form = FormStaging::new();
//! form.stage(FormField::Price, "R$ 12,50");
//! assert_eq!(form.value(FormField::Price), "12.50");
//!
//! // Name, category and quantity are still blank
//! assert!(!form.validate());
//! assert!(form.errors().name);
//! assert!(!form.errors().price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod field;
pub mod form;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use field::{FieldSpec, FormField};
pub use form::{FieldErrors, FormMode, FormStaging, ProductDraft};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the product collection is persisted under.
///
/// Kept identical to the key the first mobile release wrote, so an existing
/// device store is picked up as-is.
pub const STORAGE_KEY: &str = "@produtos_estoque";
