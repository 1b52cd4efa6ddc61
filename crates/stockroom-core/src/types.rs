//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────────────────┐   │
//! │  │    Product      │        │  InventoryCollection = Vec<Product>  │   │
//! │  │  ─────────────  │        │  ──────────────────────────────────  │   │
//! │  │  id (UUID v4)   │  ───►  │  insertion order, never re-sorted    │   │
//! │  │  name           │        │  ids unique                          │   │
//! │  │  category       │        └──────────────────────────────────────┘   │
//! │  │  price (f64)    │                                                    │
//! │  │  quantity (u32) │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The record itself enforces nothing; validation happens when staged text
//! is turned into a [`crate::form::ProductDraft`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// One inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, immutable after creation.
    ///
    /// New products get a UUID v4; records loaded from an older store keep
    /// whatever id they were written with.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text category.
    pub category: String,

    /// Unit price as a decimal number.
    pub price: f64,

    /// Units in stock.
    pub quantity: u32,
}

impl Product {
    /// Price with exactly two decimals, the way product cards render it.
    ///
    /// ```rust
    /// # use stockroom_core::Product;
    /// let p = Product {
    ///     id: "x".into(),
    ///     name: "Mouse".into(),
    ///     category: "Peripherals".into(),
    ///     price: 49.9,
    ///     quantity: 10,
    /// };
    /// assert_eq!(p.price_display(), "49.90");
    /// ```
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Quantity with its unit suffix.
    pub fn quantity_display(&self) -> String {
        format!("{} unit(s)", self.quantity)
    }
}

/// Generates a new product id.
///
/// ## Usage
/// ```rust
/// use stockroom_core::generate_product_id;
///
/// let a = generate_product_id();
/// let b = generate_product_id();
/// assert_ne!(a, b);
/// ```
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
