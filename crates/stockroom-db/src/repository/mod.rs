//! # Repository Module
//!
//! Typed access to what lives inside the key-value store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  InventoryStore                                                        │
//! │       │                                                                 │
//! │       │  repo.save(&products)                                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── load(&self)            → Option<Vec<Product>>                     │
//! │  └── save(&self, products)                                             │
//! │       │                                                                 │
//! │       │  JSON blob under one key                                        │
//! │       ▼                                                                 │
//! │  Arc<dyn KeyValueStore>                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product collection load/save

pub mod product;
