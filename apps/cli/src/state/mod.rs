//! # State Module
//!
//! Application state for the stockroom CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐  │
//! │  │    ConfigState       │        │        InventoryStore            │  │
//! │  │                      │ opens  │                                  │  │
//! │  │  storage backend     │──────► │  products: Vec<Product>          │  │
//! │  │  database_path       │        │  form:     FormStaging           │  │
//! │  │  storage_key         │        │  repo:     ProductRepository     │  │
//! │  └──────────────────────┘        └──────────────────────────────────┘  │
//! │                                                                         │
//! │  ConfigState: read-only after load                                     │
//! │  InventoryStore: single owner, mutated through &mut self               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod inventory;

pub use config::{ConfigState, StorageBackend};
pub use inventory::InventoryStore;
