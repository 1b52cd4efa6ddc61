//! # stockroom-db: Storage Layer for Stockroom
//!
//! This crate provides durable storage for the product collection. Storage is
//! a plain key-value contract; the whole collection is one JSON blob under a
//! fixed key.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  InventoryStore::persist()                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Repository   │    │ KeyValueStore │    │  Database    │  │   │
//! │  │   │ (product.rs)  │───►│   (trait)     │    │  (pool.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Vec<Product>  │    │ SqliteKvStore │───►│ SqlitePool   │  │   │
//! │  │   │  ⇄ JSON blob  │    │ MemoryKvStore │    │ migrations   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   kv_store(key, value, updated_at)                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Opening SQLite (file or in-memory)
//! - [`migrations`] - The `kv_store` schema
//! - [`error`] - Storage error types
//! - [`storage`] - Key-value store trait and implementations
//! - [`repository`] - Product collection codec on top of a key-value store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockroom_db::{Database, DbConfig, ProductRepository};
//!
//! let db = Database::new(DbConfig::new("path/to/stockroom.db")).await?;
//! let repo = ProductRepository::new(Arc::new(db.kv_store()));
//!
//! let products = repo.load().await?.unwrap_or_default();
//! repo.save(&products).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DbLocation};

pub use repository::product::ProductRepository;
pub use storage::memory::MemoryKvStore;
pub use storage::sqlite::SqliteKvStore;
pub use storage::KeyValueStore;
