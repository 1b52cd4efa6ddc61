//! # Key-Value Storage
//!
//! The storage contract the inventory store persists through.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyValueStore                                      │
//! │                                                                         │
//! │  read(key)         → Ok(Some(text))   previously written value         │
//! │                    → Ok(None)         first run / unknown key          │
//! │                    → Err(DbError)     storage unavailable              │
//! │                                                                         │
//! │  write(key, text)  → Ok(())           value fully replaced             │
//! │                    → Err(DbError)     nothing is guaranteed written    │
//! │                                                                         │
//! │  Implementations:                                                      │
//! │  • SqliteKvStore  - durable, kv_store table                            │
//! │  • MemoryKvStore  - process lifetime only (tests, --storage memory)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use crate::error::DbResult;

pub mod memory;
pub mod sqlite;

/// String-keyed, string-valued durable storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn read(&self, key: &str) -> DbResult<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    async fn write(&self, key: &str, value: &str) -> DbResult<()>;
}
