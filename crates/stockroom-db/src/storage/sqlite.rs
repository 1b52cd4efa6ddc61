//! # SQLite Key-Value Store
//!
//! Durable [`KeyValueStore`] on the `kv_store` table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  kv_store                                                               │
//! │  ┌──────────────────────┬──────────────────────────┬──────────────────┐ │
//! │  │ key (PK)             │ value                    │ updated_at       │ │
//! │  ├──────────────────────┼──────────────────────────┼──────────────────┤ │
//! │  │ @produtos_estoque    │ [{"id":"…","nome":…}]    │ 2026-10-16T…     │ │
//! │  └──────────────────────┴──────────────────────────┴──────────────────┘ │
//! │                                                                         │
//! │  write = INSERT … ON CONFLICT(key) DO UPDATE (single statement, atomic) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::KeyValueStore;
use crate::error::DbResult;

/// Key-value store backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Creates a store on an already-migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteKvStore { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Reading key");

        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing key");

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn store() -> SqliteKvStore {
        Database::new(DbConfig::in_memory()).await.unwrap().kv_store()
    }

    #[tokio::test]
    async fn test_read_missing_key() {
        let store = store().await;
        assert_eq!(store.read("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_overwrite() {
        let store = store().await;

        store.write("k", "[]").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("[]"));

        store.write("k", "[1]").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn test_write_after_close_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.kv_store();
        db.close().await;

        assert!(store.write("k", "v").await.is_err());
    }
}
