//! # Product Repository
//!
//! Encodes the whole product collection as one JSON array under a fixed key.
//!
//! ## Stored Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  key: "@produtos_estoque"                                               │
//! │                                                                         │
//! │  [                                                                      │
//! │    { "id": "…", "nome": "Mouse", "categoria": "Peripherals",            │
//! │      "preco": 49.9, "quantidade": 10 },                                 │
//! │    …                                                                    │
//! │  ]                                                                      │
//! │                                                                         │
//! │  Product.name     ⇄ nome                                                │
//! │  Product.category ⇄ categoria                                           │
//! │  Product.price    ⇄ preco       (JSON number)                           │
//! │  Product.quantity ⇄ quantidade  (JSON number)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The field names match what the first mobile release wrote, so its stores
//! load unchanged. That release stored unparsable numbers as `null`; those
//! load as `0`. It also stored counts as plain JS numbers, so a quantity
//! outside `u32` (`5000000000`, `1e+21`, `-3`) is clamped into range on load
//! rather than failing the whole array.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use stockroom_core::{Product, STORAGE_KEY};
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::storage::KeyValueStore;

/// One element of the stored array.
#[derive(Debug, Serialize, Deserialize)]
struct ProductRecord {
    id: String,
    nome: String,
    categoria: String,
    preco: Option<f64>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    quantidade: Option<u32>,
}

/// Reads `quantidade` as any JSON number and clamps it to `u32`.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };

    // `as` saturates at both ends and drops the fraction
    let quantity = raw as u32;
    if f64::from(quantity) != raw.trunc() {
        warn!(stored = raw, clamped = quantity, "Stored quantity out of range");
    }

    Ok(Some(quantity))
}

impl From<&Product> for ProductRecord {
    fn from(p: &Product) -> Self {
        ProductRecord {
            id: p.id.clone(),
            nome: p.name.clone(),
            categoria: p.category.clone(),
            preco: Some(p.price),
            quantidade: Some(p.quantity),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        if r.preco.is_none() || r.quantidade.is_none() {
            warn!(id = %r.id, "Stored product has a null number, reading it as 0");
        }

        Product {
            id: r.id,
            name: r.nome,
            category: r.categoria,
            price: r.preco.unwrap_or(0.0),
            quantity: r.quantidade.unwrap_or(0),
        }
    }
}

/// Loads and saves the product collection.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(Arc::new(MemoryKvStore::new()));
///
/// repo.save(&products).await?;
/// let loaded = repo.load().await?; // Some(products)
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProductRepository {
    /// Creates a repository using the default storage key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Creates a repository using a custom storage key.
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        ProductRepository {
            store,
            key: key.into(),
        }
    }

    /// Storage key the collection lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored collection.
    ///
    /// ## Returns
    /// * `Ok(Some(products))` - A collection was stored (possibly empty)
    /// * `Ok(None)` - Nothing stored under the key yet
    /// * `Err(DbError)` - Storage failed or the blob does not decode
    pub async fn load(&self) -> DbResult<Option<Vec<Product>>> {
        let Some(blob) = self.store.read(&self.key).await? else {
            debug!(key = %self.key, "No stored product collection");
            return Ok(None);
        };

        let records: Vec<ProductRecord> = serde_json::from_str(&blob)?;
        let products: Vec<Product> = records.into_iter().map(Product::from).collect();

        debug!(key = %self.key, count = products.len(), "Loaded product collection");
        Ok(Some(products))
    }

    /// Replaces the stored collection with `products`.
    pub async fn save(&self, products: &[Product]) -> DbResult<()> {
        let records: Vec<ProductRecord> = products.iter().map(ProductRecord::from).collect();
        let blob = serde_json::to_string(&records)?;

        self.store.write(&self.key, &blob).await?;

        debug!(key = %self.key, count = products.len(), "Saved product collection");
        Ok(())
    }
}

impl fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use crate::storage::memory::MemoryKvStore;

    fn mouse() -> Product {
        Product {
            id: "x".to_string(),
            name: "Mouse".to_string(),
            category: "Peripherals".to_string(),
            price: 49.9,
            quantity: 10,
        }
    }

    #[tokio::test]
    async fn test_load_nothing_stored() {
        let repo = ProductRepository::new(Arc::new(MemoryKvStore::new()));
        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_writes_stored_field_names() {
        let store = Arc::new(MemoryKvStore::new());
        let repo = ProductRepository::new(store.clone());

        repo.save(&[mouse()]).await.unwrap();

        let blob = store.read(STORAGE_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "x",
                "nome": "Mouse",
                "categoria": "Peripherals",
                "preco": 49.9,
                "quantidade": 10
            }])
        );
    }

    #[tokio::test]
    async fn test_load_preserves_order() {
        let repo = ProductRepository::new(Arc::new(MemoryKvStore::new()));
        let second = Product {
            id: "y".to_string(),
            name: "Keyboard".to_string(),
            ..mouse()
        };

        repo.save(&[mouse(), second.clone()]).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();

        assert_eq!(loaded, vec![mouse(), second]);
    }

    #[tokio::test]
    async fn test_load_legacy_blob() {
        let blob = r#"[
            {"id":"0.8123","nome":"Caneta","categoria":"Papelaria","preco":2.5,"quantidade":100},
            {"id":"0.4411","nome":"Caderno","categoria":"Papelaria","preco":null,"quantidade":3}
        ]"#;
        let store = Arc::new(MemoryKvStore::with_entry(STORAGE_KEY, blob));
        let repo = ProductRepository::new(store);

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "0.8123");
        assert_eq!(loaded[0].quantity, 100);
        assert_eq!(loaded[1].price, 0.0);
    }

    #[tokio::test]
    async fn test_load_legacy_oversized_quantity() {
        let blob = r#"[
            {"id":"0.1","nome":"Parafuso","categoria":"Ferragens","preco":0.1,"quantidade":5000000000},
            {"id":"0.2","nome":"Arruela","categoria":"Ferragens","preco":0.05,"quantidade":1e+21},
            {"id":"0.3","nome":"Prego","categoria":"Ferragens","preco":0.02,"quantidade":-3}
        ]"#;
        let store = Arc::new(MemoryKvStore::with_entry(STORAGE_KEY, blob));
        let repo = ProductRepository::new(store);

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].quantity, u32::MAX);
        assert_eq!(loaded[0].name, "Parafuso");
        assert_eq!(loaded[0].price, 0.1);
        assert_eq!(loaded[1].quantity, u32::MAX);
        assert_eq!(loaded[1].id, "0.2");
        assert_eq!(loaded[2].quantity, 0);
    }

    #[tokio::test]
    async fn test_load_garbage_is_error() {
        let store = Arc::new(MemoryKvStore::with_entry(STORAGE_KEY, "{not json"));
        let repo = ProductRepository::new(store);

        assert!(matches!(
            repo.load().await,
            Err(DbError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_key_over_sqlite() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = ProductRepository::with_key(Arc::new(db.kv_store()), "inventory");

        repo.save(&[mouse()]).await.unwrap();

        assert_eq!(repo.key(), "inventory");
        assert_eq!(repo.load().await.unwrap(), Some(vec![mouse()]));
        assert_eq!(db.kv_store().read(STORAGE_KEY).await.unwrap(), None);
    }
}
