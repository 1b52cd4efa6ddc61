//! # Product Commands
//!
//! List, show, add, edit and delete products.
//!
//! ## Add / Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Form Flow                                    │
//! │                                                                         │
//! │  stockroom add --name Mouse --category Peripherals                      │
//! │                --price 49,90 --quantity 10                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stage_field() for every flag given  (price → "49.90")                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_product() / save_edit()                                            │
//! │       │                                                                 │
//! │       ├── flagged fields ──► "Please correct the following fields: …"  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Product added successfully" + card                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edit stages only the flags given, so omitted fields keep the values
//! `begin_edit` copied from the product.

use serde::{Deserialize, Serialize};
use stockroom_core::{FormField, Product};
use tracing::{debug, info};

use crate::cli::FieldArgs;
use crate::error::CliError;
use crate::state::InventoryStore;

use super::CommandOutput;

/// Product DTO for rendering.
///
/// Carries the display strings next to the raw values so JSON consumers
/// do not have to re-format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    /// Price with two decimals, e.g. "49.90"
    pub price_display: String,
    /// e.g. "10 unit(s)"
    pub quantity_display: String,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price,
            quantity: p.quantity,
            price_display: p.price_display(),
            quantity_display: p.quantity_display(),
        }
    }
}

/// Lists every product in insertion order.
pub fn list_products(store: &InventoryStore) -> CommandOutput {
    let products: Vec<ProductDto> = store.products().iter().map(ProductDto::from).collect();
    debug!(count = products.len(), "Listing products");
    CommandOutput::Products(products)
}

/// Shows one product.
pub fn show_product(store: &InventoryStore, id: &str) -> Result<CommandOutput, CliError> {
    let product = store
        .product(id)
        .ok_or_else(|| CliError::not_found("Product", id))?;

    Ok(CommandOutput::Product {
        message: None,
        product: product.into(),
    })
}

/// Stages the given fields and adds a product.
pub async fn add_product(
    store: &mut InventoryStore,
    fields: &FieldArgs,
) -> Result<CommandOutput, CliError> {
    stage_fields(store, fields);

    let product = store.add_product().await?;
    info!(id = %product.id, "Product added");

    Ok(CommandOutput::Product {
        message: Some("Product added successfully".to_string()),
        product: product.into(),
    })
}

/// Loads product `id` into the form, stages the given fields and saves.
pub async fn edit_product(
    store: &mut InventoryStore,
    id: &str,
    fields: &FieldArgs,
) -> Result<CommandOutput, CliError> {
    store.begin_edit_by_id(id)?;
    stage_fields(store, fields);

    let product = store.save_edit().await?;
    info!(id = %product.id, "Product updated");

    Ok(CommandOutput::Product {
        message: Some("Product updated successfully".to_string()),
        product: product.into(),
    })
}

/// Deletes product `id`. A missing id is reported, not treated as an error.
pub async fn delete_product(store: &mut InventoryStore, id: &str) -> CommandOutput {
    if store.delete_product(id).await {
        info!(id = %id, "Product deleted");
        CommandOutput::Message(format!("Product {} deleted", id))
    } else {
        CommandOutput::Message(format!("Product {} not found, nothing removed", id))
    }
}

fn stage_fields(store: &mut InventoryStore, fields: &FieldArgs) {
    let given = [
        (FormField::Name, &fields.name),
        (FormField::Category, &fields.category),
        (FormField::Price, &fields.price),
        (FormField::Quantity, &fields.quantity),
    ];

    for (field, value) in given {
        if let Some(value) = value {
            store.stage_field(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockroom_db::{MemoryKvStore, ProductRepository};

    use super::*;
    use crate::error::ErrorCode;

    async fn store() -> InventoryStore {
        InventoryStore::initialize(ProductRepository::new(Arc::new(MemoryKvStore::new()))).await
    }

    fn mouse_args() -> FieldArgs {
        FieldArgs {
            name: Some("Mouse".to_string()),
            category: Some("Peripherals".to_string()),
            price: Some("49,90".to_string()),
            quantity: Some("10".to_string()),
        }
    }

    fn single_product(output: CommandOutput) -> ProductDto {
        match output {
            CommandOutput::Product { product, .. } => product,
            other => panic!("expected a product, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let mut store = store().await;

        let output = add_product(&mut store, &mouse_args()).await.unwrap();
        let added = single_product(output);
        assert_eq!(added.price, 49.9);
        assert_eq!(added.price_display, "49.90");
        assert_eq!(added.quantity_display, "10 unit(s)");

        match list_products(&store) {
            CommandOutput::Products(products) => assert_eq!(products, vec![added]),
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_missing_fields_lists_labels() {
        let mut store = store().await;
        let args = FieldArgs {
            name: Some("Mouse".to_string()),
            ..FieldArgs::default()
        };

        let err = add_product(&mut store, &args).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "Please correct the following fields: Category, Price, Quantity"
        );
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_edit_only_given_fields() {
        let mut store = store().await;
        let id = single_product(add_product(&mut store, &mouse_args()).await.unwrap()).id;

        let args = FieldArgs {
            quantity: Some("5".to_string()),
            ..FieldArgs::default()
        };
        let edited = single_product(edit_product(&mut store, &id, &args).await.unwrap());

        assert_eq!(edited.id, id);
        assert_eq!(edited.name, "Mouse");
        assert_eq!(edited.price, 49.9);
        assert_eq!(edited.quantity, 5);
    }

    #[tokio::test]
    async fn test_edit_unknown_id() {
        let mut store = store().await;
        let err = edit_product(&mut store, "nope", &mouse_args())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_show_and_delete() {
        let mut store = store().await;
        let id = single_product(add_product(&mut store, &mouse_args()).await.unwrap()).id;

        assert_eq!(single_product(show_product(&store, &id).unwrap()).id, id);

        match delete_product(&mut store, &id).await {
            CommandOutput::Message(msg) => assert!(msg.ends_with("deleted")),
            other => panic!("expected a message, got {:?}", other),
        }
        assert_eq!(
            show_product(&store, &id).unwrap_err().code,
            ErrorCode::NotFound
        );

        match delete_product(&mut store, &id).await {
            CommandOutput::Message(msg) => assert!(msg.contains("not found, nothing removed")),
            other => panic!("expected a message, got {:?}", other),
        }
    }
}
