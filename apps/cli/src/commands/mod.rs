//! # Commands Module
//!
//! Everything a subcommand can do, and how its result is printed.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch + rendering)
//! └── product.rs  ◄─── list, show, add, edit, delete
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  main.rs: Cli::parse()                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  execute(&mut store, &command) ──► product::add_product(...)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Result<CommandOutput, CliError>                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  output.render(format)   table: cards    json: serde_json              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

use serde_json::json;

use crate::cli::{Commands, OutputFormat};
use crate::error::CliError;
use crate::state::InventoryStore;

use product::ProductDto;

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// The whole collection
    Products(Vec<ProductDto>),

    /// One product, optionally with a success message
    Product {
        message: Option<String>,
        product: ProductDto,
    },

    /// Plain status line
    Message(String),
}

impl CommandOutput {
    /// Renders for stdout.
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_table(&self) -> String {
        match self {
            CommandOutput::Products(products) if products.is_empty() => {
                "No products in stock.".to_string()
            }
            CommandOutput::Products(products) => products
                .iter()
                .map(render_card)
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutput::Product { message, product } => match message {
                Some(message) => format!("{}\n\n{}", message, render_card(product)),
                None => render_card(product),
            },
            CommandOutput::Message(message) => message.clone(),
        }
    }

    fn render_json(&self) -> Result<String, CliError> {
        let value = match self {
            CommandOutput::Products(products) => serde_json::to_value(products)?,
            CommandOutput::Product { message, product } => json!({
                "message": message,
                "product": product,
            }),
            CommandOutput::Message(message) => json!({ "message": message }),
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// One product card:
/// ```text
/// Mouse
///   Category: Peripherals
///   Price:    49.90
///   Stock:    10 unit(s)
///   Id:       8c1f…
/// ```
fn render_card(product: &ProductDto) -> String {
    format!(
        "{}\n  Category: {}\n  Price:    {}\n  Stock:    {}\n  Id:       {}\n",
        product.name,
        product.category,
        product.price_display,
        product.quantity_display,
        product.id
    )
}

/// Runs one subcommand against the store.
pub async fn execute(
    store: &mut InventoryStore,
    command: &Commands,
) -> Result<CommandOutput, CliError> {
    match command {
        Commands::List => Ok(product::list_products(store)),
        Commands::Show { id } => product::show_product(store, id),
        Commands::Add(fields) => product::add_product(store, fields).await,
        Commands::Edit { id, fields } => product::edit_product(store, id, fields).await,
        Commands::Delete { id } => Ok(product::delete_product(store, id).await),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockroom_db::{MemoryKvStore, ProductRepository};

    use super::*;
    use crate::cli::FieldArgs;

    fn dto() -> ProductDto {
        ProductDto {
            id: "x".to_string(),
            name: "Mouse".to_string(),
            category: "Peripherals".to_string(),
            price: 49.9,
            quantity: 10,
            price_display: "49.90".to_string(),
            quantity_display: "10 unit(s)".to_string(),
        }
    }

    #[test]
    fn test_render_card() {
        let out = CommandOutput::Products(vec![dto()])
            .render(OutputFormat::Table)
            .unwrap();

        assert!(out.starts_with("Mouse\n"));
        assert!(out.contains("  Category: Peripherals\n"));
        assert!(out.contains("  Price:    49.90\n"));
        assert!(out.contains("  Stock:    10 unit(s)\n"));
    }

    #[test]
    fn test_render_empty_list() {
        let out = CommandOutput::Products(vec![])
            .render(OutputFormat::Table)
            .unwrap();
        assert_eq!(out, "No products in stock.");
    }

    #[test]
    fn test_render_json() {
        let out = CommandOutput::Product {
            message: Some("Product added successfully".to_string()),
            product: dto(),
        }
        .render(OutputFormat::Json)
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["message"], "Product added successfully");
        assert_eq!(value["product"]["priceDisplay"], "49.90");
        assert_eq!(value["product"]["quantity"], 10);
    }

    #[tokio::test]
    async fn test_execute_dispatch() {
        let repo = ProductRepository::new(Arc::new(MemoryKvStore::new()));
        let mut store = InventoryStore::initialize(repo).await;

        let add = Commands::Add(FieldArgs {
            name: Some("Mouse".to_string()),
            category: Some("Peripherals".to_string()),
            price: Some("49.90".to_string()),
            quantity: Some("10".to_string()),
        });
        execute(&mut store, &add).await.unwrap();

        let listed = execute(&mut store, &Commands::List).await.unwrap();
        assert!(matches!(listed, CommandOutput::Products(ref p) if p.len() == 1));
    }
}
