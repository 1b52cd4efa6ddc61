//! # Stockroom CLI Library
//!
//! Wires configuration, storage and the inventory store behind the
//! `stockroom` binary.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── inventory.rs◄─── InventoryStore (products + form)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch & rendering
//! │   └── product.rs  ◄─── Product commands
//! └── error.rs        ◄─── CLI error type
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::{CliError, ErrorCode};
use state::{ConfigState, InventoryStore, StorageBackend};
use stockroom_db::{Database, DbConfig, KeyValueStore, MemoryKvStore, ProductRepository};

/// Runs one invocation and returns what to print on stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Load Config ──────────────────────────────────────────────────────► │
/// │     • --config / stockroom.toml, then STOCKROOM_* env                   │
/// │     • no --config: a broken default file falls back to defaults         │
/// │                                                                         │
/// │  2. Open Storage ─────────────────────────────────────────────────────► │
/// │     • sqlite: connect, WAL mode, run pending migrations, SELECT 1       │
/// │     • memory: empty map                                                 │
/// │                                                                         │
/// │  3. InventoryStore::initialize ───────────────────────────────────────► │
/// │     • unreadable collection → empty, logged                             │
/// │                                                                         │
/// │  4. Execute the subcommand, render table or JSON                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: &Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => ConfigState::load(Some(path.clone()))?,
        None => ConfigState::load_or_default(None),
    };
    info!(storage = %config.storage, key = %config.storage_key, "Configuration loaded");

    let (kv, db) = open_storage(&config).await?;
    let repo = ProductRepository::with_key(kv, config.storage_key.clone());
    let mut store = InventoryStore::initialize(repo).await;

    let result = commands::execute(&mut store, &cli.command).await;

    if let Some(db) = db {
        db.close().await;
    }

    result?.render(cli.format)
}

/// Opens the configured backend.
///
/// The [`Database`] is handed back so the pool can be closed cleanly.
async fn open_storage(
    config: &ConfigState,
) -> Result<(Arc<dyn KeyValueStore>, Option<Database>), CliError> {
    match config.storage {
        StorageBackend::Sqlite => {
            let path = config.resolved_database_path()?;
            info!(?path, "Opening database");

            let db_config = DbConfig::new(path)
                .busy_timeout(Duration::from_millis(config.busy_timeout_ms));
            let db = Database::new(db_config).await?;

            if !db.health_check().await {
                db.close().await;
                return Err(CliError::new(
                    ErrorCode::StorageError,
                    "Database is not responding",
                ));
            }

            let kv: Arc<dyn KeyValueStore> = Arc::new(db.kv_store());
            Ok((kv, Some(db)))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage, changes will not survive exit");
            let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKvStore::new());
            Ok((kv, None))
        }
    }
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` or `STOCKROOM_LOG` - full filter, e.g. `stockroom=trace`
/// - `-v` - debug, `-vv` - trace
/// - Default: `info,stockroom=debug,sqlx=warn`
///
/// Logs go to stderr, so stdout stays clean for piping.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("STOCKROOM_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info,stockroom=debug,sqlx=warn",
        1 => "debug,stockroom=trace,sqlx=info",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse_cli(args: &[&str]) -> Cli {
        let mut argv = vec!["stockroom"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_run_against_sqlite_file() {
        let dir = std::env::temp_dir().join(format!("stockroom-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let db_path = dir.join("inventory.db");
        let config_path = dir.join("stockroom.toml");
        std::fs::write(
            &config_path,
            format!(
                "storage = \"sqlite\"\ndatabase_path = {:?}\n",
                db_path.display().to_string()
            ),
        )
        .unwrap();
        let config = config_path.to_str().unwrap();

        let out = run(&parse_cli(&[
            "-c", config, "add", "-n", "Mouse", "--category", "Peripherals", "-p", "49,90", "-q",
            "10",
        ]))
        .await
        .unwrap();
        assert!(out.starts_with("Product added successfully"));

        // A second invocation sees the first one's write
        let out = run(&parse_cli(&["-c", config, "-f", "json", "list"]))
            .await
            .unwrap();
        let listed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(listed[0]["name"], "Mouse");
        assert_eq!(listed[0]["price"], 49.9);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_run_validation_error() {
        let dir = std::env::temp_dir().join(format!("stockroom-invalid-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("stockroom.toml");
        std::fs::write(&config_path, "storage = \"memory\"\n").unwrap();

        let err = run(&parse_cli(&[
            "-c",
            config_path.to_str().unwrap(),
            "add",
            "-n",
            "Mouse",
        ]))
        .await
        .unwrap_err();
        assert_eq!(err.code, error::ErrorCode::ValidationError);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_explicit_broken_config_is_an_error() {
        let dir = std::env::temp_dir().join(format!("stockroom-broken-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("stockroom.toml");
        std::fs::write(&config_path, "storage = \"floppy\"\n").unwrap();

        let err = run(&parse_cli(&["-c", config_path.to_str().unwrap(), "list"]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_open_storage_checks_sqlite() {
        let dir = std::env::temp_dir().join(format!("stockroom-open-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = ConfigState {
            database_path: Some(dir.join("inventory.db")),
            busy_timeout_ms: 250,
            ..ConfigState::default()
        };

        let (kv, db) = open_storage(&config).await.unwrap();
        let db = db.unwrap();
        assert!(db.health_check().await);
        kv.write("k", "[]").await.unwrap();
        db.close().await;

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "info,stockroom=debug,sqlx=warn");
        assert_eq!(default_filter(1), "debug,stockroom=trace,sqlx=info");
        assert_eq!(default_filter(2), "trace");
        assert_eq!(default_filter(7), "trace");
    }
}
