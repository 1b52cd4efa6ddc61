//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  stockroom edit <id> --price abc                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<T, CliError>                         │  │
//! │  │         │                                                        │  │
//! │  │         ├── Unknown id?       CoreError::ProductNotFound ──┐    │  │
//! │  │         ├── Flagged fields?   CoreError::Validation ───────┤    │  │
//! │  │         ├── Bad config?       CliError::config ────────────┤    │  │
//! │  │         └── DB won't open?    DbError ─────────────────────┤    │  │
//! │  │                                                            ▼    │  │
//! │  │                                                        CliError │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stderr: "Please correct the following fields: Price", exit code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence failures during a command never show up here: the inventory
//! store logs them and keeps going.

use serde::Serialize;
use stockroom_core::CoreError;
use stockroom_db::DbError;

/// Error returned from commands.
///
/// ## Serialization
/// With `--format json` the user gets:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please correct the following fields: Price"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id does not exist
    NotFound,

    /// Staged input failed validation
    ValidationError,

    /// `save_edit` without an edit target
    NotEditing,

    /// Storage could not be opened
    StorageError,

    /// Config file or environment is invalid
    ConfigError,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ConfigError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

/// Converts storage errors to CLI errors.
impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Database migration failed")
            }
            DbError::PoolExhausted => {
                CliError::new(ErrorCode::StorageError, "Database pool exhausted")
            }
            DbError::QueryFailed(e) | DbError::Serialization(e) | DbError::Internal(e) => {
                tracing::error!("Storage operation failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => CliError::not_found("Product", &id),
            CoreError::NotEditing => {
                CliError::new(ErrorCode::NotEditing, "No product is being edited")
            }
            CoreError::Validation(e) => CliError::validation(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::internal(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(format!("Failed to render JSON: {}", err))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
