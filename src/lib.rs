//! # namestore
//!
//! A thin data-access layer over a single `names` table.
//!
//! namestore provides:
//! - `NameStore`, owning one SQLite connection for its lifetime
//! - Idempotent schema creation, inserts and full reads
//! - Injected connection configuration with a TOML config file
//! - Terminal helpers shared by the `namestore` binary

pub mod record;
pub mod storage;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use record::NameRecord;
pub use storage::NameStore;
pub use config::{ConnectionConfig, NamestoreConfig};

/// Result type alias for namestore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for namestore operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
