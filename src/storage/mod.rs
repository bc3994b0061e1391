//! Storage Layer - SQLite-backed name store
//!
//! System of record is SQLite with one table:
//! - names(id, name)

pub mod schema;
pub mod sqlite;

pub use sqlite::{NameStore, StoreStats};
