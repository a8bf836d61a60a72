//! # Refcat - Personal Reference Catalog
//!
//! Store short, categorized code and config snippets ("references") and
//! find them again by free-text search or category.
//!
//! Refcat provides:
//! - A single `Reference` entity with strongly-typed create/update requests
//! - SQLite-backed storage with substring search and exact category filters
//! - A seeded example catalog on first run
//! - An HTTP API and a CLI over the same store

pub mod reference;
pub mod seed;
pub mod storage;
pub mod server;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use reference::{CreateReference, Reference, ReferenceFilter, UpdateReference};
pub use storage::SqliteStore;

/// Result type alias for Refcat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Refcat operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reference not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
