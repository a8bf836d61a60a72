//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - references(id, title, category, content, language, created_at, updated_at)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, DbStats};
