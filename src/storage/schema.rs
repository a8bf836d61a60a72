//! Database schema definitions

/// SQL to create the references table
///
/// `references` is an SQL keyword, so the name is always quoted.
/// AUTOINCREMENT keeps ids from being reused after a delete.
pub const CREATE_REFERENCES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "references" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    content TEXT NOT NULL,
    language TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    r#"CREATE INDEX IF NOT EXISTS idx_references_category ON "references"(category)"#,
];

/// Column list shared by every reference query, in `row_to_reference` order
pub const REFERENCE_COLUMNS: &str = "id, title, category, content, language, created_at, updated_at";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_REFERENCES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
