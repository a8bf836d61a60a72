//! SQLite storage implementation

use std::path::Path;
use chrono::Utc;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, params, params_from_iter, OptionalExtension, Transaction, TransactionBehavior};
use crate::{Result, Error};
use crate::reference::{CreateReference, Reference, ReferenceFilter, UpdateReference};
use crate::seed::SEED_REFERENCES;
use super::schema::{self, REFERENCE_COLUMNS};

const INSERT_REFERENCE: &str = r#"
INSERT INTO "references" (title, category, content, language, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?5)
"#;

/// `PRAGMA user_version` once the example catalog has been considered
const CATALOG_VERSION: i64 = 1;

/// SQLite-backed storage for the reference catalog
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.register_functions()?;
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.register_functions()?;
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open a database file, seeding the example catalog on first use.
    ///
    /// The seed and the `user_version` marker commit together under a write
    /// lock, so concurrent first starts seed once and a failed seed is retried
    /// next time. A database that already holds references is never seeded,
    /// and once marked it is never seeded again, even if emptied.
    pub fn bootstrap(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self::open(path)?;
        let tx = Transaction::new_unchecked(&store.conn, TransactionBehavior::Immediate)?;
        let version: i64 = tx.pragma_query_value(None, "user_version", |row| row.get(0))?;
        if version < CATALOG_VERSION {
            let existing: i64 = tx.query_row(r#"SELECT COUNT(*) FROM "references""#, [], |row| row.get(0))?;
            if existing == 0 {
                let seeded = insert_catalog(&tx)?;
                tracing::info!("Seeded {} with {} example references", path.display(), seeded);
            }
            tx.pragma_update(None, "user_version", CATALOG_VERSION)?;
        }
        tx.commit()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Register `casefold(text)`, a Unicode lowercase fold used by search
    fn register_functions(&self) -> Result<()> {
        self.conn.create_scalar_function(
            "casefold",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|text| text.to_lowercase())),
        )?;
        Ok(())
    }

    /// Insert the example catalog in a single transaction
    pub fn seed(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let seeded = insert_catalog(&tx)?;
        tx.commit()?;
        Ok(seeded)
    }

    // ========== Reference Operations ==========

    /// Insert a new reference and return its id
    pub fn create(&self, request: &CreateReference) -> Result<i64> {
        let now = Utc::now();
        self.conn.execute(
            INSERT_REFERENCE,
            params![
                request.title(),
                request.category(),
                request.content(),
                request.language(),
                now,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!("Created reference {} in category {:?}", id, request.category());
        Ok(id)
    }

    /// List references matching the filter, in ascending id order
    pub fn list(&self, filter: &ReferenceFilter) -> Result<Vec<Reference>> {
        let mut sql = format!(r#"SELECT {} FROM "references" WHERE 1=1"#, REFERENCE_COLUMNS);
        let mut args: Vec<String> = Vec::new();

        if let Some(search) = filter.search() {
            let pattern = like_pattern(&search.to_lowercase());
            sql.push_str(r" AND (casefold(title) LIKE ? ESCAPE '\' OR casefold(content) LIKE ? ESCAPE '\')");
            args.push(pattern.clone());
            args.push(pattern);
        }

        if let Some(category) = filter.category() {
            sql.push_str(" AND category = ?");
            args.push(category.to_string());
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let references = stmt
            .query_map(params_from_iter(args.iter()), |row| self.row_to_reference(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(
            "Listed {} references (search: {:?}, category: {:?})",
            references.len(),
            filter.search(),
            filter.category()
        );
        Ok(references)
    }

    /// Get a reference by id, if it exists
    pub fn find(&self, id: i64) -> Result<Option<Reference>> {
        self.conn
            .query_row(
                &format!(r#"SELECT {} FROM "references" WHERE id = ?1"#, REFERENCE_COLUMNS),
                [id],
                |row| self.row_to_reference(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get a reference by id
    pub fn get(&self, id: i64) -> Result<Reference> {
        self.find(id)?.ok_or(Error::NotFound(id))
    }

    /// Replace every mutable field of a reference.
    ///
    /// Fields are written exactly as given, blanks included. `created_at`
    /// is left alone and `updated_at` never drops below it, even if the
    /// clock stepped back since creation.
    pub fn update(&self, id: i64, update: &UpdateReference) -> Result<()> {
        let now = Utc::now();
        let changed = self.conn.execute(
            r#"
            UPDATE "references"
            SET title = ?1, category = ?2, content = ?3, language = ?4, updated_at = MAX(?5, created_at)
            WHERE id = ?6
            "#,
            params![
                update.title,
                update.category,
                update.content,
                update.language,
                now,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        tracing::debug!("Updated reference {}", id);
        Ok(())
    }

    /// Delete a reference. Returns whether a row was removed; a missing id is not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.conn.execute(r#"DELETE FROM "references" WHERE id = ?1"#, [id])?;
        tracing::debug!("Deleted reference {} (removed: {})", id, removed > 0);
        Ok(removed > 0)
    }

    /// Distinct categories, sorted ascending
    pub fn list_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT DISTINCT category FROM "references" ORDER BY category"#
        )?;

        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(categories)
    }

    /// Count all references
    pub fn count_references(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(r#"SELECT COUNT(*) FROM "references""#, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            references: self.count_references()?,
            categories: self.list_categories()?.len(),
        })
    }

    /// Helper to convert a row to a Reference
    fn row_to_reference(&self, row: &rusqlite::Row) -> rusqlite::Result<Reference> {
        Ok(Reference {
            id: row.get(0)?,
            title: row.get(1)?,
            category: row.get(2)?,
            content: row.get(3)?,
            language: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

fn insert_catalog(conn: &Connection) -> Result<usize> {
    let now = Utc::now();
    for seed in SEED_REFERENCES {
        conn.execute(
            INSERT_REFERENCE,
            params![seed.title, seed.category, seed.content, seed.language, now],
        )?;
    }
    Ok(SEED_REFERENCES.len())
}

/// Build a LIKE pattern that matches `search` literally anywhere in a column
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub references: usize,
    pub categories: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(store: &SqliteStore, title: &str, category: &str, content: &str) -> i64 {
        let request = CreateReference::new(title, category, content, None).unwrap();
        store.create(&request).unwrap()
    }

    fn titles(references: &[Reference]) -> Vec<&str> {
        references.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_reference_crud() {
        let store = SqliteStore::open_in_memory().unwrap();

        let id = create(&store, "X", "Cat", "body");
        let retrieved = store.get(id).unwrap();
        assert_eq!(retrieved.title, "X");
        assert_eq!(retrieved.language, "");
        assert_eq!(retrieved.created_at, retrieved.updated_at);

        let update = UpdateReference::new(
            Some("Y".into()),
            Some("Cat".into()),
            Some("body2".into()),
            Some(String::new()),
        );
        store.update(id, &update).unwrap();

        let retrieved = store.get(id).unwrap();
        assert_eq!(retrieved.title, "Y");
        assert_eq!(retrieved.content, "body2");

        assert!(store.delete(id).unwrap());
        assert!(matches!(store.get(id), Err(Error::NotFound(missing)) if missing == id));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = create(&store, "a", "Cat", "1");
        let second = create(&store, "b", "Cat", "2");
        assert!(second > first);

        store.delete(second).unwrap();
        let third = create(&store, "c", "Cat", "3");
        assert!(third > second);
    }

    #[test]
    fn test_list_orders_by_id() {
        let store = SqliteStore::open_in_memory().unwrap();

        create(&store, "zeta", "Cat", "1");
        create(&store, "alpha", "Cat", "2");
        create(&store, "mid", "Cat", "3");

        let all = store.list(&ReferenceFilter::all()).unwrap();
        assert_eq!(titles(&all), vec!["zeta", "alpha", "mid"]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "one", "Cat", "1");
        create(&store, "two", "Other", "2");

        let unfiltered = store.list(&ReferenceFilter::all()).unwrap();
        let empty_search = store.list(&ReferenceFilter::all().with_search("")).unwrap();
        assert_eq!(unfiltered, empty_search);
        assert_eq!(unfiltered.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_or_content() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "Git Stash", "Git", "git stash pop");
        create(&store, "Undo", "Git", "GIT reset --hard");
        create(&store, "Digit parsing", "Python", "int(s)");
        create(&store, "Docker Build", "Docker", "docker build .");

        let found = store.list(&ReferenceFilter::all().with_search("git")).unwrap();
        assert_eq!(titles(&found), vec!["Git Stash", "Undo", "Digit parsing"]);
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "Über config", "Cat", "settings");
        create(&store, "Straße", "Cat", "ΣΊΣΥΦΟΣ rolls");
        create(&store, "Plain", "Cat", "nothing here");

        let found = store.list(&ReferenceFilter::all().with_search("über")).unwrap();
        assert_eq!(titles(&found), vec!["Über config"]);

        let found = store.list(&ReferenceFilter::all().with_search("ÜBER")).unwrap();
        assert_eq!(titles(&found), vec!["Über config"]);

        let found = store.list(&ReferenceFilter::all().with_search("Σίσυφ")).unwrap();
        assert_eq!(titles(&found), vec!["Straße"]);
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "Percent", "Cat", "100% done");
        create(&store, "Plain", "Cat", "100 done");
        create(&store, "Snake", "Cat", "my_var");
        create(&store, "Camel", "Cat", "myVar");

        let found = store.list(&ReferenceFilter::all().with_search("0%")).unwrap();
        assert_eq!(titles(&found), vec!["Percent"]);

        let found = store.list(&ReferenceFilter::all().with_search("y_v")).unwrap();
        assert_eq!(titles(&found), vec!["Snake"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "Build", "Docker", "docker build .");
        create(&store, "Lowercase", "docker", "docker ps");
        create(&store, "Compose", "Docker Compose", "docker-compose up");
        create(&store, "Clone", "Git", "git clone");

        let found = store.list(&ReferenceFilter::all().with_category("Docker")).unwrap();
        assert_eq!(titles(&found), vec!["Build"]);
    }

    #[test]
    fn test_search_and_category_combine_with_and() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "Build", "Docker", "docker build .");
        create(&store, "Clone", "Git", "git clone");
        create(&store, "Ignore images", "Git", "echo '*.tar' >> .dockerignore");

        let filter = ReferenceFilter::all().with_search("docker").with_category("Git");
        let found = store.list(&filter).unwrap();
        assert_eq!(titles(&found), vec!["Ignore images"]);

        let filter = ReferenceFilter::all().with_search("clone").with_category("Docker");
        assert!(store.list(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_update_refreshes_updated_at_only() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = create(&store, "X", "Cat", "body");
        let before = store.get(id).unwrap();

        store.update(id, &UpdateReference::new(Some("X".into()), Some("Cat".into()), Some("body".into()), None)).unwrap();

        let after = store.get(id).unwrap();
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
        assert!(after.created_at <= after.updated_at);
    }

    #[test]
    fn test_update_never_precedes_created_at() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = create(&store, "X", "Cat", "body");

        // Creation stamped by a clock that ran ahead of the current one
        let ahead = Utc::now() + chrono::Duration::days(1);
        store
            .conn
            .execute(
                r#"UPDATE "references" SET created_at = ?1, updated_at = ?1 WHERE id = ?2"#,
                params![ahead, id],
            )
            .unwrap();

        store.update(id, &UpdateReference::new(Some("Y".into()), Some("Cat".into()), Some("body".into()), None)).unwrap();

        let after = store.get(id).unwrap();
        assert_eq!(after.title, "Y");
        assert_eq!(after.created_at, ahead);
        assert_eq!(after.updated_at, ahead);
    }

    #[test]
    fn test_storage_failures_propagate() {
        let store = SqliteStore::open_in_memory().unwrap();
        create(&store, "X", "Cat", "body");
        store.conn.execute(r#"DROP TABLE "references""#, []).unwrap();

        let request = CreateReference::new("Y", "Cat", "body", None).unwrap();
        assert!(matches!(store.create(&request), Err(Error::Storage(_))));
        assert!(matches!(store.list(&ReferenceFilter::all()), Err(Error::Storage(_))));
        assert!(matches!(store.get(1), Err(Error::Storage(_))));
        assert!(matches!(store.delete(1), Err(Error::Storage(_))));
        assert!(matches!(store.list_categories(), Err(Error::Storage(_))));
    }

    #[test]
    fn test_update_is_full_replace() {
        let store = SqliteStore::open_in_memory().unwrap();
        let request = CreateReference::new("X", "Cat", "body", Some("bash".into())).unwrap();
        let id = store.create(&request).unwrap();

        store.update(id, &UpdateReference::new(Some("Y".into()), None, None, None)).unwrap();

        let after = store.get(id).unwrap();
        assert_eq!(after.title, "Y");
        assert_eq!(after.category, "");
        assert_eq!(after.content, "");
        assert_eq!(after.language, "");
    }

    #[test]
    fn test_update_missing_reference() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store.update(42, &UpdateReference::default());
        assert!(matches!(result, Err(Error::NotFound(42))));
        assert_eq!(store.count_references().unwrap(), 0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = create(&store, "X", "Cat", "body");

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert!(!store.delete(9999).unwrap());
    }

    #[test]
    fn test_list_categories() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.list_categories().unwrap().is_empty());

        create(&store, "a", "Git", "1");
        create(&store, "b", "Docker", "2");
        create(&store, "c", "Git", "3");

        assert_eq!(store.list_categories().unwrap(), vec!["Docker", "Git"]);
    }

    #[test]
    fn test_seed_populates_catalog() {
        let store = SqliteStore::open_in_memory().unwrap();
        let seeded = store.seed().unwrap();

        assert_eq!(seeded, SEED_REFERENCES.len());
        let stats = store.stats().unwrap();
        assert_eq!(stats.references, SEED_REFERENCES.len());
        assert_eq!(stats.categories, 7);

        let docker = store.list(&ReferenceFilter::all().with_category("Docker")).unwrap();
        assert!(!docker.is_empty());
        assert!(docker.iter().all(|r| r.category == "Docker"));
    }

    #[test]
    fn test_like_pattern_escapes() {
        assert_eq!(like_pattern("git"), "%git%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
