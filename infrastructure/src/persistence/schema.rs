//! Database schema, applied once at startup.

use sqlx::SqlitePool;
use todolist_application::RepositoryError;

/// The two tables the aggregate maps onto: one row per list, one row per item
/// with a composite primary key of (item id, parent list id). UUIDs are
/// stored as hyphenated TEXT, timestamps as RFC 3339 TEXT.
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS todo_lists (
    id             TEXT NOT NULL PRIMARY KEY,
    name           TEXT NOT NULL,
    description    TEXT NOT NULL,
    date_created   TEXT NOT NULL,
    date_completed TEXT,
    completed      INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS todo_items (
    id             TEXT NOT NULL,
    list_id        TEXT NOT NULL REFERENCES todo_lists(id) ON DELETE CASCADE,
    name           TEXT NOT NULL,
    description    TEXT NOT NULL,
    date_created   TEXT NOT NULL,
    date_completed TEXT,
    completed      INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (id, list_id)
);

CREATE INDEX IF NOT EXISTS idx_todo_items_list ON todo_items(list_id);
";

/// Applies [`SCHEMA`] to the pool. Idempotent.
///
/// # Errors
///
/// Returns [`RepositoryError::Storage`] when the DDL fails to execute.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| RepositoryError::Storage {
            reason: format!("failed to initialize schema: {e}"),
        })
}
