//! Storage layer for the FAQ service.
//!
//! Owns the SQLite connection pool, the idempotent schema setup, and the
//! startup diagnostics. Row models live in [`models`], all SQL in
//! [`repositories`].

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a `sqlite://` database URL.
///
/// The database file is created if missing, and the journal mode is set to
/// WAL so readers are not blocked while a writer's transaction is open.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Idempotently create the `faq` table.
///
/// Safe to run on every startup; existing rows are never touched.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS faq ( \
            id INTEGER PRIMARY KEY AUTOINCREMENT, \
            question TEXT NOT NULL, \
            answer TEXT NOT NULL, \
            category TEXT NOT NULL DEFAULT '', \
            created_at TEXT NOT NULL, \
            updated_at TEXT NOT NULL \
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Verify the database answers queries at all.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

/// Startup self-test: insert a sentinel row and delete it again.
///
/// Confirms the table is writable before the server starts taking traffic.
/// Purely diagnostic; the caller logs a warning on failure but never aborts
/// startup, and steady-state data is unaffected either way.
pub async fn write_probe(pool: &DbPool) -> Result<(), sqlx::Error> {
    let now = faqd_core::types::now_utc();
    let id = repositories::FaqRepo::insert(
        pool,
        "__write_probe__",
        "__write_probe__",
        "",
        &now,
        &now,
    )
    .await?;
    tracing::debug!(id, "Write probe row inserted");

    let deleted = repositories::FaqRepo::delete(pool, id).await?;
    if deleted == 1 {
        tracing::info!("Write probe succeeded: faq table is writable");
    } else {
        tracing::warn!(id, "Write probe row vanished before cleanup");
    }
    Ok(())
}
