//! Repository for the `faq` table.
//!
//! Mutating operations return explicit results — the inserted id, or the
//! affected-row count — rather than relying on any per-connection state, so
//! handlers stay pure functions of their inputs. Every value is bound as a
//! parameter; nothing is interpolated into SQL text.

use faqd_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::faq::{ColumnInfo, FaqEntry};

const COLUMNS: &str = "id, question, answer, category, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// List all entries, most recently created (highest id) first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<FaqEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faq ORDER BY id DESC");
        sqlx::query_as::<_, FaqEntry>(&query).fetch_all(pool).await
    }

    /// Insert a new entry, returning the assigned id.
    pub async fn insert(
        pool: &SqlitePool,
        question: &str,
        answer: &str,
        category: &str,
        created_at: &str,
        updated_at: &str,
    ) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO faq (question, answer, category, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(created_at)
        .bind(updated_at)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Find an entry by id.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<FaqEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faq WHERE id = ?1");
        sqlx::query_as::<_, FaqEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update question, answer, category, and `updated_at` for an entry.
    ///
    /// `created_at` is never touched. Returns the affected-row count (0 or 1).
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        question: &str,
        answer: &str,
        category: &str,
        updated_at: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE faq SET question = ?2, answer = ?3, category = ?4, updated_at = ?5 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete an entry by id. Returns the affected-row count (0 or 1).
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faq WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Column metadata for the `faq` table (debug endpoint).
    pub async fn schema_info(pool: &SqlitePool) -> Result<Vec<ColumnInfo>, sqlx::Error> {
        sqlx::query_as::<_, ColumnInfo>("PRAGMA table_info('faq')")
            .fetch_all(pool)
            .await
    }

    /// Names of all user tables in the database (debug endpoint).
    pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }
}
