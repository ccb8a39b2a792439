//! FAQ entry model and request DTOs.

use faqd_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `faq` table.
///
/// Timestamps are ISO 8601 TEXT; `created_at` is set once at insert and never
/// changes, `updated_at` moves on every successful update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqEntry {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

/// DTO for creating a new FAQ entry.
///
/// All fields are optional at the serde level so a missing `question` or
/// `answer` reaches domain validation and produces the JSON error envelope
/// instead of a body-deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaqEntry {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
}

/// DTO for updating an existing FAQ entry.
///
/// Updates are full replacements: `question` and `answer` are required by
/// validation, the same as on create.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaqEntry {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
}

/// A row from `PRAGMA table_info`, exposed by the debug schema endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub column_type: String,
    pub notnull: i64,
    pub dflt_value: Option<String>,
    pub pk: i64,
}
