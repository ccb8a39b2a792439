//! Handlers for the FAQ entry CRUD endpoints.
//!
//! Each request moves through the same stages: validate, execute one or more
//! sequential storage calls, shape the response. Validation failures
//! short-circuit before any storage access; storage failures surface as 500
//! through [`AppError`]. Create and update re-fetch the row after a
//! successful write so the caller receives the authoritative persisted state
//! (server-assigned id and timestamps).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use faqd_core::error::CoreError;
use faqd_core::faq::{normalize_category, validate_entry_input};
use faqd_core::types::{now_utc, DbId};
use faqd_db::models::faq::{CreateFaqEntry, FaqEntry, UpdateFaqEntry};
use faqd_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DeleteResponse, MutationResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read back a row after a committed write.
///
/// A failed read-back does not fail the operation: the write is already
/// durable, so the handler reports success without the row payload.
async fn read_back(pool: &faqd_db::DbPool, id: DbId) -> Option<FaqEntry> {
    match FaqRepo::find_by_id(pool, id).await {
        Ok(Some(entry)) => Some(entry),
        Ok(None) => {
            tracing::warn!(id, "Read-back found no row for committed write");
            None
        }
        Err(err) => {
            tracing::warn!(id, error = %err, "Read-back failed after committed write");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// GET /api/faq
// ---------------------------------------------------------------------------

/// List all entries, most recent first.
///
/// Categories are normalized on the way out so rows persisted before
/// normalization existed are still served in canonical form.
pub async fn list_entries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut entries = FaqRepo::list_all(&state.pool).await?;
    for entry in &mut entries {
        entry.category = normalize_category(Some(&entry.category));
    }
    tracing::debug!(count = entries.len(), "Listed FAQ entries");
    Ok(Json(entries))
}

// ---------------------------------------------------------------------------
// POST /api/faq
// ---------------------------------------------------------------------------

/// Create a new entry.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(input): Json<CreateFaqEntry>,
) -> AppResult<impl IntoResponse> {
    let (question, answer) =
        validate_entry_input(input.question.as_deref(), input.answer.as_deref())?;
    let category = normalize_category(input.category.as_deref());

    let now = now_utc();
    let id = FaqRepo::insert(&state.pool, &question, &answer, &category, &now, &now).await?;
    tracing::info!(id, "FAQ entry created");

    let body = match read_back(&state.pool, id).await {
        Some(entry) => MutationResponse::with_data(id, entry),
        None => MutationResponse::degraded(id, "Entry created but could not be read back"),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

// ---------------------------------------------------------------------------
// PUT /api/faq/{id}
// ---------------------------------------------------------------------------

/// Update an existing entry.
///
/// Question, answer, and category are replaced and `updated_at` moves;
/// `id` and `created_at` never change.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaqEntry>,
) -> AppResult<impl IntoResponse> {
    let (question, answer) =
        validate_entry_input(input.question.as_deref(), input.answer.as_deref())?;
    let category = normalize_category(input.category.as_deref());

    let now = now_utc();
    let affected =
        FaqRepo::update(&state.pool, id, &question, &answer, &category, &now).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FAQ entry",
            id,
        }));
    }
    tracing::info!(id, "FAQ entry updated");

    let body = match read_back(&state.pool, id).await {
        Some(entry) => MutationResponse::with_data(id, entry),
        None => MutationResponse::degraded(id, "Entry updated but could not be read back"),
    };
    Ok(Json(body))
}

// ---------------------------------------------------------------------------
// DELETE /api/faq/{id}
// ---------------------------------------------------------------------------

/// Delete an entry by id. Permanent and immediate; no soft-delete.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let affected = FaqRepo::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FAQ entry",
            id,
        }));
    }
    tracing::info!(id, "FAQ entry deleted");
    Ok(Json(DeleteResponse { success: true, id }))
}
