//! Diagnostic introspection endpoints.
//!
//! Read-only views of the database schema, useful when poking at a deployment
//! with curl. Not part of the steady-state CRUD surface.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use faqd_db::repositories::FaqRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Column metadata for the `faq` table (`PRAGMA table_info`).
pub async fn schema(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let columns = FaqRepo::schema_info(&state.pool).await?;
    Ok(Json(DataResponse { data: columns }))
}

/// Names of all user tables in the database.
pub async fn tables(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let names = FaqRepo::list_tables(&state.pool).await?;
    Ok(Json(DataResponse { data: names }))
}
