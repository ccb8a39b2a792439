use axum::routing::get;
use axum::Router;

use crate::handlers::debug;
use crate::state::AppState;

/// Diagnostic routes — mounted at `/debug`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schema", get(debug::schema))
        .route("/tables", get(debug::tables))
}
