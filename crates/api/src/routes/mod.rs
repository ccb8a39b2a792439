pub mod debug;
pub mod faq;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /faq                GET list, POST create
/// /faq/{id}           PUT update, DELETE delete
/// /debug/schema       GET column metadata
/// /debug/tables       GET table list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/faq", faq::router())
        .nest("/debug", debug::router())
}
