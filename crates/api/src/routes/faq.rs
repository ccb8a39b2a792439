//! Route definitions for the FAQ entry CRUD endpoints.
//!
//! ```text
//! GET    /          list_entries
//! POST   /          create_entry
//! PUT    /{id}      update_entry
//! DELETE /{id}      delete_entry
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// FAQ entry routes — mounted at `/faq`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faq::list_entries).post(faq::create_entry))
        .route("/{id}", put(faq::update_entry).delete(faq::delete_entry))
}
