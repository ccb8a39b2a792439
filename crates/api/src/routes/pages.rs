use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Landing page embedded into the binary at compile time.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
