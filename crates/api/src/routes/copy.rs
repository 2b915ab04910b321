//! Route definitions for single-campaign copy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::copy;
use crate::router::RouteTimeouts;
use crate::state::AppState;

/// Routes mounted at `/copy`.
///
/// ```text
/// POST   /generate   -> generate
/// POST   /save       -> save
/// GET    /saved      -> list_saved
/// GET    /{id}       -> get_by_id
/// ```
pub fn router(timeouts: &RouteTimeouts) -> Router<AppState> {
    Router::new()
        .route("/save", post(copy::save))
        .route("/saved", get(copy::list_saved))
        .route("/{id}", get(copy::get_by_id))
        .layer(timeouts.data.clone())
        .route("/generate", post(copy::generate).layer(timeouts.generation.clone()))
}
