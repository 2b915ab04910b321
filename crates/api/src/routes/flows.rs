//! Route definitions for the flow pipeline.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::flow;
use crate::router::RouteTimeouts;
use crate::state::AppState;

/// Routes mounted at `/flows`.
///
/// ```text
/// GET    /types         -> list_types
/// POST   /strategy      -> strategy
/// POST   /generate      -> generate
/// POST   /revise        -> revise
/// POST   /finalize      -> finalize
/// GET    /saved         -> list_saved
/// GET    /copy/{id}     -> get_copy
/// PUT    /copy/{id}     -> update_copy
/// ```
pub fn router(timeouts: &RouteTimeouts) -> Router<AppState> {
    Router::new()
        .route("/types", get(flow::list_types))
        .route("/strategy", post(flow::strategy))
        .route("/finalize", post(flow::finalize))
        .route("/saved", get(flow::list_saved))
        .route("/copy/{id}", get(flow::get_copy).put(flow::update_copy))
        .layer(timeouts.data.clone())
        .route("/generate", post(flow::generate).layer(timeouts.generation.clone()))
        .route("/revise", post(flow::revise).layer(timeouts.generation.clone()))
}
