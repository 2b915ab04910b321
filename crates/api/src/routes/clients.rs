//! Route definitions for the `/clients` resource.
//!
//! Also nests client-scoped campaign and note routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{campaign, client, note};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/campaigns            -> campaign::list_by_client
/// POST   /{id}/campaigns            -> campaign::create
/// GET    /{id}/notes                -> note::list_by_client
/// POST   /{id}/notes                -> note::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
        .route(
            "/{id}/campaigns",
            get(campaign::list_by_client).post(campaign::create),
        )
        .route(
            "/{id}/notes",
            get(note::list_by_client).post(note::create),
        )
}
