use axum::routing::delete;
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Routes mounted at `/notes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(note::delete))
}
