//! Route definitions for the campaign tracker integration.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::airtable;
use crate::state::AppState;

/// Routes mounted at `/airtable`.
///
/// ```text
/// GET    /campaigns                         -> list_campaigns
/// GET    /campaigns/{record_id}             -> get_campaign
/// PATCH  /campaigns/{record_id}/copy-link   -> set_copy_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campaigns", get(airtable::list_campaigns))
        .route("/campaigns/{record_id}", get(airtable::get_campaign))
        .route(
            "/campaigns/{record_id}/copy-link",
            patch(airtable::set_copy_link),
        )
}
