pub mod airtable;
pub mod campaigns;
pub mod clients;
pub mod copy;
pub mod flows;
pub mod health;
pub mod notes;

use axum::Router;

use crate::router::RouteTimeouts;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                                  list, create
/// /clients/{id}                             get, update, delete
/// /clients/{id}/campaigns                   list, create
/// /clients/{id}/notes                       list, create
/// /campaigns/{id}                           get, update, delete
/// /notes/{id}                               delete
///
/// /flows/types                              flow types (GET)
/// /flows/strategy                           build strategy (POST)
/// /flows/generate                           generate all emails (POST)
/// /flows/revise                             regenerate one email (POST)
/// /flows/finalize                           persist + share (POST)
/// /flows/saved                              list saved flows (GET)
/// /flows/copy/{id}                          get, update saved flow
///
/// /copy/generate                            single campaign draft (POST)
/// /copy/save                                persist + share (POST)
/// /copy/saved                               list saved copies (GET)
/// /copy/{id}                                get saved copy
///
/// /airtable/campaigns                       list tracker rows
/// /airtable/campaigns/{record_id}           get tracker row
/// /airtable/campaigns/{record_id}/copy-link write copy link (PATCH)
/// ```
///
/// `/flows/generate`, `/flows/revise` and `/copy/generate` run under the
/// generation timeout; every other route under the data timeout.
pub fn api_routes(timeouts: &RouteTimeouts) -> Router<AppState> {
    Router::new()
        .nest("/clients", clients::router().layer(timeouts.data.clone()))
        .nest("/campaigns", campaigns::router().layer(timeouts.data.clone()))
        .nest("/notes", notes::router().layer(timeouts.data.clone()))
        .nest("/flows", flows::router(timeouts))
        .nest("/copy", copy::router(timeouts))
        .nest("/airtable", airtable::router().layer(timeouts.data.clone()))
}
