//! Liveness and dependency report, mounted at the root (not under `/api/v1`).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Id looked up to confirm the record store is readable.
const STORE_CHECK_ID: &str = "__health__";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when Postgres or the record store is unreadable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub store_healthy: bool,
    /// Missing credentials are reported here without degrading `status`.
    pub llm_configured: bool,
    pub airtable_configured: bool,
    pub generation_concurrency: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db, store) = tokio::join!(
        copyforge_db::health_check(&state.pool),
        state.store.contains(STORE_CHECK_ID),
    );
    if let Err(e) = &db {
        tracing::warn!(error = %e, "Health check: database unreachable");
    }
    if let Err(e) = &store {
        tracing::warn!(error = %e, "Health check: record store unreadable");
    }

    let db_healthy = db.is_ok();
    let store_healthy = store.is_ok();
    Json(HealthResponse {
        status: if db_healthy && store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        store_healthy,
        llm_configured: !state.config.llm.api_key.is_empty(),
        airtable_configured: state.airtable.is_some(),
        generation_concurrency: state.sequencer.concurrency(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
