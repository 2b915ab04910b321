//! Handlers for the `/flows` resource: strategy, generation, revision and
//! shareable flow records.

use axum::extract::{Path, State};
use axum::Json;
use copyforge_core::brand::BrandProfile;
use copyforge_core::context::assemble_context;
use copyforge_core::error::CoreError;
use copyforge_core::flow::{Flow, GeneratedEmail};
use copyforge_core::flow_type::FlowType;
use copyforge_core::insights::extract_insights;
use copyforge_core::records::{RecordKind, StoredRecord};
use copyforge_core::strategy::{build_strategy, FlowStrategy};
use copyforge_core::validation::validate_url;
use copyforge_db::repositories::ClientRepo;
use copyforge_db::store::of_kind;
use copyforge_pipeline::{FlowDraft, FlowEdit};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Decode a required body field, reporting absence and shape errors as 400.
pub(crate) fn required<T: DeserializeOwned>(
    value: Option<serde_json::Value>,
    field: &str,
) -> AppResult<T> {
    match value {
        None | Some(serde_json::Value::Null) => {
            Err(AppError::BadRequest(format!("{field} is required")))
        }
        Some(value) => serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid {field}: {e}"))),
    }
}

/// Resolve the client a request refers to.
///
/// A profile carrying only an id is loaded from the database.
pub(crate) async fn resolve_brand(
    state: &AppState,
    client: Option<BrandProfile>,
) -> AppResult<BrandProfile> {
    let client = client.ok_or_else(|| AppError::BadRequest("client is required".into()))?;
    if !client.name.trim().is_empty() {
        return Ok(client);
    }
    match client.id {
        Some(id) => ClientRepo::find_by_id(&state.pool, id)
            .await?
            .map(|c| c.brand_profile())
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "Client",
                    id: id.to_string(),
                })
            }),
        None => Err(AppError::BadRequest("client name is required".into())),
    }
}

/// Scrape `website_url` when given and derive insights for `brand`.
///
/// Scrape failures are logged and treated as an empty page.
pub(crate) async fn website_insights(
    state: &AppState,
    website_url: Option<&str>,
    brand: &BrandProfile,
) -> Vec<String> {
    let mut content = String::new();
    if let Some(url) = website_url.map(str::trim).filter(|u| !u.is_empty()) {
        match validate_url("websiteUrl", url) {
            Ok(()) => match state.scraper.fetch_text(url).await {
                Ok(text) => content = text,
                Err(e) => tracing::warn!(url, error = %e, "Website scrape failed"),
            },
            Err(e) => tracing::warn!(url, error = %e, "Skipping website scrape"),
        }
    }
    extract_insights(&content, brand.display_name())
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRequest {
    pub flow_type: Option<String>,
    pub email_count: Option<u32>,
    pub offer: Option<String>,
    pub client: Option<BrandProfile>,
    pub website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub strategy: Option<serde_json::Value>,
    pub client: Option<BrandProfile>,
}

/// A generated but not yet persisted flow.
#[derive(Debug, Serialize)]
pub struct GeneratedFlow {
    pub flow_type: FlowType,
    pub client: String,
    pub email_count: u32,
    pub offer: String,
    pub emails: Vec<GeneratedEmail>,
    pub strategy: FlowStrategy,
    pub fallback_count: usize,
}

/// The `flowData` half of a finalize request.
#[derive(Debug, Deserialize)]
pub struct FlowData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "flowName")]
    pub flow_name: Option<String>,
    pub strategy: FlowStrategy,
    pub emails: Vec<GeneratedEmail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRequest {
    pub flow_data: Option<serde_json::Value>,
    pub client: Option<BrandProfile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    pub success: bool,
    pub shareable_url: String,
    pub flow_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviseRequest {
    pub email: Option<serde_json::Value>,
    pub strategy: Option<serde_json::Value>,
    pub client: Option<BrandProfile>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowTypeInfo {
    pub flow_type: FlowType,
    pub label: &'static str,
    pub template_count: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/flows/types
pub async fn list_types() -> Json<DataResponse<Vec<FlowTypeInfo>>> {
    let types = FlowType::ALL
        .into_iter()
        .map(|t| FlowTypeInfo {
            flow_type: t,
            label: t.label(),
            template_count: t.templates().len(),
        })
        .collect();
    Json(DataResponse::new(types))
}

/// POST /api/v1/flows/strategy
///
/// The flow type is validated before any website fetch.
pub async fn strategy(
    State(state): State<AppState>,
    AppJson(input): AppJson<StrategyRequest>,
) -> AppResult<Json<DataResponse<FlowStrategy>>> {
    let flow_type: FlowType = input
        .flow_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("flowType is required".into()))?
        .parse()?;
    let email_count = input
        .email_count
        .ok_or_else(|| AppError::BadRequest("emailCount is required".into()))?;
    let offer = input
        .offer
        .ok_or_else(|| AppError::BadRequest("offer is required".into()))?;
    let brand = resolve_brand(&state, input.client).await?;

    let insights = website_insights(&state, input.website_url.as_deref(), &brand).await;
    let strategy = build_strategy(flow_type, email_count, &offer, &brand, insights)?;
    if strategy.email_count < email_count {
        tracing::warn!(
            flow_type = %flow_type,
            requested = email_count,
            available = strategy.email_count,
            "Requested email count exceeds template catalogue, capping"
        );
    }

    tracing::info!(
        flow_type = %flow_type,
        requested = email_count,
        planned = strategy.email_count,
        client = %brand.display_name(),
        "Flow strategy built"
    );
    Ok(Json(DataResponse::new(strategy)))
}

/// POST /api/v1/flows/generate
///
/// Individual email failures are replaced by fallback drafts; the request
/// itself only fails on invalid input.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateRequest>,
) -> AppResult<Json<DataResponse<GeneratedFlow>>> {
    let strategy: FlowStrategy = required(input.strategy, "strategy")?;
    strategy.validate()?;
    let brand = resolve_brand(&state, input.client).await?;

    let emails = state
        .sequencer
        .run(&strategy, &brand, |progress| {
            tracing::debug!(
                completed = progress.completed,
                total = progress.total,
                email_number = progress.email_number,
                fallback = progress.fallback,
                "Flow generation progress"
            );
        })
        .await;

    let fallback_count = emails.iter().filter(|e| e.is_fallback()).count();
    Ok(Json(DataResponse::new(GeneratedFlow {
        flow_type: strategy.flow_type,
        client: brand.display_name().to_string(),
        email_count: emails.len() as u32,
        offer: strategy.offer.clone(),
        emails,
        strategy,
        fallback_count,
    })))
}

/// POST /api/v1/flows/revise
///
/// Regenerates one email; unlike whole-flow generation a failure here is
/// reported to the caller.
pub async fn revise(
    State(state): State<AppState>,
    AppJson(input): AppJson<ReviseRequest>,
) -> AppResult<Json<DataResponse<GeneratedEmail>>> {
    let email: GeneratedEmail = required(input.email, "email")?;
    let strategy: FlowStrategy = required(input.strategy, "strategy")?;
    strategy.validate()?;
    let brand = resolve_brand(&state, input.client).await?;

    let index = strategy
        .email_strategies
        .iter()
        .position(|e| e.email_number == email.email_number)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "email {} is not part of the strategy",
                email.email_number
            ))
        })?;
    let context = assemble_context(&strategy, index);

    let revised = state
        .generator
        .revise_email(
            &email,
            &context,
            &brand,
            &strategy.offer,
            &strategy.scraped_insights,
            input.feedback.as_deref(),
        )
        .await?;
    tracing::info!(email_number = revised.email_number, "Flow email revised");
    Ok(Json(DataResponse::new(revised)))
}

/// POST /api/v1/flows/finalize
pub async fn finalize(
    State(state): State<AppState>,
    AppJson(input): AppJson<FinalizeRequest>,
) -> AppResult<Json<FinalizeResponse>> {
    let data: FlowData = required(input.flow_data, "flowData")?;
    let brand = resolve_brand(&state, input.client).await?;

    let done = state
        .records
        .finalize_flow(
            FlowDraft {
                id: data.id,
                flow_name: data.flow_name,
                strategy: data.strategy,
                emails: data.emails,
            },
            brand.display_name(),
        )
        .await?;

    Ok(Json(FinalizeResponse {
        success: true,
        shareable_url: done.shareable_url,
        flow_id: done.flow.id,
    }))
}

/// GET /api/v1/flows/saved
///
/// Newest first. A missing store file lists as empty.
pub async fn list_saved(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Flow>>>> {
    let mut flows: Vec<Flow> = state
        .store
        .list(&of_kind(RecordKind::Flow))
        .await?
        .into_iter()
        .filter_map(StoredRecord::into_flow)
        .collect();
    flows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(DataResponse::new(flows)))
}

fn flow_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Flow",
        id: id.to_string(),
    })
}

/// GET /api/v1/flows/copy/{id}
///
/// Returns the stored flow itself, without an envelope.
pub async fn get_copy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Flow>> {
    let flow = state
        .store
        .get(&id)
        .await?
        .and_then(StoredRecord::into_flow)
        .ok_or_else(|| flow_not_found(&id))?;
    Ok(Json(flow))
}

/// PUT /api/v1/flows/copy/{id}
pub async fn update_copy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(edit): AppJson<FlowEdit>,
) -> AppResult<Json<DataResponse<Flow>>> {
    let flow = state.records.update_flow(&id, edit).await?;
    Ok(Json(DataResponse::new(flow)))
}
