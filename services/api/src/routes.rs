use crate::infra::{AppState, DirectoryState, FetchState};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use staff_registry::error::AppError;
use staff_registry::workforce::{employee_router, merge_into, write_registry, SharedRegistry, SyncOutcome};
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FetchRequest {
    #[serde(default)]
    pub(crate) url: Option<String>,
}

impl FetchRequest {
    /// An empty body asks for the configured directory; anything else must be
    /// a well-formed request object.
    pub(crate) fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|err| AppError::InvalidRequest(err.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct FetchResponse {
    pub(crate) source_url: String,
    pub(crate) fetched_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) outcome: SyncOutcome,
    pub(crate) headcount: usize,
}

pub(crate) fn with_service_routes(registry: SharedRegistry, directory: DirectoryState) -> Router {
    let fetch_routes = Router::new()
        .route("/api/v1/employees/fetch", post(fetch_endpoint))
        .with_state(FetchState {
            registry: registry.clone(),
            directory,
        });

    employee_router(registry)
        .merge(fetch_routes)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// The registry lock is taken only after the remote call completes.
pub(crate) async fn fetch_endpoint(
    State(state): State<FetchState>,
    body: Bytes,
) -> Result<Json<FetchResponse>, AppError> {
    let request = FetchRequest::from_body(&body)?;
    let url = state.directory.resolve_url(request.url)?;

    let employees = match state.directory.client.fetch_employees(&url).await {
        Ok(employees) => employees,
        Err(err) => {
            warn!(%url, error = %err, "directory fetch failed");
            return Err(err.into());
        }
    };

    let (outcome, headcount) = {
        let mut registry = write_registry(&state.registry)?;
        let outcome = merge_into(&mut registry, employees);
        (outcome, registry.len())
    };
    info!(%url, added = outcome.added, duplicates = outcome.duplicates, "directory sync merged");

    Ok(Json(FetchResponse {
        source_url: url,
        fetched_at: Utc::now(),
        outcome,
        headcount,
    }))
}
