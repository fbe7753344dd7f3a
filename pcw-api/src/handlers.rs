//! Request validation and the outcome-to-response mapping.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pcw_core::{Catalog, LookupOutcome, LookupRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted on lookup routes.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Accepted for compatibility with the provider's surface; only JSON is
    /// served, so the value is ignored.
    #[serde(default)]
    pub format: Option<String>,
}

/// GET /pcw/:api_key/address/ie/:fragment
pub async fn lookup_eircode(
    State(state): State<Arc<AppState>>,
    Path(params): Path<(String, String)>,
    Query(query): Query<LookupQuery>,
) -> Response {
    handle_lookup(state, params, query, Catalog::Eircode).await
}

/// GET /pcw/:api_key/address/uk/:fragment
pub async fn lookup_premise(
    State(state): State<Arc<AppState>>,
    Path(params): Path<(String, String)>,
    Query(query): Query<LookupQuery>,
) -> Response {
    handle_lookup(state, params, query, Catalog::Premise).await
}

/// Validates the raw path parameters, runs the pipeline, writes the outcome.
///
/// A blank `api_key` or `fragment` short-circuits to a 400 before any cache
/// or upstream activity.
async fn handle_lookup(
    state: Arc<AppState>,
    (api_key, fragment): (String, String),
    query: LookupQuery,
    catalog: Catalog,
) -> Response {
    if let Some(format) = query.format.as_deref() {
        if !format.eq_ignore_ascii_case("json") {
            debug!(format, "unsupported format requested, serving json");
        }
    }

    let request = match LookupRequest::new(catalog, fragment.trim(), api_key.trim()) {
        Ok(request) => request,
        Err(e) => {
            debug!(%catalog, error = %e, "rejected request");
            return ApiError::bad_request().into_response();
        }
    };

    let outcome = state.lookup.lookup(&request).await;
    write_outcome(outcome)
}

/// Maps a terminal outcome to the transport response.
///
/// - `Hit`/`Fetched`: 200 with the payload verbatim
/// - `UpstreamError`: upstream's exact status and body (or the synthesized
///   500 when upstream was unreachable)
/// - `CacheError`: 500 with the service's own error body
fn write_outcome(outcome: LookupOutcome) -> Response {
    match outcome {
        LookupOutcome::Hit(payload) | LookupOutcome::Fetched(payload) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            payload,
        )
            .into_response(),
        LookupOutcome::UpstreamError { status, body } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        LookupOutcome::CacheError(_) => ApiError::internal().into_response(),
    }
}

/// Health check body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
