//! Handler for the health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports liveness of the service and its two dependencies.
///
/// # Endpoint
///
/// `GET /health`
///
/// Probes Postgres with a trivial query and Redis with a PING (the cache
/// probe always passes when caching is disabled, since `NullCache` is then
/// the configured backend). Responds **200 OK** with status `"healthy"` when
/// both pass, otherwise **503 Service Unavailable** with status `"degraded"`
/// and the failing component named in `checks`.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "cache": { "status": "ok", "message": "Cache reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = probe_database(&state).await;
    let cache = probe_cache(&state).await;
    let all_healthy = database.is_ok() && cache.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, cache },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn probe_database(state: &AppState) -> CheckStatus {
    if state.store.health_check().await {
        CheckStatus::ok("Connected")
    } else {
        CheckStatus::failing("Database unreachable")
    }
}

async fn probe_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Cache reachable")
    } else {
        CheckStatus::failing("Cache connection failed")
    }
}
