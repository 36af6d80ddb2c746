//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with a check per logical store.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Both partitions reachable
/// - **503 Service Unavailable**: One or both partitions unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mapping_store": { "status": "ok", "message": "Mapping store reachable" },
///     "counter_store": { "status": "ok", "message": "Counter store reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let health = state.store.ping().await;

    let response = HealthResponse {
        status: if health.is_healthy() { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mapping_store: CheckStatus::from_reachable(health.mapping, "Mapping store"),
            counter_store: CheckStatus::from_reachable(health.counter, "Counter store"),
        },
    };

    if health.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
