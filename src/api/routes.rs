//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes.
///
/// # Endpoints
///
/// - `POST /api/v1`        - Create a short URL
/// - `GET  /api/v1/stats`  - Global visit counter
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1", post(shorten_handler))
        .route("/api/v1/stats", get(stats_handler))
}
