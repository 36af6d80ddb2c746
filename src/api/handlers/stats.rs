//! Handler for the visit counter endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::CounterResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the global visit counter.
///
/// # Endpoint
///
/// `GET /api/v1/stats`
///
/// # Response
///
/// ```json
/// { "counter": "counter", "visits": 42 }
/// ```
///
/// # Errors
///
/// Returns 500 `{"error":"cannot connect to DB"}` if the counter store fails.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<CounterResponse>, AppError> {
    let counter = state.config.counter_key.clone();
    let visits = state.counter.current(&counter).await?;

    Ok(Json(CounterResponse { counter, visits }))
}
