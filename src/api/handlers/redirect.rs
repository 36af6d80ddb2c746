//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the mapping store
/// 2. Spawn the visit counter increment (fire-and-forget)
/// 3. Return 301 Moved Permanently
///
/// The increment runs on its own task and its outcome never changes the
/// response. When the lookup fails, no increment is attempted.
///
/// # Errors
///
/// - 400 if the path segment is not valid UTF-8
/// - 404 `{"error":"short not found on database"}` if the code is unknown
/// - 500 `{"error":"cannot connect to DB"}` if the store fails
pub async fn redirect_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = code?;
    let original_url = state.resolver.resolve(&code).await?;

    let location = HeaderValue::try_from(original_url.as_str())
        .map_err(|_| AppError::internal(format!("Stored URL for {} is not a valid header", code)))?;

    let resolver = state.resolver.clone();
    tokio::spawn(async move {
        resolver.record_visit().await;
    });

    debug!("Redirecting {} -> {}", code, original_url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
