//! Handler for the shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenCommand;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/very/long/path",
///   "short": "4fg",   // optional custom code
///   "expiry": 24      // optional, hours
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com/very/long/path",
///   "short": "http://localhost:3000/4fg",
///   "code": "4fg",
///   "expiry": 24
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for an unreadable body (bad JSON, missing field, wrong
///   content type) or a malformed URL, custom code, or expiry
/// - 409 Conflict if the custom code is taken
/// - 500 `{"error":"cannot connect to DB"}` if the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state
        .shortener
        .shorten(ShortenCommand {
            url: payload.url,
            custom_code: payload.short,
            expiry_hours: payload.expiry,
        })
        .await?;

    let short_url = state.shortener.short_url(&mapping.code);

    Ok(Json(ShortenResponse::new(mapping, short_url)))
}
