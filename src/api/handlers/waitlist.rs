//! Waitlist submission handler.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::app_state::AppState;
use crate::domain::{InsertWaitlistEntry, WaitlistEntry};
use crate::error::{ErrorResponse, WaitlistError};

/// `POST /api/waitlist` — Join the waitlist.
///
/// The body is taken as untyped JSON so that malformed payloads, schema
/// violations, and storage failures all produce the same response shape.
///
/// # Errors
///
/// Returns [`WaitlistError`] when the body is not JSON, fails validation,
/// or cannot be stored.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    tag = "Waitlist",
    summary = "Join the waitlist",
    description = "Validates a sign-up and stores it. The response carries the stored record including its generated `id` and `createdAt`. Any failure yields a generic 400.",
    request_body = InsertWaitlistEntry,
    responses(
        (status = 201, description = "Entry stored", body = WaitlistEntry),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
    )
)]
pub async fn submit_waitlist_entry(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, WaitlistError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "waitlist body rejected");
        WaitlistError::MalformedBody(rejection.body_text())
    })?;

    let created = state.waitlist_service.submit(&payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Waitlist routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/waitlist", post(submit_waitlist_entry))
}
