//! # Call Logging
//!
//! `POST /call-log` appends the outcome of a carrier call to the log.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use acme_core::CallLog;

use super::MessageResponse;
use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_validated_json;
use crate::state::AppState;

pub const SAVED_MESSAGE: &str = "Call log saved successfully";

/// Build the call-log router.
pub fn router() -> Router<AppState> {
    Router::new().route("/call-log", post(create_call_log))
}

/// POST /call-log: Record the outcome of a call.
#[utoipa::path(
    post,
    path = "/call-log",
    request_body = CallLog,
    responses(
        (status = 201, description = "Call log saved", body = MessageResponse),
        (status = 400, description = "Malformed or invalid call log", body = ErrorBody),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 500, description = "Call log could not be written", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Reporting"
)]
async fn create_call_log(
    State(state): State<AppState>,
    body: Result<Json<CallLog>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let log = extract_validated_json(body)?;
    if !log.has_known_outcome() || !log.has_known_sentiment() {
        tracing::warn!(
            outcome = %log.outcome,
            sentiment = %log.sentiment,
            "call log uses an undocumented outcome or sentiment"
        );
    }
    tracing::info!(mc_number = %log.mc_number, outcome = %log.outcome, "recording call");

    let recorder = state.recorder.clone();
    tokio::task::spawn_blocking(move || recorder.append(log)).await??;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(SAVED_MESSAGE))))
}
