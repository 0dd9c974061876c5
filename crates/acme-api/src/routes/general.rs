//! # General Endpoints
//!
//! Unauthenticated liveness check.

use axum::routing::get;
use axum::{Json, Router};

use super::MessageResponse;
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Acme Logistics API";

/// Build the general router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// GET /: Confirm the API is running.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = MessageResponse),
    ),
    tag = "General"
)]
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
