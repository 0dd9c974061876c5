//! # Carrier Verification
//!
//! `POST /carrier/verify` asks the FMCSA registry whether a carrier may be
//! offered loads.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use acme_core::{Eligibility, McNumber};

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_json;
use crate::state::AppState;

/// Carrier to verify.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarrierVerificationRequest {
    /// Motor-carrier number. Must not be blank.
    #[schema(value_type = String, example = "123456")]
    pub mc_number: McNumber,
}

/// Build the carriers router.
pub fn router() -> Router<AppState> {
    Router::new().route("/carrier/verify", post(verify_carrier))
}

/// POST /carrier/verify: Verify a carrier's eligibility.
#[utoipa::path(
    post,
    path = "/carrier/verify",
    request_body = CarrierVerificationRequest,
    responses(
        (status = 200, description = "Eligibility verdict, including unknown carriers", body = Eligibility),
        (status = 400, description = "Malformed body or blank MC number", body = ErrorBody),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 503, description = "FMCSA registry unavailable or unreachable", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Carriers"
)]
async fn verify_carrier(
    State(state): State<AppState>,
    body: Result<Json<CarrierVerificationRequest>, JsonRejection>,
) -> Result<Json<Eligibility>, AppError> {
    let req = extract_json(body)?;
    let verdict = state.verifier.verify(&req.mc_number).await?;
    Ok(Json(verdict))
}
