//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request bodies and helpers that
//! turn extractor rejections into [`AppError::BadRequest`], so malformed
//! input answers with the usual `{"detail": ...}` body.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;

use acme_core::{CallLog, ValidationError};

use crate::error::AppError;

/// Request types with business rules beyond what serde checks.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for CallLog {
    fn validate(&self) -> Result<(), ValidationError> {
        CallLog::validate(self)
    }
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}

/// Extract query parameters, mapping rejections to [`AppError::BadRequest`].
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(final_rate: Option<f64>) -> CallLog {
        CallLog {
            mc_number: "123456".into(),
            load_id: None,
            outcome: "Booked".into(),
            sentiment: "Positive".into(),
            negotiation_rounds: 1,
            final_rate,
            call_duration_seconds: 60,
        }
    }

    #[test]
    fn validated_json_passes_good_input() {
        let value = extract_validated_json(Ok(Json(log(Some(1200.0))))).unwrap();
        assert_eq!(value.final_rate, Some(1200.0));
    }

    #[test]
    fn validated_json_rejects_negative_rate() {
        let err = extract_validated_json(Ok(Json(log(Some(-1.0))))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("final_rate")));
    }
}
