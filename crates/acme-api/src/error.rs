//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps domain errors from acme-core and acme-fmcsa-client to HTTP status
//! codes. Every error response body has the shape `{"detail": "<message>"}`.
//! Internal error details are never exposed in responses.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use acme_core::{CatalogError, StorageError, ValidationError};
use acme_fmcsa_client::VerificationError;

/// Message returned for every 500.
pub const INTERNAL_DETAIL: &str = "An internal error occurred";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[schema(example = "No matching loads found")]
    pub detail: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body or query could not be parsed or failed validation (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid API key (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// An upstream dependency could not answer (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message.
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::ServiceUnavailable(msg) => msg,
            Self::Internal(_) => INTERNAL_DETAIL,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            detail: self.detail().to_string(),
        };
        let mut response = (self.status(), Json(body)).into_response();
        if matches!(&self, Self::Unauthorized(_)) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NoMatchingLoads => Self::NotFound(err.to_string()),
            CatalogError::Storage(inner) => inner.into(),
        }
    }
}

impl From<VerificationError> for AppError {
    fn from(err: VerificationError) -> Self {
        Self::ServiceUnavailable(err.detail())
    }
}

/// A blocking task panicked or was cancelled.
impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value, Response) {
        let response = err.into_response();
        let status = response.status();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json, Response::from_parts(parts, axum::body::Body::empty()))
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::ServiceUnavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn body_carries_detail_only() {
        let (status, json, _) = body_json(AppError::NotFound("No matching loads found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({"detail": "No matching loads found"}));
    }

    #[tokio::test]
    async fn internal_error_hides_message() {
        let (status, json, _) =
            body_json(AppError::Internal("disk on fire at /var/data".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], INTERNAL_DETAIL);
    }

    #[tokio::test]
    async fn unauthorized_sets_www_authenticate() {
        let (status, _, response) =
            body_json(AppError::Unauthorized("Invalid or missing API key".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    }

    #[test]
    fn catalog_errors_map_to_404_and_500() {
        let not_found: AppError = CatalogError::NoMatchingLoads.into();
        assert!(matches!(&not_found, AppError::NotFound(msg) if msg == "No matching loads found"));

        let corrupt = StorageError::Corrupt {
            path: "loads.json".into(),
            source: serde_json::from_str::<Vec<u8>>("{").unwrap_err(),
        };
        let internal: AppError = CatalogError::Storage(corrupt).into();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.detail(), INTERNAL_DETAIL);
    }

    #[test]
    fn validation_error_is_bad_request() {
        let err: AppError = ValidationError::EmptyMcNumber.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "mc_number must not be empty");
    }
}
