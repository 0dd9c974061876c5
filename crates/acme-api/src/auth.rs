//! # Authentication Middleware
//!
//! Every protected route requires `Authorization: Bearer <API_KEY>`. The
//! key is compared in constant time. Failures answer 401 with
//! `{"detail": "Invalid or missing API key"}` and a `WWW-Authenticate`
//! challenge, whatever the reason. The reason is only logged.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::AppError;

/// Client-facing message for every authentication failure.
pub const UNAUTHORIZED_DETAIL: &str = "Invalid or missing API key";

// ── Auth Configuration ──────────────────────────────────────────────────────

/// Auth configuration injected into request extensions.
///
/// Custom `Debug` redacts the key value to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AuthConfig {
    pub api_key: Zeroizing<String>,
}

impl AuthConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Zeroizing::new(api_key.into()),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// ── Token Validation ────────────────────────────────────────────────────────

/// Constant-time comparison of bearer tokens.
///
/// When lengths differ, performs a dummy comparison so timing does not
/// depend on whether the lengths matched.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

// ── Middleware ───────────────────────────────────────────────────────────────

/// Reject the request unless it carries the configured bearer token.
///
/// Runs before any extractor on the route, so a bad payload on an
/// unauthenticated request still yields 401.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let Some(config) = request.extensions().get::<AuthConfig>().cloned() else {
        // A router without AuthConfig is a wiring bug; fail closed.
        return AppError::Internal("auth middleware installed without AuthConfig".into())
            .into_response();
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth_header {
        Some(header_value) => match header_value.strip_prefix("Bearer ") {
            Some(provided) if constant_time_token_eq(provided, &config.api_key) => {
                next.run(request).await
            }
            Some(_) => {
                tracing::warn!("authentication failed: invalid bearer token");
                unauthorized_response()
            }
            None => {
                tracing::warn!("authentication failed: non-Bearer authorization scheme");
                unauthorized_response()
            }
        },
        None => {
            tracing::warn!("authentication failed: missing authorization header");
            unauthorized_response()
        }
    }
}

fn unauthorized_response() -> Response {
    AppError::Unauthorized(UNAUTHORIZED_DETAIL.to_string()).into_response()
}
