//! # acme-api -- HTTP Service for the Acme Logistics Load Broker
//!
//! Exposes the broker's three operations over HTTP:
//!
//! | Method | Path              | Auth | Purpose                         |
//! |--------|-------------------|------|---------------------------------|
//! | GET    | `/`               | no   | Liveness message                |
//! | GET    | `/openapi.json`   | no   | OpenAPI document                |
//! | GET    | `/loads`          | yes  | Search the load catalog         |
//! | POST   | `/carrier/verify` | yes  | FMCSA carrier eligibility       |
//! | POST   | `/call-log`       | yes  | Record a call outcome           |
//!
//! ## Middleware Order
//!
//! Protected routes run `auth_middleware` before any extractor, so a
//! request without a valid key gets 401 whatever its payload. Metrics and
//! tracing wrap every route, protected or not.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::{Extension, Router};

use crate::auth::AuthConfig;
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState, auth_config: AuthConfig) -> Router {
    let metrics = state.metrics.clone();

    let protected = Router::new()
        .merge(routes::loads::router())
        .merge(routes::carriers::router())
        .merge(routes::call_log::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(Extension(auth_config));

    let public = Router::new()
        .merge(routes::general::router())
        .merge(openapi::router());

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(Extension(metrics))
}
