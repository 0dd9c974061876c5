//! # Request Metrics
//!
//! In-process request counters using atomics. No exporter; the counters are
//! readable from [`ApiMetrics`] and logged at shutdown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Shared metrics state.
#[derive(Debug, Clone)]
pub struct ApiMetrics {
    request_count: Arc<AtomicU64>,
    client_error_count: Arc<AtomicU64>,
    server_error_count: Arc<AtomicU64>,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self {
            request_count: Arc::new(AtomicU64::new(0)),
            client_error_count: Arc::new(AtomicU64::new(0)),
            server_error_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Requests completed.
    pub fn requests(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Responses with a 4xx status.
    pub fn client_errors(&self) -> u64 {
        self.client_error_count.load(Ordering::Relaxed)
    }

    /// Responses with a 5xx status.
    pub fn server_errors(&self) -> u64 {
        self.server_error_count.load(Ordering::Relaxed)
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.request_count.fetch_add(1, Ordering::Relaxed);
        let status = response.status();
        if status.is_client_error() {
            m.client_error_count.fetch_add(1, Ordering::Relaxed);
        } else if status.is_server_error() {
            m.server_error_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn;
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn counts_requests_by_status_class() {
        let metrics = ApiMetrics::new();
        let app = Router::new()
            .route("/ok", get(|| async { StatusCode::OK }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/broken", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .layer(from_fn(metrics_middleware))
            .layer(Extension(metrics.clone()));

        for uri in ["/ok", "/missing", "/broken", "/ok"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            app.clone().oneshot(request).await.unwrap();
        }

        assert_eq!(metrics.requests(), 4);
        assert_eq!(metrics.client_errors(), 1);
        assert_eq!(metrics.server_errors(), 1);
    }
}
