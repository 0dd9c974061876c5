//! # Middleware
//!
//! - `metrics`: request and error counters.
//! - `tracing_layer`: per-request spans via `tower_http`.

pub mod metrics;
pub mod tracing_layer;
