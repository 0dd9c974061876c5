//! # Load Search
//!
//! `GET /loads` filters the catalog by origin, destination and equipment
//! type. The catalog is file-backed, so the search runs on a blocking
//! thread.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use acme_core::{Load, LoadQuery};

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_query;
use crate::state::AppState;

/// Build the loads router.
pub fn router() -> Router<AppState> {
    Router::new().route("/loads", get(search_loads))
}

/// GET /loads: Search for available loads.
#[utoipa::path(
    get,
    path = "/loads",
    params(
        ("origin" = Option<String>, Query, description = "Case-insensitive substring of the origin"),
        ("destination" = Option<String>, Query, description = "Case-insensitive substring of the destination"),
        ("equipment_type" = Option<String>, Query, description = "Case-insensitive exact equipment type"),
    ),
    responses(
        (status = 200, description = "Matching loads in catalog order", body = Vec<Load>),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 404, description = "No matching loads found", body = ErrorBody),
        (status = 500, description = "Catalog unreadable", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Loads"
)]
async fn search_loads(
    State(state): State<AppState>,
    query: Result<Query<LoadQuery>, QueryRejection>,
) -> Result<Json<Vec<Load>>, AppError> {
    let query = extract_query(query)?;
    let catalog = state.catalog.clone();
    let loads = tokio::task::spawn_blocking(move || catalog.search(&query)).await??;
    tracing::debug!(matches = loads.len(), "load search");
    Ok(Json(loads))
}
