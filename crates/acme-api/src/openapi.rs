//! # OpenAPI Document
//!
//! Assembles the utoipa-documented routes into one OpenAPI document, served
//! unauthenticated at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Registers the bearer scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Static API key. Set via the API_KEY env var."))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acme Logistics Load Broker API",
        version = "1.0.0",
        description = "Load search, FMCSA carrier verification, and call logging for inbound carrier calls.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::general::root,
        crate::routes::loads::search_loads,
        crate::routes::carriers::verify_carrier,
        crate::routes::call_log::create_call_log,
    ),
    components(schemas(
        acme_core::Load,
        acme_core::CallLog,
        acme_core::Eligibility,
        crate::routes::carriers::CarrierVerificationRequest,
        crate::routes::MessageResponse,
        crate::error::ErrorBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "General", description = "Liveness"),
        (name = "Loads", description = "Search the load catalog"),
        (name = "Carriers", description = "Carrier eligibility via the FMCSA registry"),
        (name = "Reporting", description = "Call outcome logging"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/", "/loads", "/carrier/verify", "/call-log"] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }

    #[test]
    fn document_has_tags_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let tags: Vec<String> = doc
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(tags, ["General", "Loads", "Carriers", "Reporting"]);

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn document_serializes() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Acme Logistics Load Broker API");
        assert_eq!(json["info"]["version"], "1.0.0");
    }
}
