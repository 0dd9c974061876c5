//! Acme Logistics load broker API server.
//!
//! Reads configuration from the environment (seeded from `.env` when
//! present), then serves until Ctrl-C.

use acme_api::auth::AuthConfig;
use acme_api::state::{AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real deployments set the environment.
    let dotenv = dotenvy::dotenv();

    init_tracing();

    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded settings file");
    }

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration failed: {e}");
        e
    })?;

    let state = AppState::from_config(&config).map_err(|e| {
        tracing::error!("Startup failed: {e}");
        e
    })?;
    let metrics = state.metrics.clone();

    let app = acme_api::app(state, AuthConfig::new(config.api_key.as_str()));

    let addr = config.bind_addr();
    tracing::info!(
        %addr,
        loads_path = %config.loads_path.display(),
        call_log_path = %config.call_log_path.display(),
        fmcsa_base_url = %config.fmcsa.base_url,
        "Acme Logistics API listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(
        requests = metrics.requests(),
        client_errors = metrics.client_errors(),
        server_errors = metrics.server_errors(),
        "Acme Logistics API stopped"
    );
    Ok(())
}

/// `RUST_LOG` filter (default `info`); `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
