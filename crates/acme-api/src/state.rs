//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Configuration is read once in `main` ([`AppConfig::from_env`]) and moved
//! into [`AppState`]. Nothing reads the environment after startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use acme_core::{CallLogRecorder, LoadCatalog};
use acme_fmcsa_client::{CarrierVerifier, FmcsaClient, FmcsaConfig, FmcsaError};
use zeroize::Zeroizing;

use crate::middleware::metrics::ApiMetrics;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

// ── Configuration ────────────────────────────────────────────────────────────

/// Service configuration.
///
/// Custom `Debug` redacts the API key.
#[derive(Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    pub host: IpAddr,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Static bearer token required on protected routes.
    pub api_key: Zeroizing<String>,
    /// JSON array of loads.
    pub loads_path: PathBuf,
    /// JSON array of call logs.
    pub call_log_path: PathBuf,
    /// Registry client settings.
    pub fmcsa: FmcsaConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"[REDACTED]")
            .field("loads_path", &self.loads_path)
            .field("call_log_path", &self.call_log_path)
            .field("fmcsa", &self.fmcsa)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `API_KEY` (required, non-empty)
    /// - `FMCSA_API_KEY` (required, non-empty), plus the other `FMCSA_*`
    ///   settings read by [`FmcsaConfig::from_env`]
    /// - `HOST` (default: `0.0.0.0`)
    /// - `PORT` (default: 8000)
    /// - `LOADS_PATH` (default: `data/loads.json`)
    /// - `CALL_LOG_PATH` (default: `data/call_logs.json`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            host: env_parse("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: env_parse("PORT", DEFAULT_PORT)?,
            api_key: Zeroizing::new(api_key),
            loads_path: env_path("LOADS_PATH", "data/loads.json"),
            call_log_path: env_path("CALL_LOG_PATH", "data/call_logs.json"),
            fmcsa: FmcsaConfig::from_env()?,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable is required")]
    MissingApiKey,
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error(transparent)]
    Fmcsa(#[from] acme_fmcsa_client::ConfigError),
    #[error("failed to build FMCSA client: {0}")]
    Client(#[from] FmcsaError),
}

// ── Application State ────────────────────────────────────────────────────────

/// Shared application state. Cloning is cheap; every field is a handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: LoadCatalog,
    pub verifier: CarrierVerifier,
    pub recorder: CallLogRecorder,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Assemble state from already-built components.
    pub fn new(catalog: LoadCatalog, verifier: CarrierVerifier, recorder: CallLogRecorder) -> Self {
        Self {
            catalog,
            verifier,
            recorder,
            metrics: ApiMetrics::new(),
        }
    }

    /// Build file-backed state and the registry client from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let client = FmcsaClient::new(config.fmcsa.clone())?;
        Ok(Self::new(
            LoadCatalog::from_path(&config.loads_path),
            CarrierVerifier::new(client),
            CallLogRecorder::from_path(&config.call_log_path),
        ))
    }
}
