//! # acme-fmcsa-client -- Typed Rust client for the FMCSA carrier registry
//!
//! Provides typed access to the FMCSA QCMobile carrier lookup and the
//! eligibility check the broker runs before offering a load:
//!
//! - [`carriers::CarrierClient`] issues the lookup and decodes the loose
//!   response shape.
//! - [`verify::CarrierVerifier`] turns a lookup into an
//!   [`Eligibility`](acme_core::Eligibility) verdict.
//!
//! ## Architecture
//!
//! This crate is the only path by which the broker talks to the registry.
//! The web key travels in the query string, so it is held in
//! [`zeroize::Zeroizing`] storage, redacted from every `Debug` output, and
//! stripped from transport errors before they are logged.

pub mod carriers;
pub mod config;
pub mod error;
pub mod verify;

pub use config::{ConfigError, FmcsaConfig};
pub use error::FmcsaError;
pub use verify::{CarrierVerifier, VerificationError};

use std::time::Duration;

/// Top-level FMCSA client. Holds the sub-client for each resource.
#[derive(Debug, Clone)]
pub struct FmcsaClient {
    carriers: carriers::CarrierClient,
}

impl FmcsaClient {
    /// Create a new registry client from configuration.
    ///
    /// Fails when the base URL cannot carry the lookup path, so a bad
    /// `FMCSA_BASE_URL` stops startup instead of failing every request.
    pub fn new(config: FmcsaConfig) -> Result<Self, FmcsaError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(config.base_url.to_string()).into());
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FmcsaError::http("client_init", e))?;

        Ok(Self {
            carriers: carriers::CarrierClient::new(http, config.base_url, config.web_key),
        })
    }

    /// Access the carriers client.
    pub fn carriers(&self) -> &carriers::CarrierClient {
        &self.carriers
    }
}
