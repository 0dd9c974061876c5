//! Carrier eligibility check against the registry.
//!
//! | Registry answer                        | Result                                   |
//! |----------------------------------------|------------------------------------------|
//! | 2xx, status `OUT-OF-SERVICE`           | `Ok`, not eligible                       |
//! | 2xx, any other or missing status       | `Ok`, eligible                           |
//! | 404                                    | `Ok`, not eligible, "Carrier not found"  |
//! | other status                           | [`VerificationError::RegistryUnavailable`] |
//! | transport failure or non-JSON body     | [`VerificationError::ConnectionFailed`]  |
//!
//! One request per check. No retries.

use acme_core::{Eligibility, McNumber};

use crate::error::FmcsaError;
use crate::FmcsaClient;

/// Failure to reach a verdict.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    /// The registry answered with an unexpected status.
    #[error("FMCSA API service is currently unavailable")]
    RegistryUnavailable {
        status: u16,
        #[source]
        source: FmcsaError,
    },
    /// The registry could not be reached or answered with garbage.
    #[error("Could not connect to the FMCSA API")]
    ConnectionFailed(#[source] FmcsaError),
}

impl VerificationError {
    /// Client-facing message.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl From<FmcsaError> for VerificationError {
    fn from(err: FmcsaError) -> Self {
        match err.status() {
            Some(status) => Self::RegistryUnavailable {
                status,
                source: err,
            },
            None => Self::ConnectionFailed(err),
        }
    }
}

/// Maps registry lookups to an [`Eligibility`] verdict.
#[derive(Debug, Clone)]
pub struct CarrierVerifier {
    client: FmcsaClient,
}

impl CarrierVerifier {
    pub fn new(client: FmcsaClient) -> Self {
        Self { client }
    }

    /// Check whether the carrier behind `mc` may be offered loads.
    pub async fn verify(&self, mc: &McNumber) -> Result<Eligibility, VerificationError> {
        let lookup = self.client.carriers().get(mc).await.map_err(|err| {
            tracing::warn!(mc_number = %mc, error = %err, "FMCSA carrier lookup failed");
            VerificationError::from(err)
        })?;

        let verdict = match lookup {
            None => Eligibility::not_found(),
            Some(lookup) => Eligibility::from_operation_status(lookup.operation_status()),
        };
        tracing::info!(mc_number = %mc, eligible = verdict.eligible, "carrier verified");
        Ok(verdict)
    }
}
