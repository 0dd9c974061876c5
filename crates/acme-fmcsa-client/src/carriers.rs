//! Typed client for the QCMobile carrier lookup.
//!
//! ## Live API Path
//!
//! | Method | Path                                  | Operation             |
//! |--------|---------------------------------------|-----------------------|
//! | GET    | `/qc/services/carriers/{mcNumber}`    | Carrier by MC number  |
//!
//! Authentication is the `webKey` query parameter.
//!
//! The registry's response shape is loose: `content` has been observed as
//! an array of records, a single record, and `null`. Every field is
//! optional here and a shape that does not fit reads as an empty lookup.

use acme_core::McNumber;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::error::FmcsaError;

/// Path segments under the base URL.
const CARRIERS_PATH: [&str; 3] = ["qc", "services", "carriers"];

// ── Response types ───────────────────────────────────────────────────────────

/// Body of a carrier lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarrierLookup {
    #[serde(default)]
    content: Option<CarrierContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CarrierContent {
    Many(Vec<CarrierEntry>),
    One(CarrierEntry),
}

/// One element of `content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarrierEntry {
    #[serde(default)]
    pub carrier: Option<CarrierRecord>,
}

/// The registry's carrier record. Only the fields the broker reads are
/// modelled; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierRecord {
    #[serde(default)]
    pub carrier_operation: Option<CarrierOperation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierOperation {
    /// Operating status, e.g. `OUT-OF-SERVICE`.
    #[serde(default)]
    pub carrier_operation: Option<String>,
}

impl CarrierLookup {
    /// Interpret a parsed body, falling back to an empty lookup when the
    /// shape does not fit.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unexpected FMCSA carrier payload shape");
            Self::default()
        })
    }

    /// The first carrier record, if any.
    pub fn first(&self) -> Option<&CarrierRecord> {
        match self.content.as_ref()? {
            CarrierContent::Many(entries) => entries.first()?.carrier.as_ref(),
            CarrierContent::One(entry) => entry.carrier.as_ref(),
        }
    }

    /// Operating status of the first carrier record.
    pub fn operation_status(&self) -> Option<&str> {
        self.first()?
            .carrier_operation
            .as_ref()?
            .carrier_operation
            .as_deref()
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Client for the QCMobile carriers resource.
#[derive(Clone)]
pub struct CarrierClient {
    http: reqwest::Client,
    base_url: url::Url,
    web_key: Zeroizing<String>,
}

impl std::fmt::Debug for CarrierClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarrierClient")
            .field("base_url", &self.base_url)
            .field("web_key", &"[REDACTED]")
            .finish()
    }
}

impl CarrierClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, web_key: Zeroizing<String>) -> Self {
        Self {
            http,
            base_url,
            web_key,
        }
    }

    /// Look up a carrier by MC number.
    ///
    /// Calls `GET {base_url}/qc/services/carriers/{mc}?webKey={key}`.
    /// Returns `Ok(None)` when the registry answers 404.
    pub async fn get(&self, mc: &McNumber) -> Result<Option<CarrierLookup>, FmcsaError> {
        let endpoint = format!("GET /qc/services/carriers/{mc}");
        let url = self.lookup_url(mc)?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FmcsaError::http(&endpoint, e))?;

        let status = resp.status();
        tracing::debug!(mc_number = %mc, status = status.as_u16(), "FMCSA carrier lookup");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FmcsaError::api_error(
                endpoint,
                status.as_u16(),
                &body,
                self.web_key.as_str(),
            ));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FmcsaError::http(&endpoint, e))?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|source| FmcsaError::Deserialization {
                endpoint,
                source,
            })?;
        Ok(Some(CarrierLookup::from_value(value)))
    }

    /// Build the lookup URL. The MC number is percent-encoded as a single
    /// path segment.
    fn lookup_url(&self, mc: &McNumber) -> Result<url::Url, FmcsaError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                crate::config::ConfigError::CannotBeABase(self.base_url.to_string())
            })?
            .pop_if_empty()
            .extend(CARRIERS_PATH)
            .push(mc.as_str());
        url.query_pairs_mut()
            .append_pair("webKey", self.web_key.as_str());
        Ok(url)
    }
}
