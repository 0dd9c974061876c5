//! FMCSA registry client configuration.
//!
//! Defaults point at the public QCMobile service. Override via environment
//! variables or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Default QCMobile host.
pub const DEFAULT_BASE_URL: &str = "https://mobile.fmcsa.dot.gov";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the FMCSA registry.
///
/// Custom `Debug` implementation redacts the `web_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct FmcsaConfig {
    /// Registry base URL. Default: <https://mobile.fmcsa.dot.gov>
    pub base_url: Url,
    /// QCMobile web key, sent as the `webKey` query parameter.
    /// Zeroed on drop.
    pub web_key: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for FmcsaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmcsaConfig")
            .field("base_url", &self.base_url)
            .field("web_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl FmcsaConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FMCSA_API_KEY` (required, non-empty)
    /// - `FMCSA_BASE_URL` (default: `https://mobile.fmcsa.dot.gov`)
    /// - `FMCSA_TIMEOUT_SECS` (default: 10, must be a positive integer)
    pub fn from_env() -> Result<Self, ConfigError> {
        let web_key = std::env::var("FMCSA_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingWebKey)?;

        Ok(Self {
            base_url: env_url("FMCSA_BASE_URL", DEFAULT_BASE_URL)?,
            web_key: Zeroizing::new(web_key),
            timeout_secs: env_timeout("FMCSA_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed.
    pub fn local_mock(port: u16, web_key: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&format!("http://127.0.0.1:{port}"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            web_key: Zeroizing::new(web_key.to_string()),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_timeout(var: &str, default: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(var.to_string(), raw)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FMCSA_API_KEY environment variable is required")]
    MissingWebKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid value for {0}: {1:?} is not a positive number of seconds")]
    InvalidTimeout(String, String),
    #[error("{0} cannot carry path segments")]
    CannotBeABase(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = FmcsaConfig::local_mock(9000, "test-key").unwrap();
        assert_eq!(cfg.web_key.as_str(), "test-key");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn debug_redacts_web_key() {
        let cfg = FmcsaConfig::local_mock(9000, "super-secret-key").unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("ACME_NONEXISTENT_VAR_12345", DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.as_str(), "https://mobile.fmcsa.dot.gov/");
    }

    #[test]
    fn env_timeout_uses_default_when_absent() {
        assert_eq!(env_timeout("ACME_NONEXISTENT_TIMEOUT_12345", 10).unwrap(), 10);
    }

    #[test]
    fn env_timeout_rejects_garbage_and_zero() {
        for (var, raw) in [("ACME_TEST_TIMEOUT_WORDS", "ten"), ("ACME_TEST_TIMEOUT_ZERO", "0")] {
            std::env::set_var(var, raw);
            let result = env_timeout(var, 10);
            std::env::remove_var(var);
            assert!(
                matches!(result, Err(ConfigError::InvalidTimeout(ref v, _)) if v == var),
                "{raw}: {result:?}"
            );
        }
    }

    #[test]
    fn env_timeout_accepts_positive_seconds() {
        std::env::set_var("ACME_TEST_TIMEOUT_OK", " 30 ");
        let result = env_timeout("ACME_TEST_TIMEOUT_OK", 10);
        std::env::remove_var("ACME_TEST_TIMEOUT_OK");
        assert_eq!(result.unwrap(), 30);
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        std::env::set_var("ACME_TEST_BAD_FMCSA_URL", "not a url");
        let result = env_url("ACME_TEST_BAD_FMCSA_URL", DEFAULT_BASE_URL);
        std::env::remove_var("ACME_TEST_BAD_FMCSA_URL");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(var, _)) if var == "ACME_TEST_BAD_FMCSA_URL"));
    }
}
