//! FMCSA client error types.

/// Longest registry error body kept on [`FmcsaError::ApiError`], in bytes.
pub const MAX_ERROR_BODY: usize = 512;

/// Errors from FMCSA registry calls.
///
/// Transport errors are stored with their URL stripped, since the request
/// URL carries the web key.
#[derive(Debug, thiserror::Error)]
pub enum FmcsaError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The registry returned a non-2xx status other than 404.
    ///
    /// `body` is cut to [`MAX_ERROR_BODY`] bytes with the web key masked,
    /// and is left out of `Display` so logging the error never prints it.
    #[error("FMCSA {endpoint} returned {status}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The response body was not JSON.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl FmcsaError {
    /// Status code the registry answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn api_error(endpoint: String, status: u16, body: &str, web_key: &str) -> Self {
        let mut body = if web_key.is_empty() {
            body.to_string()
        } else {
            body.replace(web_key, "[REDACTED]")
        };
        if body.len() > MAX_ERROR_BODY {
            let mut end = MAX_ERROR_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
        }
        Self::ApiError {
            endpoint,
            status,
            body,
        }
    }

    pub(crate) fn http(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Http {
            endpoint: endpoint.to_string(),
            source: source.without_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_masks_key_and_hides_body_from_display() {
        let err = FmcsaError::api_error(
            "GET /qc/services/carriers/1".into(),
            500,
            "bad request to /carriers/1?webKey=s3cret",
            "s3cret",
        );
        assert_eq!(err.to_string(), "FMCSA GET /qc/services/carriers/1 returned 500");
        match err {
            FmcsaError::ApiError { body, .. } => {
                assert_eq!(body, "bad request to /carriers/1?webKey=[REDACTED]");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn api_error_caps_body_on_a_char_boundary() {
        let long = "é".repeat(MAX_ERROR_BODY);
        match FmcsaError::api_error("GET /".into(), 502, &long, "k") {
            FmcsaError::ApiError { body, .. } => {
                assert!(body.len() <= MAX_ERROR_BODY);
                assert!(body.len() >= MAX_ERROR_BODY - 1);
                assert!(body.chars().all(|c| c == 'é'));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
