//! HTTP utilities for PokeAPI REST calls

use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for PokeAPI calls
#[derive(Debug, Clone)]
pub struct PokeHttpClient {
    client: Client,
}

impl PokeHttpClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request and parse the body as JSON
    ///
    /// Anything other than `200 OK` is an error carrying the status and URL.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::error!(
                "Expected status code 200 but received {} - {}",
                status,
                sanitize_for_log(&body)
            );
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_short_body_unchanged() {
        assert_eq!(sanitize_for_log("Not Found"), "Not Found");
    }

    #[test]
    fn test_sanitize_truncates_and_strips() {
        let body = format!("{}\n\t{}", "a".repeat(150), "b".repeat(150));
        let clean = sanitize_for_log(&body);

        assert!(clean.contains("[truncated, 302 bytes total]"));
        assert!(!clean.contains('\n'));
        assert!(!clean.contains('\t'));
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(150);
        let clean = sanitize_for_log(&body);
        assert!(clean.contains("truncated"));
    }
}
