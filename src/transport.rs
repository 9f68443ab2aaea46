//! HTTP transport used by the fetcher
//!
//! The fetcher only needs "GET this URL, give me status and body". Keeping
//! that behind a trait lets tests substitute canned upstream responses.

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Raw upstream reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET. Transport-level failures map to
    /// [`FetchError::NetworkFailure`]; any HTTP status is returned as-is.
    async fn get(&self, url: &str) -> Result<UpstreamResponse, FetchError>;
}

/// Strip the `appid` query value so keys never reach the logs
#[must_use]
pub fn redact_url(url: &str) -> String {
    match url.split_once("appid=") {
        Some((head, tail)) => {
            let rest = tail.find('&').map_or("", |idx| &tail[idx..]);
            format!("{head}appid=***{rest}")
        }
        None => url.to_string(),
    }
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("AirInsight/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        let start = Instant::now();
        let redacted = redact_url(url);
        debug!("GET {}", redacted);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", redacted, e);
            FetchError::network(format!("Request failed: {e}"))
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("Failed to read response body: {e}")))?;

        debug!(
            "HTTP {} from {} in {:.3}s",
            status,
            redacted,
            start.elapsed().as_secs_f64()
        );

        Ok(UpstreamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_url_middle() {
        assert_eq!(
            redact_url("https://x/weather?q=Delhi&appid=secret&units=metric"),
            "https://x/weather?q=Delhi&appid=***&units=metric"
        );
    }

    #[test]
    fn test_redact_url_last() {
        assert_eq!(
            redact_url("https://x/air_pollution?lat=1&lon=2&appid=secret"),
            "https://x/air_pollution?lat=1&lon=2&appid=***"
        );
    }

    #[test]
    fn test_redact_url_without_key() {
        assert_eq!(redact_url("https://x/health"), "https://x/health");
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(Duration::from_secs(10)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        // Port 9 on localhost is the discard service and is normally closed.
        let result = transport.get("http://127.0.0.1:9/weather").await;
        assert!(matches!(result, Err(FetchError::NetworkFailure { .. })));
    }
}
