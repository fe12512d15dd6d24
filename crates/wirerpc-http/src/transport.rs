//! Default transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use wirerpc_core::transport::{HttpTransport, RawResponse, TransportError, JSON_HEADERS};

/// Configuration for the default transport.
///
/// These knobs configure the underlying HTTP client only; the provider
/// itself exposes no per-call timeout or cancellation surface.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Deadline applied by the client to the whole exchange.
    pub request_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// `reqwest`-backed transport. Always POSTs with the fixed JSON headers.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with its own connection pool.
    pub fn new(config: TransportConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build reqwest client");
        Self { http }
    }

    /// Wrap an existing `reqwest::Client` (shares its pool and policy).
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, url: &Url, body: Vec<u8>) -> Result<RawResponse, TransportError> {
        let mut req = self.http.post(url.clone()).body(body);
        for (name, value) in JSON_HEADERS {
            req = req.header(*name, *value);
        }

        let resp = req.send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(classify)?.to_vec();

        Ok(RawResponse::new(status, body))
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        assert_eq!(
            TransportConfig::default().request_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn builds_with_default_config() {
        let _transport = ReqwestTransport::default();
    }
}
