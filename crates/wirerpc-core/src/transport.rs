//! The `HttpTransport` trait — the seam between the provider and the HTTP stack.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Headers attached to every outbound exchange.
pub const JSON_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// Raw result of a completed HTTP exchange: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns `true` if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the exchange itself did not complete.
///
/// The provider classifies every variant uniformly; the sub-causes exist for
/// logging, not for branching.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established (refused, reset, DNS, TLS).
    #[error("connection error: {0}")]
    Connection(String),

    /// The exchange exceeded the transport's deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The transport produced no usable response for any other reason.
    #[error("transport error: {0}")]
    Other(String),
}

/// The async trait every HTTP transport must implement.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn HttpTransport>`.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    /// POST `body` to `url` with the [`JSON_HEADERS`] attached and return the
    /// raw exchange.
    ///
    /// A completed exchange returns `Ok` whatever the status code, 2xx or
    /// not; `Err` means the exchange itself failed and no response exists.
    async fn post(&self, url: &Url, body: Vec<u8>) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn success_range_boundaries() {
        assert!(!RawResponse::new(199, vec![]).is_success());
        assert!(RawResponse::new(200, vec![]).is_success());
        assert!(RawResponse::new(299, vec![]).is_success());
        assert!(!RawResponse::new(300, vec![]).is_success());
        assert!(!RawResponse::new(500, vec![]).is_success());
    }

    #[test]
    fn error_display() {
        let err = TransportError::Connection("connection refused".into());
        assert_eq!(err.to_string(), "connection error: connection refused");
        let err = TransportError::Timeout("deadline elapsed".into());
        assert_eq!(err.to_string(), "request timed out: deadline elapsed");
    }

    struct EmptyTransport;

    #[async_trait]
    impl HttpTransport for EmptyTransport {
        async fn post(&self, _url: &Url, _body: Vec<u8>) -> Result<RawResponse, TransportError> {
            Ok(RawResponse::new(204, vec![]))
        }
    }

    #[tokio::test]
    async fn trait_is_object_safe() {
        let transport: Arc<dyn HttpTransport> = Arc::new(EmptyTransport);
        let url = Url::parse("https://rpc.example/").unwrap();
        let raw = transport.post(&url, b"{}".to_vec()).await.unwrap();
        assert!(raw.is_success());
        assert!(raw.body.is_empty());
    }
}
