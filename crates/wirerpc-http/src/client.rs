//! The HTTP JSON-RPC provider — encode, dispatch, classify, decode.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use wirerpc_core::outcome::Outcome;
use wirerpc_core::request::{RpcRequest, RpcResponse};
use wirerpc_core::transport::HttpTransport;

use crate::transport::{ReqwestTransport, TransportConfig};

/// JSON-RPC provider that POSTs requests to a single HTTP endpoint.
///
/// The endpoint string and transport handle are fixed at construction and
/// shared read-only across all in-flight calls, so the provider is cheap to
/// clone and needs no locking. Any number of calls may be in flight at once;
/// no ordering is guaranteed between them.
#[derive(Clone)]
pub struct HttpProvider {
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
}

impl HttpProvider {
    /// Create a provider for `endpoint` with the default `reqwest` transport.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_transport(endpoint, Arc::new(ReqwestTransport::default()))
    }

    /// Create a provider with a custom default-transport configuration.
    pub fn with_config(endpoint: impl Into<String>, config: TransportConfig) -> Self {
        Self::with_transport(endpoint, Arc::new(ReqwestTransport::new(config)))
    }

    /// Create a provider with an injected transport.
    pub fn with_transport(endpoint: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    /// The configured endpoint URL string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the full pipeline for one request and return its terminal outcome.
    ///
    /// Exactly one [`Outcome`] is produced per call; a failure at any stage
    /// short-circuits the remainder. Pre-flight failures (unserializable
    /// params, malformed endpoint) never reach the network.
    pub async fn request<P, R>(&self, request: RpcRequest<P>) -> Outcome<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let body = match serde_json::to_vec(&request) {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(method = %request.method, %error, "request serialization failed");
                return Outcome::RequestFailed;
            }
        };

        let url = match Url::parse(&self.endpoint) {
            Ok(url) => url,
            Err(error) => {
                tracing::warn!(endpoint = %self.endpoint, %error, "endpoint is not a valid URL");
                return Outcome::RequestFailed;
            }
        };

        tracing::debug!(method = %request.method, id = %request.id, url = %url, "dispatching request");

        let raw = match self.transport.post(&url, body).await {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(method = %request.method, %error, "transport failure");
                return Outcome::ServerError;
            }
        };

        // Non-typical RPC error responses are considered a server error.
        if !raw.is_success() {
            tracing::warn!(method = %request.method, status = raw.status, "non-2xx response");
            return Outcome::ServerError;
        }

        match serde_json::from_slice::<RpcResponse<R>>(&raw.body) {
            Ok(response) => Outcome::Ok(response),
            Err(error) => {
                tracing::warn!(method = %request.method, %error, "response body did not decode");
                Outcome::ServerError
            }
        }
    }

    /// Submit a request and deliver its terminal outcome to `completion`.
    ///
    /// Returns as soon as the pipeline has been spawned onto the Tokio worker
    /// pool; encoding, transport and decoding all run off the caller's
    /// thread. `completion` is invoked exactly once, on whichever terminal
    /// path the call takes. Must be called from within a Tokio runtime.
    pub fn send<P, R, F>(&self, request: RpcRequest<P>, completion: F)
    where
        P: Serialize + Send + 'static,
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(Outcome<R>) + Send + 'static,
    {
        let provider = self.clone();
        tokio::spawn(async move {
            completion(provider.request(request).await);
        });
    }
}
