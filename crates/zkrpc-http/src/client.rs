//! HTTP JSON-RPC client backed by `reqwest`.
//!
//! One call is one POST. The client does not retry, rate limit or cache;
//! a failed call is reported to the caller as is.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::StatusCode;
use zkrpc_core::error::RpcError;
use zkrpc_core::request::{JsonRpcRequest, JsonRpcResponse};
use zkrpc_core::transport::RpcTransport;

use crate::network::Network;

/// Configuration for `HttpRpcClient`.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Upper bound on a whole call: connect, write, wait, read.
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Keep idle connections around for later calls. When `false` every
    /// call opens its own connection and releases it when done.
    pub reuse_connections: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            reuse_connections: false,
        }
    }
}

/// HTTP JSON-RPC client for a single endpoint.
pub struct HttpRpcClient {
    url: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Create a new client for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpClientConfig) -> Result<Self, RpcError> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout);
        if !config.reuse_connections {
            builder = builder.pool_max_idle_per_host(0);
        }
        let http = builder
            .build()
            .map_err(|e| RpcError::provider(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.into(),
            http,
            next_id: AtomicU64::new(1),
        })
    }

    /// Create with default configuration.
    pub fn default_for(url: impl Into<String>) -> Result<Self, RpcError> {
        Self::new(url, HttpClientConfig::default())
    }

    /// Create a client for a network preset.
    pub fn for_network(network: &Network, config: HttpClientConfig) -> Result<Self, RpcError> {
        Self::new(network.url(), config)
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, RpcError> {
        tracing::debug!(method = %req.method, id = %req.id, url = %self.url, "sending request");

        let resp = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(method = %req.method, error = %e, url = %self.url, "request failed");
                RpcError::provider(e.to_string())
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(
                method = %req.method,
                status = status.as_u16(),
                url = %self.url,
                "unexpected status code"
            );
            return Err(RpcError::unexpected_status(status.as_u16(), body));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| RpcError::provider(e.to_string()))?;

        serde_json::from_slice::<JsonRpcResponse>(&body)
            .map_err(|e| RpcError::malformed(req.method.as_str(), e))
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}
