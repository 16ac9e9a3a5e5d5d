//! The `RpcTransport` trait — the seam between the provider and the wire.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// The async trait every RPC transport must implement.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send a single JSON-RPC request and return the parsed envelope.
    ///
    /// Exactly one round trip. Transport-level failures (non-200 status,
    /// connection errors) are reported as [`RpcError::Provider`].
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, RpcError>;

    /// Return the transport's endpoint.
    fn url(&self) -> &str;

    /// Identifier for the next request. Uniqueness is not required by the
    /// network; the default is a constant.
    fn next_id(&self) -> u64 {
        1
    }

    /// Call `method` with positional `params` and return the raw result.
    ///
    /// An `error` object in the response becomes [`RpcError::Response`];
    /// an envelope without `result` becomes [`RpcError::Malformed`].
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let req = JsonRpcRequest::new(self.next_id(), method, params);
        let resp = self.send(req).await?;
        let result = resp.into_result(method);
        if let Err(e) = &result {
            tracing::debug!(method, error = %e, url = %self.url(), "rpc call rejected");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RpcId;
    use serde_json::json;
    use std::sync::Mutex;

    struct EchoTransport {
        seen: Mutex<Vec<JsonRpcRequest>>,
        reject: bool,
    }

    #[async_trait]
    impl RpcTransport for EchoTransport {
        async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, RpcError> {
            let id = req.id.clone();
            let method = req.method.clone();
            self.seen.lock().unwrap().push(req);
            if self.reject {
                Ok(JsonRpcResponse::failure(id, "unknown method"))
            } else {
                Ok(JsonRpcResponse::success(id, json!({ "method": method })))
            }
        }

        fn url(&self) -> &str {
            "mock://echo"
        }
    }

    fn echo(reject: bool) -> EchoTransport {
        EchoTransport {
            seen: Mutex::new(vec![]),
            reject,
        }
    }

    #[tokio::test]
    async fn request_builds_envelope() {
        let t = echo(false);
        let out = t.request("account_info", vec![json!("0xabc")]).await.unwrap();
        assert_eq!(out, json!({"method": "account_info"}));

        let seen = t.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].jsonrpc, "2.0");
        assert_eq!(seen[0].id, RpcId::Number(1));
        assert_eq!(seen[0].params, vec![json!("0xabc")]);
    }

    #[tokio::test]
    async fn request_surfaces_protocol_error() {
        let t = echo(true);
        let err = t.request("nope", vec![]).await.unwrap_err();
        assert!(err.is_protocol());
    }

    #[test]
    fn object_safe() {
        let t: std::sync::Arc<dyn RpcTransport> = std::sync::Arc::new(echo(false));
        assert_eq!(t.url(), "mock://echo");
    }
}
