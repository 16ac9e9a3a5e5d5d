//! JSON-RPC 2.0 wire types.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::RpcError;

/// JSON-RPC request ID — string, number, or null.
///
/// Ids echoed back by a server are kept verbatim; anything that is not an
/// unsigned number, a string or null lands in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(u64),
    String(String),
    #[default]
    Null,
    Other(Value),
}

impl RpcId {
    pub fn number(n: u64) -> Self {
        Self::Number(n)
    }
}

impl std::fmt::Display for RpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// A single JSON-RPC parameter value.
pub type RpcParam = Value;

/// A JSON-RPC 2.0 request.
///
/// Parameters are always positional; a call without parameters sends `[]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub id: RpcId,
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<RpcParam>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request.
    pub fn new(id: u64, method: impl Into<String>, params: Vec<RpcParam>) -> Self {
        Self {
            id: RpcId::Number(id),
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
        }
    }
}

/// The error object of a rejected call.
///
/// The network puts the request id inside the error object; `code` and
/// `data` are kept when a server sends them but nothing depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "JSON-RPC error {id}: {}", self.message),
            None => write!(f, "JSON-RPC error: {}", self.message),
        }
    }
}

/// A JSON-RPC 2.0 response.
///
/// Only one of `result` / `error` is expected; `error` wins when both are set.
/// `result` is `Some(Value::Null)` for an explicit `"result": null` and
/// `None` when the member is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: RpcId,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Successful response carrying `result`.
    pub fn success(id: RpcId, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Rejected response carrying `{id, message}` in its error object.
    pub fn failure(id: RpcId, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id: id.clone(),
            result: None,
            error: Some(JsonRpcError {
                id: Some(id),
                code: None,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Returns `true` if this is a successful response (has result, no error).
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Unwrap the result value of a `method` call or turn the error object
    /// into [`RpcError::Response`].
    ///
    /// An envelope with neither member is [`RpcError::Malformed`].
    pub fn into_result(self, method: &str) -> Result<Value, RpcError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(RpcError::Response {
                id: err.id.unwrap_or(self.id),
                message: err.message,
            }),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(RpcError::malformed(
                method,
                serde_json::Error::missing_field("result"),
            )),
        }
    }
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
