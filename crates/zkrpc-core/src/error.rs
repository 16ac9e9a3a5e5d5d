//! Error taxonomy shared by every transport and the provider.

use thiserror::Error;

use crate::request::RpcId;

/// Reason attached to transport errors caused by a non-200 HTTP status.
pub const UNEXPECTED_STATUS: &str = "Unexpected status code";

/// Errors that can occur during an RPC call.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The HTTP exchange did not yield an accepted response: non-200 status,
    /// connection refused, timeout and so on.
    ///
    /// `status` is `None` when no response was received at all.
    #[error("Provider error: {reason}{}", status_suffix(.status))]
    Provider {
        status: Option<u16>,
        body: String,
        reason: String,
    },

    /// The server understood the request and rejected it.
    #[error("RPC error {id}: {message}")]
    Response { id: RpcId, message: String },

    /// The server answered, but the payload does not match the schema
    /// expected for `method`.
    #[error("Malformed response for {method}: {source}")]
    Malformed {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// Call parameters could not be encoded as JSON.
    #[error("Invalid params: {0}")]
    InvalidParams(#[source] serde_json::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

impl RpcError {
    /// Transport error without an HTTP response (connect failure, timeout).
    pub fn provider(reason: impl Into<String>) -> Self {
        Self::Provider {
            status: None,
            body: String::new(),
            reason: reason.into(),
        }
    }

    /// Transport error for a response with an unexpected HTTP status.
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::Provider {
            status: Some(status),
            body: body.into(),
            reason: UNEXPECTED_STATUS.into(),
        }
    }

    pub fn malformed(method: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            method: method.into(),
            source,
        }
    }

    /// Returns `true` if the failure happened at the HTTP/connection level.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }

    /// Returns `true` if the server rejected the request (JSON-RPC `error`).
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Response { .. })
    }

    /// Returns `true` if the server's result did not match the expected shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
