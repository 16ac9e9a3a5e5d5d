//! zkrpc-core — foundation traits and types for zkrpc.
//!
//! # Overview
//!
//! zkrpc is a client binding to the JSON-RPC API of a zkSync-style Layer-2
//! network. The core crate defines the transport-agnostic half of it:
//!
//! - [`RpcTransport`] — the async trait every transport implements
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] — wire types
//! - [`RpcError`] — transport, protocol and malformed-response failures
//!
//! Network-specific operations live in `zkrpc-provider`; the HTTP
//! transport lives in `zkrpc-http`.

pub mod error;
pub mod request;
pub mod transport;

pub use error::RpcError;
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, RpcParam};
pub use transport::RpcTransport;
