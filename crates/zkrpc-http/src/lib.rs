//! zkrpc-http — HTTP transport for zkrpc.
//!
//! # Quick start
//! ```rust,no_run
//! use zkrpc_core::RpcTransport;
//! use zkrpc_http::{HttpClientConfig, HttpRpcClient, Network};
//!
//! # async fn run() -> Result<(), zkrpc_core::RpcError> {
//! let client = HttpRpcClient::for_network(&Network::rinkeby(), HttpClientConfig::default())?;
//! let tokens = client.request("tokens", vec![]).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod network;

pub use client::{HttpClientConfig, HttpRpcClient};
pub use network::{Network, NetworkError};
