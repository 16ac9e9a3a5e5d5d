//! zkrpc-provider — typed access to the zkSync JSON-RPC API.
//!
//! The provider only needs an [`zkrpc_core::RpcTransport`]; the HTTP one
//! lives in `zkrpc-http` (or enable the `http` feature for
//! `ZkSyncProvider::http`).
//!
//! # Quick start
//! ```rust,no_run
//! use std::sync::Arc;
//! use zkrpc_http::{HttpClientConfig, HttpRpcClient, Network};
//! use zkrpc_provider::ZkSyncProvider;
//!
//! # async fn run() -> Result<(), zkrpc_core::RpcError> {
//! let client = HttpRpcClient::for_network(&Network::mainnet(), HttpClientConfig::default())?;
//! let provider = ZkSyncProvider::new(Arc::new(client));
//! let tokens = provider.get_tokens().await?;
//! let (account_id, nonce) = provider.get_account_nonce("0x2d5b…241e").await?;
//! # Ok(())
//! # }
//! ```

pub mod provider;
pub mod signatures;

pub use provider::ZkSyncProvider;
pub use signatures::BatchSignatures;

/// Wire method names.
pub mod methods {
    pub const TX_SUBMIT: &str = "tx_submit";
    pub const SUBMIT_TXS_BATCH: &str = "submit_txs_batch";
    pub const TOKENS: &str = "tokens";
    pub const CONTRACT_ADDRESS: &str = "contract_address";
    pub const ACCOUNT_INFO: &str = "account_info";
    pub const CONFIRMATIONS_FOR_ETH_OP_AMOUNT: &str = "get_confirmations_for_eth_op_amount";
    pub const TX_INFO: &str = "tx_info";
    pub const ETH_TX_FOR_WITHDRAWAL: &str = "get_eth_tx_for_withdrawal";
    pub const ETHOP_INFO: &str = "ethop_info";
    pub const TXS_BATCH_FEE_IN_WEI: &str = "get_txs_batch_fee_in_wei";
    pub const TX_FEE: &str = "get_tx_fee";
    pub const TOKEN_PRICE: &str = "get_token_price";

    /// Every method the provider calls.
    pub const ALL: &[&str] = &[
        TX_SUBMIT,
        SUBMIT_TXS_BATCH,
        TOKENS,
        CONTRACT_ADDRESS,
        ACCOUNT_INFO,
        CONFIRMATIONS_FOR_ETH_OP_AMOUNT,
        TX_INFO,
        ETH_TX_FOR_WITHDRAWAL,
        ETHOP_INFO,
        TXS_BATCH_FEE_IN_WEI,
        TX_FEE,
        TOKEN_PRICE,
    ];
}
