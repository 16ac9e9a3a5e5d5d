//! `ZkSyncProvider` — one typed async fn per network method.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Error as _};
use serde::Serialize;
use serde_json::{Map, Value};

use zkrpc_core::{RpcError, RpcTransport};
#[cfg(feature = "http")]
use zkrpc_http::{HttpClientConfig, HttpRpcClient, Network};
use zkrpc_types::{
    amount, AccountId, AccountState, ContractAddress, EncodedTx, EthOpInfo, Fee, Nonce, Token,
    TokenLike, Tokens, TransactionDetails, TxEthSignature, TxType, TxWithSignature,
};

use crate::methods;
use crate::signatures::BatchSignatures;

/// Client for the zkSync JSON-RPC API.
///
/// Holds one shared transport; cheap to clone and safe to use from
/// concurrent tasks. Every call is a single round trip, and failures from
/// the transport are returned unchanged.
#[derive(Clone)]
pub struct ZkSyncProvider {
    transport: Arc<dyn RpcTransport>,
}

impl ZkSyncProvider {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Provider over HTTP for a network preset.
    #[cfg(feature = "http")]
    pub fn http(network: &Network, config: HttpClientConfig) -> Result<Self, RpcError> {
        let client = HttpRpcClient::for_network(network, config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn transport(&self) -> &Arc<dyn RpcTransport> {
        &self.transport
    }

    /// Submit a signed transaction; returns its hash (`sync-tx:…`).
    ///
    /// A missing Ethereum signature is sent as `null`.
    pub async fn submit_tx(
        &self,
        tx: &EncodedTx,
        signature: Option<&TxEthSignature>,
        fast_processing: bool,
    ) -> Result<String, RpcError> {
        tracing::debug!(kind = tx.kind(), nonce = tx.nonce(), fast_processing, "submitting tx");
        let params = vec![encode(tx)?, encode(&signature)?, Value::Bool(fast_processing)];
        self.call(methods::TX_SUBMIT, params).await
    }

    /// Submit several transactions atomically. The result is passed through
    /// untouched (a list of tx hashes on current servers).
    pub async fn submit_txs_batch(
        &self,
        transactions: &[TxWithSignature],
        signatures: impl Into<BatchSignatures>,
    ) -> Result<Value, RpcError> {
        let signatures = signatures.into().into_vec();
        tracing::debug!(
            txs = transactions.len(),
            signatures = signatures.len(),
            "submitting batch"
        );
        let params = vec![encode(transactions)?, encode(&signatures)?];
        self.transport
            .request(methods::SUBMIT_TXS_BATCH, params)
            .await
    }

    /// All tokens, in the order the server listed them.
    pub async fn get_tokens(&self) -> Result<Tokens, RpcError> {
        let raw: Map<String, Value> = self.call(methods::TOKENS, vec![]).await?;
        let tokens = raw
            .into_iter()
            .map(|(_, token)| decode(methods::TOKENS, token))
            .collect::<Result<Vec<Token>, _>>()?;
        Ok(Tokens::new(tokens))
    }

    pub async fn get_contract_address(&self) -> Result<ContractAddress, RpcError> {
        self.call(methods::CONTRACT_ADDRESS, vec![]).await
    }

    pub async fn get_state(&self, address: &str) -> Result<AccountState, RpcError> {
        self.call(methods::ACCOUNT_INFO, vec![Value::from(address)])
            .await
    }

    /// Number of L1 confirmations the server waits for before accepting a
    /// priority operation.
    pub async fn get_confirmations_for_eth_op_amount(&self) -> Result<u64, RpcError> {
        self.call(methods::CONFIRMATIONS_FOR_ETH_OP_AMOUNT, vec![])
            .await
    }

    /// Account id and committed nonce. Not a wire method: this is one
    /// `account_info` call.
    pub async fn get_account_nonce(
        &self,
        address: &str,
    ) -> Result<(Option<AccountId>, Nonce), RpcError> {
        let state = self.get_state(address).await?;
        Ok((state.id, state.nonce()))
    }

    pub async fn get_tx_receipt(&self, tx_hash: &str) -> Result<TransactionDetails, RpcError> {
        self.call(methods::TX_INFO, vec![Value::from(tx_hash)]).await
    }

    /// L1 transaction that completed a fast withdrawal; `None` while it has
    /// not been sent yet.
    pub async fn get_eth_tx_for_withdrawal(
        &self,
        withdrawal_hash: &str,
    ) -> Result<Option<String>, RpcError> {
        self.call(
            methods::ETH_TX_FOR_WITHDRAWAL,
            vec![Value::from(withdrawal_hash)],
        )
        .await
    }

    pub async fn get_priority_op_status(&self, serial_id: u64) -> Result<EthOpInfo, RpcError> {
        self.call(methods::ETHOP_INFO, vec![Value::from(serial_id)])
            .await
    }

    /// Fee for a batch with one entry per `(tx_types[i], addresses[i])`,
    /// paid in `token`.
    pub async fn get_transactions_batch_fee<A: AsRef<str>>(
        &self,
        tx_types: &[TxType],
        addresses: &[A],
        token: impl Into<TokenLike>,
    ) -> Result<Fee, RpcError> {
        let tx_types: Vec<&str> = tx_types.iter().map(TxType::as_str).collect();
        let addresses: Vec<&str> = addresses.iter().map(|a| a.as_ref()).collect();
        let params = vec![encode(&tx_types)?, encode(&addresses)?, encode(&token.into())?];
        self.call(methods::TXS_BATCH_FEE_IN_WEI, params).await
    }

    pub async fn get_transaction_fee(
        &self,
        tx_type: TxType,
        address: &str,
        token: impl Into<TokenLike>,
    ) -> Result<Fee, RpcError> {
        let params = vec![
            Value::from(tx_type.as_str()),
            Value::from(address),
            encode(&token.into())?,
        ];
        self.call(methods::TX_FEE, params).await
    }

    /// Price reported for `token`, scaled by the token's decimals.
    ///
    /// The raw result must be an integer (JSON number or decimal string).
    pub async fn get_token_price(&self, token: &Token) -> Result<Decimal, RpcError> {
        let raw = self
            .transport
            .request(methods::TOKEN_PRICE, vec![Value::from(token.symbol.as_str())])
            .await?;
        let units =
            amount::from_value(raw).map_err(|e| RpcError::malformed(methods::TOKEN_PRICE, e))?;
        token.decimal_amount(units).ok_or_else(|| {
            RpcError::malformed(
                methods::TOKEN_PRICE,
                serde_json::Error::custom(format!(
                    "price {units} out of range for {} decimals",
                    token.decimals
                )),
            )
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> Result<T, RpcError> {
        let result = self.transport.request(method, params).await?;
        decode(method, result)
    }
}

impl std::fmt::Debug for ZkSyncProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZkSyncProvider")
            .field("url", &self.transport.url())
            .finish()
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(RpcError::InvalidParams)
}

fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T, RpcError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(method, error = %e, "result does not match schema");
        RpcError::malformed(method, e)
    })
}
