//! Fee quotes and the transaction kinds they are quoted for.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amount;

/// Transaction kinds accepted by `get_tx_fee` / `get_txs_batch_fee_in_wei`.
///
/// Only ever sent; the server never returns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TxType {
    Withdraw,
    Transfer,
    FastWithdraw,
    ChangePubKeyOnchainAuth,
}

impl TxType {
    /// Wire string of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer",
            Self::FastWithdraw => "FastWithdraw",
            Self::ChangePubKeyOnchainAuth => "ChangePubKeyOnchainAuth",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Withdraw" => Some(Self::Withdraw),
            "Transfer" => Some(Self::Transfer),
            "FastWithdraw" => Some(Self::FastWithdraw),
            "ChangePubKeyOnchainAuth" => Some(Self::ChangePubKeyOnchainAuth),
            _ => None,
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fee quote. All amounts are in wei / base units of the fee token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    /// Echo of the quoted kind. Its shape differs between server versions
    /// (`"Transfer"` vs `{"ChangePubKey": "Onchain"}`), so it stays raw.
    pub fee_type: Value,
    #[serde(with = "amount")]
    pub gas_tx_amount: u128,
    #[serde(with = "amount")]
    pub gas_price_wei: u128,
    #[serde(with = "amount")]
    pub gas_fee: u128,
    #[serde(with = "amount")]
    pub zkp_fee: u128,
    #[serde(with = "amount")]
    pub total_fee: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_strings() {
        let all = [
            TxType::Withdraw,
            TxType::Transfer,
            TxType::FastWithdraw,
            TxType::ChangePubKeyOnchainAuth,
        ];
        for t in all {
            assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
            assert_eq!(TxType::from_wire(t.as_str()), Some(t));
        }
        assert_eq!(TxType::ChangePubKeyOnchainAuth.as_str(), "ChangePubKeyOnchainAuth");
    }

    #[test]
    fn decodes_fee_quote() {
        let fee: Fee = serde_json::from_value(json!({
            "feeType": "Transfer",
            "gasTxAmount": "350",
            "gasPriceWei": "1000000000",
            "gasFee": "350000000000",
            "zkpFee": "120000000000",
            "totalFee": "470000000000"
        }))
        .unwrap();
        assert_eq!(fee.fee_type, json!("Transfer"));
        assert_eq!(fee.total_fee, 470_000_000_000);
        assert_eq!(fee.gas_price_wei, 1_000_000_000);
    }

    #[test]
    fn fee_without_total_is_rejected() {
        let r = serde_json::from_value::<Fee>(json!({
            "feeType": "Withdraw",
            "gasTxAmount": "1",
            "gasPriceWei": "1",
            "gasFee": "1",
            "zkpFee": "1"
        }));
        assert!(r.is_err());
    }
}
