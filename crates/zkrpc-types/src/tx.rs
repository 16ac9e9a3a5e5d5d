//! Signed L2 transactions and Ethereum signatures as submitted to
//! `tx_submit` / `submit_txs_batch`.
//!
//! Signing happens elsewhere; these types only carry the already
//! computed signatures to the wire.

use serde::{Deserialize, Serialize};

use crate::{amount, AccountId, Nonce, TokenId};

/// zkSync (Schnorr) signature over the transaction bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub pub_key: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub account_id: AccountId,
    pub from: String,
    pub to: String,
    pub token: TokenId,
    #[serde(with = "amount")]
    pub amount: u128,
    #[serde(with = "amount")]
    pub fee: u128,
    pub nonce: Nonce,
    pub signature: Signature,
    pub valid_from: u64,
    pub valid_until: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw {
    pub account_id: AccountId,
    pub from: String,
    /// L1 recipient.
    pub to: String,
    pub token: TokenId,
    #[serde(with = "amount")]
    pub amount: u128,
    #[serde(with = "amount")]
    pub fee: u128,
    pub nonce: Nonce,
    pub signature: Signature,
    pub valid_from: u64,
    pub valid_until: u64,
}

/// How the L1 owner authorized a new signing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChangePubKeyAuth {
    /// Authorized by an L1 transaction to the main contract.
    Onchain,
    #[serde(rename = "ECDSA", rename_all = "camelCase")]
    Ecdsa {
        eth_signature: String,
        batch_hash: String,
    },
    #[serde(rename = "CREATE2", rename_all = "camelCase")]
    Create2 {
        creator_address: String,
        salt_arg: String,
        code_hash: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePubKey {
    pub account_id: AccountId,
    pub account: String,
    pub new_pk_hash: String,
    pub fee_token: TokenId,
    #[serde(with = "amount")]
    pub fee: u128,
    pub nonce: Nonce,
    pub signature: Signature,
    pub eth_auth_data: ChangePubKeyAuth,
    pub valid_from: u64,
    pub valid_until: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForcedExit {
    pub initiator_account_id: AccountId,
    pub target: String,
    pub token: TokenId,
    #[serde(with = "amount")]
    pub fee: u128,
    pub nonce: Nonce,
    pub signature: Signature,
    pub valid_from: u64,
    pub valid_until: u64,
}

/// A signed transaction in its wire form, discriminated by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncodedTx {
    Transfer(Transfer),
    Withdraw(Withdraw),
    ChangePubKey(ChangePubKey),
    ForcedExit(ForcedExit),
}

impl EncodedTx {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "Transfer",
            Self::Withdraw(_) => "Withdraw",
            Self::ChangePubKey(_) => "ChangePubKey",
            Self::ForcedExit(_) => "ForcedExit",
        }
    }

    pub fn nonce(&self) -> Nonce {
        match self {
            Self::Transfer(tx) => tx.nonce,
            Self::Withdraw(tx) => tx.nonce,
            Self::ChangePubKey(tx) => tx.nonce,
            Self::ForcedExit(tx) => tx.nonce,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EthSignatureType {
    /// Plain `personal_sign` by an EOA.
    EthereumSignature,
    /// Contract wallet signature checked via EIP-1271.
    #[serde(rename = "EIP1271Signature")]
    Eip1271Signature,
}

/// Ethereum signature over the human-readable transaction message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEthSignature {
    #[serde(rename = "type")]
    pub sig_type: EthSignatureType,
    pub signature: String,
}

impl TxEthSignature {
    pub fn ethereum(signature: impl Into<String>) -> Self {
        Self {
            sig_type: EthSignatureType::EthereumSignature,
            signature: signature.into(),
        }
    }

    pub fn eip1271(signature: impl Into<String>) -> Self {
        Self {
            sig_type: EthSignatureType::Eip1271Signature,
            signature: signature.into(),
        }
    }
}

/// Batch-level Ethereum signature. Same wire shape as [`TxEthSignature`].
pub type EthSignature = TxEthSignature;

/// One entry of a `submit_txs_batch` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxWithSignature {
    pub tx: EncodedTx,
    /// Sent as an explicit `null` when absent.
    pub signature: Option<TxEthSignature>,
}

impl TxWithSignature {
    pub fn new(tx: EncodedTx, signature: Option<TxEthSignature>) -> Self {
        Self { tx, signature }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn zk_sig() -> Signature {
        Signature {
            pub_key: "0b1f".into(),
            signature: "9a8b".into(),
        }
    }

    fn transfer() -> EncodedTx {
        EncodedTx::Transfer(Transfer {
            account_id: 12,
            from: "0xaaaa".into(),
            to: "0xbbbb".into(),
            token: 0,
            amount: 1_000_000_000_000_000_000,
            fee: 21_000,
            nonce: 3,
            signature: zk_sig(),
            valid_from: 0,
            valid_until: 4_294_967_295,
        })
    }

    #[test]
    fn transfer_wire_shape() {
        let json = serde_json::to_value(transfer()).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "Transfer",
                "accountId": 12,
                "from": "0xaaaa",
                "to": "0xbbbb",
                "token": 0,
                "amount": "1000000000000000000",
                "fee": "21000",
                "nonce": 3,
                "signature": {"pubKey": "0b1f", "signature": "9a8b"},
                "validFrom": 0,
                "validUntil": 4294967295u64
            })
        );
    }

    #[test]
    fn change_pub_key_auth_shapes() {
        let tx = EncodedTx::ChangePubKey(ChangePubKey {
            account_id: 1,
            account: "0xaaaa".into(),
            new_pk_hash: "sync:1234".into(),
            fee_token: 0,
            fee: 0,
            nonce: 0,
            signature: zk_sig(),
            eth_auth_data: ChangePubKeyAuth::Onchain,
            valid_from: 0,
            valid_until: 10,
        });
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "ChangePubKey");
        assert_eq!(json["ethAuthData"], json!({"type": "Onchain"}));

        let ecdsa = ChangePubKeyAuth::Ecdsa {
            eth_signature: "0x01".into(),
            batch_hash: "0x02".into(),
        };
        assert_eq!(
            serde_json::to_value(ecdsa).unwrap(),
            json!({"type": "ECDSA", "ethSignature": "0x01", "batchHash": "0x02"})
        );
    }

    #[test]
    fn encoded_tx_decodes_by_type() {
        let raw = serde_json::to_value(transfer()).unwrap();
        let back: EncodedTx = serde_json::from_value(raw).unwrap();
        assert_eq!(back.kind(), "Transfer");
        assert_eq!(back.nonce(), 3);
    }

    #[test]
    fn eth_signature_type_names() {
        assert_eq!(
            serde_json::to_value(TxEthSignature::eip1271("0xff")).unwrap(),
            json!({"type": "EIP1271Signature", "signature": "0xff"})
        );
        assert_eq!(
            serde_json::to_value(TxEthSignature::ethereum("0xee")).unwrap(),
            json!({"type": "EthereumSignature", "signature": "0xee"})
        );
    }

    #[test]
    fn missing_batch_signature_is_null() {
        let entry = TxWithSignature::new(transfer(), None);
        let json = serde_json::to_value(entry).unwrap();
        assert!(json.as_object().unwrap().contains_key("signature"));
        assert_eq!(json["signature"], serde_json::Value::Null);
    }
}
