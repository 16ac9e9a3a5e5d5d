//! Contract addresses and execution status records.

use serde::{Deserialize, Serialize};

/// L1 contracts of the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddress {
    pub main_contract: String,
    pub gov_contract: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub block_number: u64,
    pub committed: bool,
    pub verified: bool,
}

/// Result of `tx_info`.
///
/// `success`, `failReason` and `block` are `null` until the transaction
/// is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub executed: bool,
    pub success: Option<bool>,
    pub fail_reason: Option<String>,
    pub block: Option<BlockInfo>,
}

impl TransactionDetails {
    pub fn is_verified(&self) -> bool {
        self.block.as_ref().is_some_and(|b| b.verified)
    }
}

/// Result of `ethop_info` for a priority (L1) operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthOpInfo {
    pub executed: bool,
    pub block: Option<BlockInfo>,
}
