//! Account state returned by `account_info`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{amount, AccountId, Nonce};

/// Balances and nonce of an account at one confirmation level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub nonce: Nonce,
    pub pub_key_hash: String,
    /// Token symbol → amount in base units.
    #[serde(with = "amount::map")]
    pub balances: BTreeMap<String, u128>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositingBalance {
    #[serde(with = "amount")]
    pub amount: u128,
    pub expected_accept_block: u64,
}

/// Deposits seen on L1 but not yet credited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depositing {
    pub balances: BTreeMap<String, DepositingBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub address: String,
    /// `None` until the account is registered in the state tree.
    pub id: Option<AccountId>,
    pub depositing: Depositing,
    pub committed: State,
    pub verified: State,
}

impl AccountState {
    /// Nonce to use for the next transaction (the committed one).
    pub fn nonce(&self) -> Nonce {
        self.committed.nonce
    }

    /// Committed balance of `symbol`, zero if the account holds none.
    pub fn committed_balance(&self, symbol: &str) -> u128 {
        self.committed.balances.get(symbol).copied().unwrap_or(0)
    }

    pub fn verified_balance(&self, symbol: &str) -> u128 {
        self.verified.balances.get(symbol).copied().unwrap_or(0)
    }
}
