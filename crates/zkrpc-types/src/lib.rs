//! zkrpc-types — value objects exchanged with a zkSync JSON-RPC server.
//!
//! Every type here is a flat record decoded from (or encoded to) the
//! camelCase JSON the server speaks. Decoding is strict: a field that is
//! not an `Option` must be present.

pub mod account;
pub mod amount;
pub mod fee;
pub mod info;
pub mod token;
pub mod tx;

pub use account::{AccountState, Depositing, DepositingBalance, State};
pub use fee::{Fee, TxType};
pub use info::{BlockInfo, ContractAddress, EthOpInfo, TransactionDetails};
pub use token::{Token, TokenLike, Tokens};
pub use tx::{
    ChangePubKey, ChangePubKeyAuth, EncodedTx, EthSignature, EthSignatureType, ForcedExit,
    Signature, Transfer, TxEthSignature, TxWithSignature, Withdraw,
};

/// Account id assigned by the network once an account receives funds.
pub type AccountId = u32;
/// Per-account transaction counter.
pub type Nonce = u32;
/// Numeric token id.
pub type TokenId = u32;
