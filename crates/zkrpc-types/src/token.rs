//! Tokens known to the network.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TokenId;

/// A token as listed by the `tokens` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub id: TokenId,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    /// Convert an integer amount in the token's base units into a decimal
    /// amount of whole tokens (`amount * 10^-decimals`).
    ///
    /// Returns `None` when the amount does not fit a `Decimal` mantissa
    /// (96 bits) or `decimals` exceeds the maximum scale of 28.
    pub fn decimal_amount(&self, amount: u128) -> Option<Decimal> {
        let mantissa = i128::try_from(amount).ok()?;
        Decimal::try_from_i128_with_scale(mantissa, u32::from(self.decimals)).ok()
    }

    /// Inverse of [`Token::decimal_amount`]. `None` if `amount` is negative
    /// or has more fractional digits than the token supports.
    pub fn from_decimal(&self, amount: Decimal) -> Option<u128> {
        let factor = 10u64.checked_pow(u32::from(self.decimals))?;
        let scaled = amount.checked_mul(Decimal::from(factor))?;
        if !scaled.fract().is_zero() {
            return None;
        }
        scaled.trunc().to_u128()
    }

    pub fn is_eth(&self) -> bool {
        self.id == 0
    }
}

/// A token reference accepted by fee and price methods: numeric id,
/// symbol, or L1 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenLike {
    Id(TokenId),
    Symbol(String),
}

impl From<TokenId> for TokenLike {
    fn from(id: TokenId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for TokenLike {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }
}

impl From<String> for TokenLike {
    fn from(s: String) -> Self {
        Self::Symbol(s)
    }
}

impl From<&Token> for TokenLike {
    fn from(t: &Token) -> Self {
        Self::Id(t.id)
    }
}

impl fmt::Display for TokenLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// The token list, in the order the server returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub tokens: Vec<Token>,
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn find_by_id(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    /// Addresses are compared case-insensitively (checksummed or not).
    pub fn find_by_address(&self, address: &str) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.address.eq_ignore_ascii_case(address))
    }

    /// Resolve a [`TokenLike`]: ids by id, `0x…` strings by address,
    /// anything else by symbol.
    pub fn find(&self, token: &TokenLike) -> Option<&Token> {
        match token {
            TokenLike::Id(id) => self.find_by_id(*id),
            TokenLike::Symbol(s) if s.starts_with("0x") => self.find_by_address(s),
            TokenLike::Symbol(s) => self.find_by_symbol(s),
        }
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
