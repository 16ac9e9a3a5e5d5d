//! Network presets.
//!
//! A [`Network`] is the resolved address of a zkSync JSON-RPC endpoint plus
//! the L1 chain it settles on. The transport only ever sees the URL.

use std::fmt;

use thiserror::Error;
use url::Url;

/// L1 chain ids of the public deployments.
pub mod chain_id {
    pub const MAINNET: u64 = 1;
    pub const ROPSTEN: u64 = 3;
    pub const RINKEBY: u64 = 4;
    pub const LOCALHOST: u64 = 9;
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Unknown network: {0} (expected mainnet, rinkeby, ropsten or localhost)")]
    Unknown(String),

    #[error("Invalid RPC url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported RPC url scheme: {0}")]
    UnsupportedScheme(String),
}

/// A zkSync deployment: JSON-RPC endpoint and chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub zksync_url: Url,
    pub chain_id: u64,
}

impl Network {
    pub fn mainnet() -> Self {
        Self::preset("mainnet", "https://api.zksync.io/jsrpc", chain_id::MAINNET)
    }

    pub fn rinkeby() -> Self {
        Self::preset(
            "rinkeby",
            "https://rinkeby-api.zksync.io/jsrpc",
            chain_id::RINKEBY,
        )
    }

    pub fn ropsten() -> Self {
        Self::preset(
            "ropsten",
            "https://ropsten-api.zksync.io/jsrpc",
            chain_id::ROPSTEN,
        )
    }

    /// A locally running server (`zk server` default port).
    pub fn localhost() -> Self {
        Self::preset("localhost", "http://localhost:3030/jsrpc", chain_id::LOCALHOST)
    }

    /// Any other deployment. Only `http` and `https` URLs are accepted.
    pub fn custom(url: &str, chain_id: u64) -> Result<Self, NetworkError> {
        let parsed = Url::parse(url).map_err(|source| NetworkError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self {
                name: "custom".into(),
                zksync_url: parsed,
                chain_id,
            }),
            other => Err(NetworkError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, NetworkError> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::mainnet()),
            "rinkeby" => Ok(Self::rinkeby()),
            "ropsten" => Ok(Self::ropsten()),
            "localhost" | "local" => Ok(Self::localhost()),
            _ => Err(NetworkError::Unknown(name.to_string())),
        }
    }

    /// All built-in presets.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::mainnet(),
            Self::rinkeby(),
            Self::ropsten(),
            Self::localhost(),
        ]
    }

    pub fn url(&self) -> &str {
        self.zksync_url.as_str()
    }

    /// Only called with the literals above.
    fn preset(name: &str, url: &'static str, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            zksync_url: Url::parse(url).expect("preset url literal"),
            chain_id,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, chain {})", self.name, self.zksync_url, self.chain_id)
    }
}
