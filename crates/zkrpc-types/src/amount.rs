//! Serde helpers for token amounts.
//!
//! The server sends amounts as decimal strings (they overflow JSON
//! numbers); small values sometimes arrive as plain integers. Both decode
//! into `u128`. Amounts are always encoded back as decimal strings.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Balance {
//!     #[serde(with = "zkrpc_types::amount")]
//!     value: u128,
//! }
//!
//! let b: Balance = serde_json::from_str(r#"{"value": "1000000000000000000"}"#).unwrap();
//! assert_eq!(b.value, 1_000_000_000_000_000_000);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(v.into())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
        u128::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// `#[serde(with = "amount::map")]` for `symbol → amount` maps.
pub mod map {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super")] u128);

    pub fn serialize<S: Serializer>(
        value: &BTreeMap<String, u128>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(value.iter().map(|(k, v)| (k, v.to_string())))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, u128>, D::Error> {
        let raw = BTreeMap::<String, Wrapped>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(k, Wrapped(v))| (k, v)).collect())
    }
}

/// Parse an amount out of a raw JSON value (string or integer).
pub fn from_value(value: serde_json::Value) -> Result<u128, serde_json::Error> {
    deserialize(value)
}
