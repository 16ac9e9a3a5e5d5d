//! Batch-level Ethereum signatures.

use zkrpc_types::EthSignature;

/// Signatures attached to a whole `submit_txs_batch` call.
///
/// The server always receives a list; see [`BatchSignatures::into_vec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BatchSignatures {
    #[default]
    None,
    One(EthSignature),
    Many(Vec<EthSignature>),
}

impl BatchSignatures {
    /// `None` → `[]`, `One(s)` → `[s]`, `Many(v)` → `v`.
    pub fn into_vec(self) -> Vec<EthSignature> {
        match self {
            Self::None => Vec::new(),
            Self::One(sig) => vec![sig],
            Self::Many(sigs) => sigs,
        }
    }
}

impl From<EthSignature> for BatchSignatures {
    fn from(sig: EthSignature) -> Self {
        Self::One(sig)
    }
}

impl From<Vec<EthSignature>> for BatchSignatures {
    fn from(sigs: Vec<EthSignature>) -> Self {
        Self::Many(sigs)
    }
}

impl From<Option<EthSignature>> for BatchSignatures {
    fn from(sig: Option<EthSignature>) -> Self {
        sig.map_or(Self::None, Self::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_list() {
        let sig = EthSignature::ethereum("0x01");
        assert!(BatchSignatures::None.into_vec().is_empty());
        assert_eq!(BatchSignatures::from(sig.clone()).into_vec(), vec![sig.clone()]);
        assert_eq!(
            BatchSignatures::from(vec![sig.clone(), sig.clone()]).into_vec().len(),
            2
        );
        assert_eq!(BatchSignatures::from(None::<EthSignature>), BatchSignatures::None);
    }
}
