use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Whether an asset is the chain's native coin or a token contract.
///
/// The native asset of a chain has no address; there is exactly one per
/// chain scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetKind {
    Native,
    Token(String),
}

/// A chain-scoped asset descriptor.
///
/// Two assets are the same asset iff they live on the same chain and have
/// the same kind (native, or token at the same address). Decimals, symbol
/// and name are display metadata and do not participate in identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Asset {
    pub chain_id: u64,
    pub kind: AssetKind,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Asset {
    pub fn native(chain_id: u64, decimals: u8, symbol: impl Into<String>) -> Self {
        Asset {
            chain_id,
            kind: AssetKind::Native,
            decimals,
            symbol: Some(symbol.into()),
            name: None,
        }
    }

    pub fn token(
        chain_id: u64,
        address: impl Into<String>,
        decimals: u8,
        symbol: impl Into<String>,
    ) -> Self {
        Asset {
            chain_id,
            kind: AssetKind::Token(address.into().to_lowercase()),
            decimals,
            symbol: Some(symbol.into()),
            name: None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.kind {
            AssetKind::Native => None,
            AssetKind::Token(address) => Some(address),
        }
    }

    /// Canonical ordering used to make a pool's `token0`/`token1` assignment
    /// independent of constructor argument order: native first, then tokens
    /// by address.
    pub fn sorts_before(&self, other: &Asset) -> bool {
        (self.chain_id, &self.kind).cmp(&(other.chain_id, &other.kind)) == Ordering::Less
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.kind == other.kind
    }
}

impl Eq for Asset {}

impl std::hash::Hash for Asset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.symbol, &self.kind) {
            (Some(symbol), _) => write!(f, "{symbol}"),
            (None, AssetKind::Token(address)) => write!(f, "{address}"),
            (None, AssetKind::Native) => write!(f, "native@{}", self.chain_id),
        }
    }
}
