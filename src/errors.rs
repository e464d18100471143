use thiserror::Error;

/// Every failure the routing core can surface, as a tagged kind so callers
/// match on the variant instead of inspecting message strings.
///
/// `InsufficientInputAmount` and `InsufficientReserves` double as search
/// pruning signals: the router catches them per-pool and skips the branch,
/// they never escape a `best_trade_*` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("rational denominator is zero")]
    ZeroDenominator,

    #[error("division by zero rational")]
    DivisionByZero,

    #[error("significant digits must be greater than zero")]
    InvalidSignificantDigits,

    #[error("asset mismatch: expected {expected}, got {actual}")]
    AssetMismatch { expected: String, actual: String },

    #[error("asset {0} is not one of the pool's assets")]
    WrongAsset(String),

    #[error("pool assets must be distinct")]
    IdenticalAssets,

    #[error("pool reserves cannot carry this swap")]
    InsufficientReserves,

    #[error("input amount too small to produce any output")]
    InsufficientInputAmount,

    #[error("route must contain at least one pool")]
    EmptyRoute,

    #[error("all pools in a route must share one chain")]
    ChainMismatch,

    #[error("route is disjoint: pool {0} does not contain the traded asset")]
    DisjointRoute(usize),

    #[error("route revisits an asset")]
    CyclicRoute,

    #[error("slippage tolerance cannot be negative")]
    NegativeSlippageTolerance,

    #[error("no pools supplied")]
    NoPools,

    #[error("max hops must be greater than zero")]
    MaxHopsExhausted,

    #[error("recursive search invoked with inconsistent state")]
    InvalidRecursion,

    #[error("max size must be greater than zero")]
    InvalidMaxSize,

    #[error("sorted buffer exceeds its maximum size")]
    InvariantViolated,
}

pub type Result<T> = std::result::Result<T, Error>;
