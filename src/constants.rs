/// Basis-point scale used by every fee computation.
pub const FEE_DENOMINATOR_BPS: u32 = 10_000;

/// Default swap fee (0.3%) when a pool does not carry its own.
pub const DEFAULT_SWAP_FEE_BPS: u32 = 30;

/// Default protocol fee denominator: 1/6 of invariant growth goes to the
/// protocol when fee collection is switched on.
pub const DEFAULT_PROTOCOL_FEE_DENOMINATOR: u32 = 6;

/// Liquidity burned on a pool's first mint.
pub const MINIMUM_LIQUIDITY: u32 = 1_000;
