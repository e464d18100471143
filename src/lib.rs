//! Exact-arithmetic routing over constant-product liquidity pools.
//!
//! Given a set of two-asset pools with known reserves, the router finds the
//! best multi-hop swap routes for a fixed input or fixed output amount and
//! ranks them by economic quality. All monetary math runs on
//! arbitrary-precision rationals; nothing here performs I/O or talks to a
//! chain. Callers supply [`Pool`]s and consume [`Trade`]s.

pub mod amount;
pub mod asset;
pub mod constants;
pub mod errors;
pub mod pool;
pub mod price;
pub mod rational;
pub mod route;
pub mod router;
pub mod sorted_insert;
pub mod trade;

pub use amount::AssetAmount;
pub use asset::{Asset, AssetKind};
pub use errors::{Error, Result};
pub use pool::Pool;
pub use price::Price;
pub use rational::{Format, Rational, Rounding};
pub use route::Route;
pub use router::{best_trade_exact_in, best_trade_exact_out, trade_comparator, BestTradeOptions};
pub use sorted_insert::sorted_insert;
pub use trade::{Trade, TradeType};
