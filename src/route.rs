use crate::asset::Asset;
use crate::errors::{Error, Result};
use crate::pool::Pool;
use crate::price::Price;

/// An ordered chain of pools connecting an input asset to an output asset.
///
/// Construction walks the pools from the input asset and validates that
/// every hop trades the asset the previous hop produced, that no asset is
/// visited twice, and that every pool lives on one chain. The route's
/// `mid_price` (spot price ignoring trade size) is composed once here from
/// the per-hop reserve ratios.
#[derive(Clone, Debug)]
pub struct Route {
    pools: Vec<Pool>,
    path: Vec<Asset>,
    mid_price: Price,
}

impl Route {
    pub fn new(pools: Vec<Pool>, input: &Asset, output: &Asset) -> Result<Self> {
        if pools.is_empty() {
            return Err(Error::EmptyRoute);
        }
        let chain_id = pools[0].chain_id();
        if pools.iter().any(|pool| pool.chain_id() != chain_id) {
            return Err(Error::ChainMismatch);
        }
        let mut path = vec![input.clone()];
        let mut current = input.clone();
        for (i, pool) in pools.iter().enumerate() {
            if !pool.involves(&current) {
                return Err(Error::DisjointRoute(i));
            }
            current = pool.other_asset(&current)?.clone();
            path.push(current.clone());
        }
        if &current != output {
            return Err(Error::DisjointRoute(pools.len() - 1));
        }
        for (i, asset) in path.iter().enumerate() {
            if path[i + 1..].contains(asset) {
                return Err(Error::CyclicRoute);
            }
        }
        let mut mid_price = pools[0].price_of(&path[0])?;
        for (pool, hop_input) in pools.iter().zip(path.iter()).skip(1) {
            mid_price = mid_price.multiply(&pool.price_of(hop_input)?)?;
        }
        Ok(Route {
            pools,
            path,
            mid_price,
        })
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn path(&self) -> &[Asset] {
        &self.path
    }

    pub fn input(&self) -> &Asset {
        &self.path[0]
    }

    pub fn output(&self) -> &Asset {
        &self.path[self.path.len() - 1]
    }

    pub fn chain_id(&self) -> u64 {
        self.pools[0].chain_id()
    }

    /// Spot price from the route's input asset to its output asset,
    /// composed across every hop, ignoring trade size and fees' impact on
    /// reserves.
    pub fn mid_price(&self) -> &Price {
        &self.mid_price
    }
}
