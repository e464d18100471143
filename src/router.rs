use crate::amount::AssetAmount;
use crate::asset::Asset;
use crate::errors::{Error, Result};
use crate::pool::Pool;
use crate::route::Route;
use crate::sorted_insert::sorted_insert;
use crate::trade::Trade;
use std::cmp::Ordering;

/// Search bounds for the best-trade routines.
#[derive(Clone, Copy, Debug)]
pub struct BestTradeOptions {
    /// How many trades to keep, best first.
    pub max_num_results: usize,
    /// Longest route considered, in hops.
    pub max_hops: usize,
}

impl Default for BestTradeOptions {
    fn default() -> Self {
        BestTradeOptions {
            max_num_results: 3,
            max_hops: 3,
        }
    }
}

/// Ranks trades best-first: more output, then less input; true ties fall
/// through to lower price impact, then fewer hops.
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    let by_output = b.output_amount().raw().cmp(a.output_amount().raw());
    if by_output != Ordering::Equal {
        return by_output;
    }
    let by_input = a.input_amount().raw().cmp(b.input_amount().raw());
    if by_input != Ordering::Equal {
        return by_input;
    }
    let by_impact = a.price_impact().cmp(b.price_impact());
    if by_impact != Ordering::Equal {
        return by_impact;
    }
    a.route().path().len().cmp(&b.route().path().len())
}

/// Finds the top trades converting a fixed `amount_in` into `asset_out`,
/// exploring every simple path of at most `max_hops` pools.
///
/// An empty result means no path exists; that is not an error. Pools that
/// cannot carry the amount are skipped, any other per-pool failure aborts
/// the whole search.
pub fn best_trade_exact_in(
    pools: &[Pool],
    amount_in: &AssetAmount,
    asset_out: &Asset,
    options: &BestTradeOptions,
) -> Result<Vec<Trade>> {
    let mut best_trades = Vec::new();
    best_trade_exact_in_inner(
        pools,
        amount_in,
        asset_out,
        options.max_hops,
        options.max_num_results,
        &[],
        amount_in,
        &mut best_trades,
    )?;
    Ok(best_trades)
}

#[allow(clippy::too_many_arguments)]
fn best_trade_exact_in_inner(
    pools: &[Pool],
    amount_in: &AssetAmount,
    asset_out: &Asset,
    max_hops: usize,
    max_num_results: usize,
    current_pools: &[Pool],
    original_amount_in: &AssetAmount,
    best_trades: &mut Vec<Trade>,
) -> Result<()> {
    if pools.is_empty() {
        return Err(Error::NoPools);
    }
    if max_hops == 0 {
        return Err(Error::MaxHopsExhausted);
    }
    if amount_in != original_amount_in && current_pools.is_empty() {
        return Err(Error::InvalidRecursion);
    }
    for (i, pool) in pools.iter().enumerate() {
        if !pool.involves(amount_in.asset()) {
            continue;
        }
        if pool.reserve0().raw().is_zero() || pool.reserve1().raw().is_zero() {
            continue;
        }
        let (amount_out, _) = match pool.swap_given_input(amount_in) {
            Ok(result) => result,
            // This pool cannot carry this amount; prune the branch.
            Err(Error::InsufficientInputAmount | Error::InsufficientReserves) => continue,
            Err(e) => return Err(e),
        };
        if amount_out.asset() == asset_out {
            let mut route_pools = current_pools.to_vec();
            route_pools.push(pool.clone());
            let route = match Route::new(route_pools, original_amount_in.asset(), asset_out) {
                Ok(route) => route,
                // Parallel pools over one pair let the walk revisit an
                // asset; such candidates are pruned, not surfaced.
                Err(Error::CyclicRoute) => continue,
                Err(e) => return Err(e),
            };
            let trade = Trade::exact_in(route, original_amount_in)?;
            sorted_insert(best_trades, trade, max_num_results, trade_comparator)?;
        } else if max_hops > 1 && pools.len() > 1 {
            // A pool is never reused within one path.
            let remaining: Vec<Pool> = pools[..i]
                .iter()
                .chain(pools[i + 1..].iter())
                .cloned()
                .collect();
            let mut next_current = current_pools.to_vec();
            next_current.push(pool.clone());
            best_trade_exact_in_inner(
                &remaining,
                &amount_out,
                asset_out,
                max_hops - 1,
                max_num_results,
                &next_current,
                original_amount_in,
                best_trades,
            )?;
        }
    }
    Ok(())
}

/// Finds the top trades delivering a fixed `amount_out` from `asset_in`,
/// walking candidate routes backward from the output side.
pub fn best_trade_exact_out(
    pools: &[Pool],
    asset_in: &Asset,
    amount_out: &AssetAmount,
    options: &BestTradeOptions,
) -> Result<Vec<Trade>> {
    let mut best_trades = Vec::new();
    best_trade_exact_out_inner(
        pools,
        asset_in,
        amount_out,
        options.max_hops,
        options.max_num_results,
        &[],
        amount_out,
        &mut best_trades,
    )?;
    Ok(best_trades)
}

#[allow(clippy::too_many_arguments)]
fn best_trade_exact_out_inner(
    pools: &[Pool],
    asset_in: &Asset,
    amount_out: &AssetAmount,
    max_hops: usize,
    max_num_results: usize,
    current_pools: &[Pool],
    original_amount_out: &AssetAmount,
    best_trades: &mut Vec<Trade>,
) -> Result<()> {
    if pools.is_empty() {
        return Err(Error::NoPools);
    }
    if max_hops == 0 {
        return Err(Error::MaxHopsExhausted);
    }
    if amount_out != original_amount_out && current_pools.is_empty() {
        return Err(Error::InvalidRecursion);
    }
    for (i, pool) in pools.iter().enumerate() {
        if !pool.involves(amount_out.asset()) {
            continue;
        }
        if pool.reserve0().raw().is_zero() || pool.reserve1().raw().is_zero() {
            continue;
        }
        let (amount_in, _) = match pool.swap_given_output(amount_out) {
            Ok(result) => result,
            // The pool cannot be drained for this output; prune the branch.
            Err(Error::InsufficientReserves | Error::InsufficientInputAmount) => continue,
            Err(e) => return Err(e),
        };
        if amount_in.asset() == asset_in {
            let mut route_pools = vec![pool.clone()];
            route_pools.extend_from_slice(current_pools);
            let route = match Route::new(route_pools, asset_in, original_amount_out.asset()) {
                Ok(route) => route,
                Err(Error::CyclicRoute) => continue,
                Err(e) => return Err(e),
            };
            let trade = Trade::exact_out(route, original_amount_out)?;
            sorted_insert(best_trades, trade, max_num_results, trade_comparator)?;
        } else if max_hops > 1 && pools.len() > 1 {
            let remaining: Vec<Pool> = pools[..i]
                .iter()
                .chain(pools[i + 1..].iter())
                .cloned()
                .collect();
            let mut next_current = vec![pool.clone()];
            next_current.extend_from_slice(current_pools);
            best_trade_exact_out_inner(
                &remaining,
                asset_in,
                &amount_in,
                max_hops - 1,
                max_num_results,
                &next_current,
                original_amount_out,
                best_trades,
            )?;
        }
    }
    Ok(())
}
