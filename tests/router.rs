use anyhow::Result;
use dex_router::{
    best_trade_exact_in, best_trade_exact_out, sorted_insert, trade_comparator, Asset,
    AssetAmount, BestTradeOptions, Error, Pool, Rational, Route, Trade, TradeType,
};
use num_bigint::BigInt;
use std::cmp::Ordering;

fn token(tag: u8, symbol: &str) -> Asset {
    Asset::token(1, format!("0x{:040x}", tag), 18, symbol)
}

fn amount(asset: &Asset, raw: impl Into<BigInt>) -> AssetAmount {
    AssetAmount::new(asset.clone(), raw.into())
}

fn pool(
    id: &str,
    asset_a: &Asset,
    reserve_a: impl Into<BigInt>,
    asset_b: &Asset,
    reserve_b: impl Into<BigInt>,
) -> Pool {
    Pool::new(
        id,
        amount(asset_a, reserve_a),
        amount(asset_b, reserve_b),
        30u32,
        6u32,
    )
    .unwrap()
}

fn abc() -> (Asset, Asset, Asset) {
    (token(1, "AAA"), token(2, "BBB"), token(3, "CCC"))
}

#[test]
fn route_rejects_disjoint_pool_chains() {
    let (a, b, c) = abc();
    let d = token(4, "DDD");
    let pools = vec![pool("ab", &a, 1000, &b, 1000), pool("cd", &c, 1000, &d, 1000)];
    let err = Route::new(pools, &a, &d).unwrap_err();
    assert!(matches!(err, Error::DisjointRoute(1)));
}

#[test]
fn route_rejects_cycles() {
    let (a, b, _) = abc();
    let pools = vec![pool("ab1", &a, 1000, &b, 1000), pool("ab2", &a, 900, &b, 1100)];
    let err = Route::new(pools, &a, &a).unwrap_err();
    assert_eq!(err, Error::CyclicRoute);
}

#[test]
fn route_mid_price_composes_across_hops() -> Result<()> {
    let (a, b, c) = abc();
    let pools = vec![pool("ab", &a, 100, &b, 200), pool("bc", &b, 100, &c, 300)];
    let route = Route::new(pools, &a, &c)?;
    // 2 B per A times 3 C per B.
    assert_eq!(route.mid_price().value(), &Rational::from_integer(6));
    assert_eq!(route.path().len(), 3);
    Ok(())
}

#[test]
fn trade_reports_exact_price_impact() -> Result<()> {
    let (a, _, c) = abc();
    let route = Route::new(vec![pool("ac", &a, 1000, &c, 1000)], &a, &c)?;
    let trade = Trade::exact_in(route, &amount(&a, 100))?;
    // Spot output would be 100; realized is 90.
    assert_eq!(trade.output_amount().raw(), &Rational::from_integer(90));
    assert_eq!(trade.price_impact(), &Rational::new(1, 10)?);
    assert_eq!(trade.execution_price().value(), &Rational::new(90, 100)?);
    Ok(())
}

#[test]
fn slippage_bounds_only_move_the_unfixed_side() -> Result<()> {
    let (a, _, c) = abc();
    let five_percent = Rational::new(1, 20)?;

    let route = Route::new(vec![pool("ac", &a, 1000, &c, 1000)], &a, &c)?;
    let exact_in = Trade::exact_in(route.clone(), &amount(&a, 100))?;
    assert_eq!(exact_in.maximum_amount_in(&five_percent)?, amount(&a, 100));
    // floor(90 * 20 / 21) = 85
    assert_eq!(exact_in.minimum_amount_out(&five_percent)?, amount(&c, 85));

    let exact_out = Trade::exact_out(route, &amount(&c, 90))?;
    assert_eq!(exact_out.minimum_amount_out(&five_percent)?, amount(&c, 90));
    // floor(100 * 21 / 20) = 105
    assert_eq!(exact_out.maximum_amount_in(&five_percent)?, amount(&a, 105));

    let err = exact_out
        .maximum_amount_in(&Rational::new(-1, 20)?)
        .unwrap_err();
    assert_eq!(err, Error::NegativeSlippageTolerance);
    Ok(())
}

#[test]
fn post_swap_pools_reflect_simulated_reserves() -> Result<()> {
    let (a, _, c) = abc();
    let route = Route::new(vec![pool("ac", &a, 1000, &c, 1000)], &a, &c)?;
    let trade = Trade::exact_in(route, &amount(&a, 100))?;
    let next = &trade.post_swap_pools()[0];
    assert_eq!(next.reserve_of(&a)?.raw(), &Rational::from_integer(1100));
    assert_eq!(next.reserve_of(&c)?.raw(), &Rational::from_integer(910));
    Ok(())
}

#[test]
fn no_path_returns_empty_not_error() -> Result<()> {
    let (a, b, c) = abc();
    let d = token(4, "DDD");
    let pools = vec![
        pool("ab", &a, 1000, &b, 1000),
        pool("ad", &a, 1000, &d, 1000),
        pool("bd", &b, 1000, &d, 1000),
    ];
    let trades = best_trade_exact_in(&pools, &amount(&a, 100), &c, &BestTradeOptions::default())?;
    assert!(trades.is_empty());
    Ok(())
}

#[test]
fn empty_pool_list_is_an_error() {
    let (a, _, c) = abc();
    let err =
        best_trade_exact_in(&[], &amount(&a, 100), &c, &BestTradeOptions::default()).unwrap_err();
    assert_eq!(err, Error::NoPools);
}

#[test]
fn zero_max_hops_is_an_error() {
    let (a, b, c) = abc();
    let pools = vec![pool("ab", &a, 1000, &b, 1000)];
    let options = BestTradeOptions {
        max_hops: 0,
        ..Default::default()
    };
    let err = best_trade_exact_in(&pools, &amount(&a, 100), &c, &options).unwrap_err();
    assert_eq!(err, Error::MaxHopsExhausted);
}

#[test]
fn hop_limit_bounds_the_search() -> Result<()> {
    let (a, b, c) = abc();
    let pools = vec![
        pool("ab", &a, 1000, &b, 1000),
        pool("ac", &a, 1000, &c, 1100),
        pool("bc", &b, 1200, &c, 1000),
    ];
    let direct_only = best_trade_exact_in(
        &pools,
        &amount(&a, 100),
        &c,
        &BestTradeOptions {
            max_hops: 1,
            ..Default::default()
        },
    )?;
    assert_eq!(direct_only.len(), 1);
    assert_eq!(direct_only[0].route().pools().len(), 1);
    assert_eq!(direct_only[0].route().pools()[0].id(), "ac");

    let two_hops = best_trade_exact_in(
        &pools,
        &amount(&a, 100),
        &c,
        &BestTradeOptions {
            max_hops: 2,
            ..Default::default()
        },
    )?;
    assert_eq!(two_hops.len(), 2);
    // The direct hop delivers more output for this reserve set and ranks first.
    assert_eq!(two_hops[0].route().pools().len(), 1);
    assert_eq!(two_hops[1].route().pools().len(), 2);
    assert!(two_hops[0].output_amount().raw() >= two_hops[1].output_amount().raw());
    Ok(())
}

#[test]
fn max_num_results_caps_without_reordering() -> Result<()> {
    let (a, b, c) = abc();
    let d = token(4, "DDD");
    let pools = vec![
        pool("ac", &a, 1000, &c, 1100),
        pool("ab", &a, 1000, &b, 1000),
        pool("bc", &b, 1200, &c, 1000),
        pool("ad", &a, 1000, &d, 1000),
        pool("dc", &d, 1000, &c, 1000),
    ];
    let top_one = best_trade_exact_in(
        &pools,
        &amount(&a, 100),
        &c,
        &BestTradeOptions {
            max_num_results: 1,
            ..Default::default()
        },
    )?;
    let top_three = best_trade_exact_in(
        &pools,
        &amount(&a, 100),
        &c,
        &BestTradeOptions {
            max_num_results: 3,
            ..Default::default()
        },
    )?;
    assert_eq!(top_one.len(), 1);
    assert!(top_three.len() <= 3);
    assert!(top_three.len() > top_one.len());
    assert_eq!(
        top_one[0].route().pools()[0].id(),
        top_three[0].route().pools()[0].id()
    );
    for pair in top_three.windows(2) {
        assert_ne!(trade_comparator(&pair[0], &pair[1]), Ordering::Greater);
    }
    Ok(())
}

#[test]
fn exact_out_finds_routes_and_never_under_delivers() -> Result<()> {
    let (a, _, c) = abc();
    let pools = vec![pool("ac", &a, 10_000, &c, 10_000)];
    let target = amount(&c, 500);
    let trades = best_trade_exact_out(&pools, &a, &target, &BestTradeOptions::default())?;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].trade_type(), TradeType::ExactOutput);
    assert_eq!(trades[0].output_amount(), &target);

    // Spend the quoted input as an exact-input trade: at least the original
    // target must come out.
    let quoted_in = trades[0].input_amount().clone();
    let round_trip = best_trade_exact_in(&pools, &quoted_in, &c, &BestTradeOptions::default())?;
    assert_eq!(round_trip.len(), 1);
    assert!(round_trip[0].output_amount().raw() >= target.raw());
    Ok(())
}

#[test]
fn exact_out_skips_pools_it_would_drain() -> Result<()> {
    let (a, b, c) = abc();
    // The direct pool cannot produce 800 C; only the two-hop route can.
    let pools = vec![
        pool("ac", &a, 1000, &c, 700),
        pool("ab", &a, 100_000, &b, 100_000),
        pool("bc", &b, 100_000, &c, 100_000),
    ];
    let trades = best_trade_exact_out(&pools, &a, &amount(&c, 800), &BestTradeOptions::default())?;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].route().pools().len(), 2);
    Ok(())
}

#[test]
fn parallel_pools_over_one_pair_do_not_abort_the_search() -> Result<()> {
    // Two venues for A–B let the walk double back A->B->A; those candidates
    // must be pruned, leaving the direct route.
    let (a, b, c) = abc();
    let pools = vec![
        pool("ab1", &a, 1000, &b, 1000),
        pool("ab2", &a, 900, &b, 1100),
        pool("ac", &a, 1000, &c, 1000),
    ];
    let trades = best_trade_exact_in(&pools, &amount(&a, 100), &c, &BestTradeOptions::default())?;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].route().pools()[0].id(), "ac");
    Ok(())
}

#[test]
fn parallel_pools_still_allow_valid_multi_hop_routes() -> Result<()> {
    let (a, b, c) = abc();
    let pools = vec![
        pool("ab1", &a, 1000, &b, 1000),
        pool("ab2", &a, 900, &b, 1100),
        pool("ac", &a, 1000, &c, 1000),
        pool("bc", &b, 1000, &c, 1000),
    ];
    let trades = best_trade_exact_in(&pools, &amount(&a, 100), &c, &BestTradeOptions::default())?;
    // One route per venue plus the direct hop; the doubled-back paths are
    // gone but every simple path survives.
    assert_eq!(trades.len(), 3);
    assert_eq!(trades[0].route().pools()[0].id(), "ab2");
    assert_eq!(trades[0].output_amount().raw(), &Rational::from_integer(98));
    assert_eq!(trades[1].route().pools()[0].id(), "ac");
    assert_eq!(trades[2].route().pools()[0].id(), "ab1");
    Ok(())
}

#[test]
fn exact_out_prunes_paths_that_double_back() -> Result<()> {
    let (a, b, c) = abc();
    let pools = vec![
        pool("ab1", &a, 1000, &b, 1000),
        pool("ab2", &a, 900, &b, 1100),
        pool("ac", &a, 1000, &c, 1000),
    ];
    let trades =
        best_trade_exact_out(&pools, &a, &amount(&c, 90), &BestTradeOptions::default())?;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].route().pools()[0].id(), "ac");
    Ok(())
}

#[test]
fn comparator_prefers_less_input_for_equal_output() -> Result<()> {
    let (a, _, c) = abc();
    let small = Route::new(vec![pool("p1", &a, 1000, &c, 1000)], &a, &c)?;
    let large = Route::new(vec![pool("p2", &a, 2000, &c, 2000)], &a, &c)?;
    // Both deliver 90 C: 100 A into the 1000-pool, 95 A into the 2000-pool.
    let expensive = Trade::exact_in(small, &amount(&a, 100))?;
    let cheap = Trade::exact_in(large, &amount(&a, 95))?;
    assert_eq!(expensive.output_amount().raw(), cheap.output_amount().raw());
    assert_eq!(trade_comparator(&cheap, &expensive), Ordering::Less);
    assert_eq!(trade_comparator(&expensive, &cheap), Ordering::Greater);
    Ok(())
}

#[test]
fn sorted_insert_matches_a_full_sort() -> Result<()> {
    let values = [42, 7, 19, 3, 77, 19, 1, 56];
    let mut incremental: Vec<i32> = Vec::new();
    for v in values {
        sorted_insert(&mut incremental, v, values.len(), |a, b| a.cmp(b))?;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    assert_eq!(incremental, sorted);
    Ok(())
}

#[test]
fn sorted_insert_evicts_the_worst_kept_item() -> Result<()> {
    let mut items = vec![1, 3, 5];
    // Candidate sorting at or after the last item is rejected outright.
    assert_eq!(sorted_insert(&mut items, 9, 3, |a, b| a.cmp(b))?, Some(9));
    assert_eq!(items, vec![1, 3, 5]);
    // A better candidate displaces the previous worst.
    assert_eq!(sorted_insert(&mut items, 2, 3, |a, b| a.cmp(b))?, Some(5));
    assert_eq!(items, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn sorted_insert_validates_its_bounds() {
    let mut items: Vec<i32> = vec![];
    assert_eq!(
        sorted_insert(&mut items, 1, 0, |a, b| a.cmp(b)).unwrap_err(),
        Error::InvalidMaxSize
    );
    let mut overfull = vec![1, 2, 3];
    assert_eq!(
        sorted_insert(&mut overfull, 1, 2, |a, b| a.cmp(b)).unwrap_err(),
        Error::InvariantViolated
    );
}
