use crate::amount::AssetAmount;
use crate::errors::{Error, Result};
use crate::pool::Pool;
use crate::price::Price;
use crate::rational::Rational;
use crate::route::Route;
use serde::{Deserialize, Serialize};

/// Which side of a trade is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// The result of simulating a [`Route`] for a fixed input or output amount.
///
/// Immutable once constructed; only the trade constructors and the router
/// produce these.
#[derive(Clone, Debug)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: AssetAmount,
    output_amount: AssetAmount,
    execution_price: Price,
    mid_price: Price,
    price_impact: Rational,
    post_swap_pools: Vec<Pool>,
}

impl Trade {
    /// Simulates spending exactly `amount_in` along the route.
    pub fn exact_in(route: Route, amount_in: &AssetAmount) -> Result<Trade> {
        if amount_in.asset() != route.input() {
            return Err(Error::AssetMismatch {
                expected: route.input().to_string(),
                actual: amount_in.asset().to_string(),
            });
        }
        let mut post_swap_pools = Vec::with_capacity(route.pools().len());
        let mut current = amount_in.clone();
        for pool in route.pools() {
            let (output, next_pool) = pool.swap_given_input(&current)?;
            post_swap_pools.push(next_pool);
            current = output;
        }
        Trade::finish(
            route,
            TradeType::ExactInput,
            amount_in.clone(),
            current,
            post_swap_pools,
        )
    }

    /// Simulates receiving exactly `amount_out`, walking the route backward
    /// to solve for the required input.
    pub fn exact_out(route: Route, amount_out: &AssetAmount) -> Result<Trade> {
        if amount_out.asset() != route.output() {
            return Err(Error::AssetMismatch {
                expected: route.output().to_string(),
                actual: amount_out.asset().to_string(),
            });
        }
        let mut post_swap_pools = Vec::with_capacity(route.pools().len());
        let mut current = amount_out.clone();
        for pool in route.pools().iter().rev() {
            let (input, next_pool) = pool.swap_given_output(&current)?;
            post_swap_pools.push(next_pool);
            current = input;
        }
        post_swap_pools.reverse();
        Trade::finish(
            route,
            TradeType::ExactOutput,
            current,
            amount_out.clone(),
            post_swap_pools,
        )
    }

    fn finish(
        route: Route,
        trade_type: TradeType,
        input_amount: AssetAmount,
        output_amount: AssetAmount,
        post_swap_pools: Vec<Pool>,
    ) -> Result<Trade> {
        let execution_price = Price::new(
            input_amount.asset().clone(),
            output_amount.asset().clone(),
            input_amount.raw(),
            output_amount.raw(),
        )?;
        let mid_price = route.mid_price().clone();
        // Fractional shortfall of the realized output against a zero-impact
        // trade at the route's spot price.
        let spot_output = mid_price.quote_amount(&input_amount)?;
        let price_impact = spot_output
            .raw()
            .subtract(output_amount.raw())
            .divide(spot_output.raw())?;
        Ok(Trade {
            route,
            trade_type,
            input_amount,
            output_amount,
            execution_price,
            mid_price,
            price_impact,
            post_swap_pools,
        })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &AssetAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &AssetAmount {
        &self.output_amount
    }

    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// The route's spot price at quote time.
    pub fn mid_price(&self) -> &Price {
        &self.mid_price
    }

    pub fn price_impact(&self) -> &Rational {
        &self.price_impact
    }

    /// The simulated post-swap state of each pool on the route, in route
    /// order.
    pub fn post_swap_pools(&self) -> &[Pool] {
        &self.post_swap_pools
    }

    /// Least output this trade may deliver under the given fractional
    /// slippage tolerance. Fixed-output trades return the output unchanged.
    pub fn minimum_amount_out(&self, tolerance: &Rational) -> Result<AssetAmount> {
        if tolerance.is_negative() {
            return Err(Error::NegativeSlippageTolerance);
        }
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let raw = self
                    .output_amount
                    .raw()
                    .divide(Rational::one().add(tolerance))?
                    .quotient();
                Ok(AssetAmount::new(self.output_amount.asset().clone(), raw))
            }
        }
    }

    /// Most input this trade may cost under the given fractional slippage
    /// tolerance. Fixed-input trades return the input unchanged.
    pub fn maximum_amount_in(&self, tolerance: &Rational) -> Result<AssetAmount> {
        if tolerance.is_negative() {
            return Err(Error::NegativeSlippageTolerance);
        }
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let raw = self
                    .input_amount
                    .raw()
                    .multiply(Rational::one().add(tolerance))
                    .quotient();
                Ok(AssetAmount::new(self.input_amount.asset().clone(), raw))
            }
        }
    }

    /// Execution price assuming the slippage tolerance is fully consumed.
    pub fn worst_execution_price(&self, tolerance: &Rational) -> Result<Price> {
        Price::new(
            self.input_amount.asset().clone(),
            self.output_amount.asset().clone(),
            self.maximum_amount_in(tolerance)?.raw(),
            self.minimum_amount_out(tolerance)?.raw(),
        )
    }
}
