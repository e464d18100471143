use crate::amount::AssetAmount;
use crate::asset::Asset;
use crate::constants::{FEE_DENOMINATOR_BPS, MINIMUM_LIQUIDITY};
use crate::errors::{Error, Result};
use crate::price::Price;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A two-asset constant-product pool.
///
/// Pools are immutable value objects: a swap returns the computed amount
/// plus a fresh pool carrying the simulated post-swap reserves, and the
/// original is untouched. The two reserves are stored sorted by the
/// canonical asset ordering so `token0`/`token1` never depend on
/// constructor argument order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    id: String,
    assets: [AssetAmount; 2],
    swap_fee: Rational,
    protocol_fee_denominator: Rational,
}

impl Pool {
    /// `swap_fee` is in basis points on the 10_000 scale;
    /// `protocol_fee_denominator` is the `1/n` share of invariant growth
    /// collected by the protocol when fee collection is on.
    pub fn new(
        id: impl Into<String>,
        amount_a: AssetAmount,
        amount_b: AssetAmount,
        swap_fee: impl Into<Rational>,
        protocol_fee_denominator: impl Into<Rational>,
    ) -> Result<Self> {
        if amount_a.asset() == amount_b.asset() {
            return Err(Error::IdenticalAssets);
        }
        if amount_a.asset().chain_id != amount_b.asset().chain_id {
            return Err(Error::ChainMismatch);
        }
        let assets = if amount_a.asset().sorts_before(amount_b.asset()) {
            [amount_a, amount_b]
        } else {
            [amount_b, amount_a]
        };
        Ok(Pool {
            id: id.into(),
            assets,
            swap_fee: swap_fee.into(),
            protocol_fee_denominator: protocol_fee_denominator.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn chain_id(&self) -> u64 {
        self.assets[0].asset().chain_id
    }

    pub fn token0(&self) -> &Asset {
        self.assets[0].asset()
    }

    pub fn token1(&self) -> &Asset {
        self.assets[1].asset()
    }

    pub fn reserve0(&self) -> &AssetAmount {
        &self.assets[0]
    }

    pub fn reserve1(&self) -> &AssetAmount {
        &self.assets[1]
    }

    pub fn swap_fee(&self) -> &Rational {
        &self.swap_fee
    }

    pub fn protocol_fee_denominator(&self) -> &Rational {
        &self.protocol_fee_denominator
    }

    pub fn involves(&self, asset: &Asset) -> bool {
        self.token0() == asset || self.token1() == asset
    }

    pub fn reserve_of(&self, asset: &Asset) -> Result<&AssetAmount> {
        if self.token0() == asset {
            Ok(&self.assets[0])
        } else if self.token1() == asset {
            Ok(&self.assets[1])
        } else {
            Err(Error::WrongAsset(asset.to_string()))
        }
    }

    pub fn other_asset(&self, asset: &Asset) -> Result<&Asset> {
        if self.token0() == asset {
            Ok(self.token1())
        } else if self.token1() == asset {
            Ok(self.token0())
        } else {
            Err(Error::WrongAsset(asset.to_string()))
        }
    }

    /// Spot price of `asset` denominated in the pool's other asset.
    pub fn price_of(&self, asset: &Asset) -> Result<Price> {
        let other = self.other_asset(asset)?;
        Price::new(
            asset.clone(),
            other.clone(),
            self.reserve_of(asset)?.raw(),
            self.reserve_of(other)?.raw(),
        )
    }

    /// Swaps a fixed input amount, returning the output amount and a pool
    /// with the simulated post-swap reserves.
    pub fn swap_given_input(&self, input: &AssetAmount) -> Result<(AssetAmount, Pool)> {
        let reserve_in = self.reserve_of(input.asset())?;
        let out_asset = self.other_asset(input.asset())?.clone();
        let reserve_out = self.reserve_of(&out_asset)?;
        if reserve_in.raw().is_zero() || reserve_out.raw().is_zero() {
            return Err(Error::InsufficientReserves);
        }
        // Standard constant-product formula with the fee taken from the
        // input side, on the 10_000 basis-point scale.
        let effective_input = input
            .raw()
            .multiply(Rational::from(FEE_DENOMINATOR_BPS).subtract(&self.swap_fee));
        let numerator = effective_input.multiply(reserve_out.raw());
        let denominator = reserve_in
            .raw()
            .multiply(FEE_DENOMINATOR_BPS)
            .add(&effective_input);
        let output_raw = numerator.divide(denominator)?.quotient();
        if output_raw.is_zero() {
            return Err(Error::InsufficientInputAmount);
        }
        let output = AssetAmount::new(out_asset, output_raw);
        let next = Pool::new(
            self.id.clone(),
            reserve_in.add(input)?,
            reserve_out.subtract(&output)?,
            self.swap_fee.clone(),
            self.protocol_fee_denominator.clone(),
        )?;
        Ok((output, next))
    }

    /// Solves for the input required to receive a fixed output amount. The
    /// result is rounded up by one raw unit so paying exactly this input is
    /// never insufficient.
    pub fn swap_given_output(&self, output: &AssetAmount) -> Result<(AssetAmount, Pool)> {
        let reserve_out = self.reserve_of(output.asset())?;
        let in_asset = self.other_asset(output.asset())?.clone();
        let reserve_in = self.reserve_of(&in_asset)?;
        if reserve_in.raw().is_zero()
            || reserve_out.raw().is_zero()
            || output.raw() >= reserve_out.raw()
        {
            return Err(Error::InsufficientReserves);
        }
        let numerator = reserve_in
            .raw()
            .multiply(output.raw())
            .multiply(FEE_DENOMINATOR_BPS);
        let denominator = reserve_out
            .raw()
            .subtract(output.raw())
            .multiply(Rational::from(FEE_DENOMINATOR_BPS).subtract(&self.swap_fee));
        let input_raw = numerator.divide(denominator)?.quotient() + BigInt::from(1);
        let input = AssetAmount::new(in_asset, input_raw);
        let next = Pool::new(
            self.id.clone(),
            reserve_in.add(&input)?,
            reserve_out.subtract(output)?,
            self.swap_fee.clone(),
            self.protocol_fee_denominator.clone(),
        )?;
        Ok((input, next))
    }

    /// LP shares minted for depositing `amount0`/`amount1` against the
    /// current reserves, given the LP token's `total_supply`. The first mint
    /// burns [`MINIMUM_LIQUIDITY`] shares.
    pub fn liquidity_minted(
        &self,
        total_supply: &Rational,
        amount0: &AssetAmount,
        amount1: &AssetAmount,
    ) -> Result<Rational> {
        let (amount0, amount1) = if amount0.asset() == self.token0() {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };
        if amount0.asset() != self.token0() || amount1.asset() != self.token1() {
            return Err(Error::WrongAsset(amount1.asset().to_string()));
        }
        let liquidity = if total_supply.is_zero() {
            let k = amount0.raw().multiply(amount1.raw()).quotient();
            Rational::from(k.sqrt() - BigInt::from(MINIMUM_LIQUIDITY))
        } else {
            let share0 = amount0
                .raw()
                .multiply(total_supply)
                .divide(self.reserve0().raw())?;
            let share1 = amount1
                .raw()
                .multiply(total_supply)
                .divide(self.reserve1().raw())?;
            let min = if share0 < share1 { share0 } else { share1 };
            Rational::from(min.quotient())
        };
        if liquidity <= Rational::zero() {
            return Err(Error::InsufficientInputAmount);
        }
        Ok(liquidity)
    }

    /// The reserve share a `liquidity` holding is worth, diluted by the
    /// pending protocol-fee mint when `k_last` (the invariant at the last
    /// fee settlement) is supplied.
    pub fn liquidity_value(
        &self,
        asset: &Asset,
        total_supply: &Rational,
        liquidity: &Rational,
        k_last: Option<&Rational>,
    ) -> Result<AssetAmount> {
        let reserve = self.reserve_of(asset)?;
        if liquidity > total_supply {
            return Err(Error::InsufficientReserves);
        }
        let mut adjusted_supply = total_supply.clone();
        if let Some(k_last) = k_last {
            if !k_last.is_zero() {
                let k = self.reserve0().raw().multiply(self.reserve1().raw());
                let root_k = k.quotient().sqrt();
                let root_k_last = k_last.quotient().sqrt();
                if root_k > root_k_last {
                    let numerator = total_supply.multiply(&root_k - &root_k_last);
                    let denominator = Rational::from(&root_k)
                        .multiply(self.protocol_fee_denominator.subtract(1u32))
                        .add(&root_k_last);
                    let fee_liquidity = numerator.divide(denominator)?.quotient();
                    adjusted_supply = adjusted_supply.add(fee_liquidity);
                }
            }
        }
        let value = reserve
            .raw()
            .multiply(liquidity)
            .divide(&adjusted_supply)?
            .quotient();
        Ok(AssetAmount::new(asset.clone(), value))
    }
}
