use crate::amount::AssetAmount;
use crate::asset::Asset;
use crate::errors::{Error, Result};
use crate::rational::{Format, Rational};
use num_bigint::BigInt;
use num_traits::pow;

/// An exchange rate from a base asset to a quote asset.
///
/// The rate is kept as the exact raw-unit ratio `numerator_raw /
/// denominator_raw`; the decimal scalar between the two assets is applied
/// only when rendering, so composed prices never accumulate decimal noise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Price {
    base: Asset,
    quote: Asset,
    value: Rational,
}

impl Price {
    /// Builds a price from raw-unit quantities: `denominator_raw` of the base
    /// asset buys `numerator_raw` of the quote asset.
    pub fn new(
        base: Asset,
        quote: Asset,
        denominator_raw: impl Into<Rational>,
        numerator_raw: impl Into<Rational>,
    ) -> Result<Self> {
        let value = numerator_raw.into().divide(denominator_raw)?;
        Ok(Price { base, quote, value })
    }

    pub fn base(&self) -> &Asset {
        &self.base
    }

    pub fn quote(&self) -> &Asset {
        &self.quote
    }

    /// The raw-unit ratio, unscaled by decimals.
    pub fn value(&self) -> &Rational {
        &self.value
    }

    pub fn invert(&self) -> Result<Price> {
        Ok(Price {
            base: self.quote.clone(),
            quote: self.base.clone(),
            value: self.value.invert()?,
        })
    }

    /// Composes two prices sharing a middle asset: `A→B` times `B→C` is
    /// `A→C`. Fails unless `self.quote` is `other.base`.
    pub fn multiply(&self, other: &Price) -> Result<Price> {
        if self.quote != other.base {
            return Err(Error::AssetMismatch {
                expected: self.quote.to_string(),
                actual: other.base.to_string(),
            });
        }
        Ok(Price {
            base: self.base.clone(),
            quote: other.quote.clone(),
            value: self.value.multiply(&other.value),
        })
    }

    /// Converts an amount of the base asset into the quote asset at this
    /// price, exactly (no flooring).
    pub fn quote_amount(&self, amount: &AssetAmount) -> Result<AssetAmount> {
        if amount.asset() != &self.base {
            return Err(Error::AssetMismatch {
                expected: self.base.to_string(),
                actual: amount.asset().to_string(),
            });
        }
        Ok(AssetAmount::new(
            self.quote.clone(),
            self.value.multiply(amount.raw()),
        ))
    }

    /// The human-readable rate: raw ratio corrected for the difference in
    /// decimals between base and quote.
    pub fn adjusted(&self) -> Rational {
        let scalar = Rational::from_integer(pow(BigInt::from(10), self.base.decimals as usize))
            .divide(Rational::from_integer(pow(
                BigInt::from(10),
                self.quote.decimals as usize,
            )))
            .expect("decimal scale is never zero");
        self.value.multiply(scalar)
    }

    pub fn to_fixed(&self, decimal_places: u32, format: &Format) -> String {
        self.adjusted().to_fixed(decimal_places, format)
    }

    pub fn to_significant(&self, significant_digits: u32, format: &Format) -> Result<String> {
        self.adjusted().to_significant(significant_digits, format)
    }
}
