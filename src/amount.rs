use crate::asset::Asset;
use crate::errors::{Error, Result};
use crate::rational::{Format, Rational};
use num_bigint::BigInt;
use num_traits::pow;
use serde::{Deserialize, Serialize};

/// A quantity of one asset, denominated in its smallest unit.
///
/// `raw` usually holds a whole number of smallest units (denominator 1) but
/// stays a full [`Rational`] so intermediate math never loses precision.
/// Display helpers scale by `10^decimals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    asset: Asset,
    raw: Rational,
}

impl AssetAmount {
    pub fn new(asset: Asset, raw: impl Into<Rational>) -> Self {
        AssetAmount {
            asset,
            raw: raw.into(),
        }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn raw(&self) -> &Rational {
        &self.raw
    }

    fn require_same_asset(&self, other: &AssetAmount) -> Result<()> {
        if self.asset != other.asset {
            return Err(Error::AssetMismatch {
                expected: self.asset.to_string(),
                actual: other.asset.to_string(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &AssetAmount) -> Result<AssetAmount> {
        self.require_same_asset(other)?;
        Ok(AssetAmount {
            asset: self.asset.clone(),
            raw: self.raw.add(&other.raw),
        })
    }

    pub fn subtract(&self, other: &AssetAmount) -> Result<AssetAmount> {
        self.require_same_asset(other)?;
        Ok(AssetAmount {
            asset: self.asset.clone(),
            raw: self.raw.subtract(&other.raw),
        })
    }

    /// `10^decimals`, the ratio between one whole unit and one raw unit.
    pub fn decimal_scale(&self) -> Rational {
        Rational::from_integer(pow(BigInt::from(10), self.asset.decimals as usize))
    }

    pub fn to_fixed(&self, decimal_places: u32, format: &Format) -> Result<String> {
        let scaled = self.raw.divide(self.decimal_scale())?;
        Ok(scaled.to_fixed(decimal_places, format))
    }

    pub fn to_significant(&self, significant_digits: u32, format: &Format) -> Result<String> {
        let scaled = self.raw.divide(self.decimal_scale())?;
        scaled.to_significant(significant_digits, format)
    }
}
