use crate::errors::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rounding applied when a value is cut to a fixed number of digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Toward zero.
    Down,
    /// Half away from zero.
    HalfUp,
    /// Away from zero.
    Up,
}

/// Display options for [`Rational::to_fixed`] and [`Rational::to_significant`].
#[derive(Clone, Debug)]
pub struct Format {
    pub rounding: Rounding,
    /// Inserted every three digits of the integer part when set.
    pub group_separator: Option<char>,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            rounding: Rounding::HalfUp,
            group_separator: None,
        }
    }
}

/// An arbitrary-precision fraction.
///
/// Fractions are never reduced: the numerator and denominator keep the exact
/// magnitudes the arithmetic produced, mirroring on-chain integer math.
/// Comparison and equality work by cross-multiplication, so `2/4 == 1/2`
/// even though the representations differ. Every operation returns a new
/// value; nothing mutates in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Rational {
            numerator: numerator.into(),
            denominator,
        })
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Rational {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Rational::from_integer(0)
    }

    pub fn one() -> Self {
        Rational::from_integer(1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative() != self.denominator.is_negative()
            && !self.numerator.is_zero()
    }

    pub fn add(&self, other: impl Into<Rational>) -> Rational {
        let other = other.into();
        if self.denominator == other.denominator {
            return Rational {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Rational {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn subtract(&self, other: impl Into<Rational>) -> Rational {
        let other = other.into();
        if self.denominator == other.denominator {
            return Rational {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Rational {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn multiply(&self, other: impl Into<Rational>) -> Rational {
        let other = other.into();
        Rational {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn divide(&self, other: impl Into<Rational>) -> Result<Rational> {
        let other = other.into();
        if other.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Rational {
            numerator: &self.numerator * &other.denominator,
            denominator: &self.denominator * &other.numerator,
        })
    }

    pub fn invert(&self) -> Result<Rational> {
        if self.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Rational {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        })
    }

    /// Integer quotient of the fraction, truncated toward zero (the same
    /// direction as on-chain big-integer division).
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// What `quotient` discards, still over the original denominator.
    pub fn remainder(&self) -> Rational {
        Rational {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// `self * 10^decimal_places`, rounded to an integer per `rounding`.
    fn rounded_scaled(&self, decimal_places: u32, rounding: Rounding) -> BigInt {
        let mut numerator = &self.numerator * pow10(decimal_places);
        let mut denominator = self.denominator.clone();
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;
        if remainder.is_zero() {
            return quotient;
        }
        let bump = if numerator.is_negative() {
            BigInt::from(-1)
        } else {
            BigInt::one()
        };
        match rounding {
            Rounding::Down => quotient,
            Rounding::Up => quotient + bump,
            Rounding::HalfUp => {
                if remainder.abs() * 2 >= denominator {
                    quotient + bump
                } else {
                    quotient
                }
            }
        }
    }

    /// Decimal string with exactly `decimal_places` digits after the point.
    pub fn to_fixed(&self, decimal_places: u32, format: &Format) -> String {
        let rounded = self.rounded_scaled(decimal_places, format.rounding);
        let negative = rounded.is_negative();
        let mut digits = rounded.abs().to_string();
        let places = decimal_places as usize;
        if digits.len() <= places {
            digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
        }
        let split = digits.len() - places;
        let integer_part = group_digits(&digits[..split], format.group_separator);
        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&integer_part);
        if places > 0 {
            out.push('.');
            out.push_str(&digits[split..]);
        }
        out
    }

    /// Decimal string rounded to `significant_digits` significant figures,
    /// with trailing fractional zeros trimmed.
    pub fn to_significant(&self, significant_digits: u32, format: &Format) -> Result<String> {
        if significant_digits == 0 {
            return Err(Error::InvalidSignificantDigits);
        }
        if self.numerator.is_zero() {
            return Ok("0".to_string());
        }
        let numerator = self.numerator.abs();
        let denominator = self.denominator.abs();
        let integer_digits = {
            let integer_part = &numerator / &denominator;
            if integer_part.is_zero() {
                0
            } else {
                integer_part.to_string().len()
            }
        };
        if integer_digits >= significant_digits as usize {
            // Rounding happens left of (or at) the decimal point.
            let drop = (integer_digits - significant_digits as usize) as u32;
            let scale = pow10(drop);
            let at_scale = Rational {
                numerator: self.numerator.clone(),
                denominator: &self.denominator * &scale,
            };
            let rounded = at_scale.rounded_scaled(0, format.rounding) * &scale;
            let negative = rounded.is_negative();
            let grouped = group_digits(&rounded.abs().to_string(), format.group_separator);
            return Ok(if negative {
                format!("-{grouped}")
            } else {
                grouped
            });
        }
        let decimal_places = if integer_digits > 0 {
            significant_digits - integer_digits as u32
        } else {
            // Count zeros between the point and the first significant digit.
            let mut leading = 0u32;
            let mut scaled = numerator.clone() * 10;
            while scaled < denominator {
                leading += 1;
                scaled *= 10;
            }
            significant_digits + leading
        };
        let fixed = self.to_fixed(decimal_places, format);
        Ok(trim_trailing_zeros(fixed))
    }
}

fn pow10(exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(10), exponent as usize)
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn trim_trailing_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        // Multiplying through both denominators flips the inequality when
        // exactly one of them is negative.
        if self.denominator.is_negative() != other.denominator.is_negative() {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Rational::from_integer(value.clone())
    }
}

impl From<&Rational> for Rational {
    fn from(value: &Rational) -> Self {
        value.clone()
    }
}

macro_rules! rational_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Rational::from_integer(BigInt::from(value))
            }
        }
    )*};
}

rational_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize);
