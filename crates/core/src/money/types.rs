//! Typed major and minor unit amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `MajorAmount` wraps `rust_decimal::Decimal`, `MinorAmount` a plain `u64`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::converter::{
    MAJOR_SCALE, divide_to_major, parse_major, rescale_major, to_minor_units,
};
use super::error::{Direction, MoneyError};
use super::pattern::{is_major_text, is_minor_text};

/// An amount in major units (yuan, dollars) with exactly two fraction digits.
///
/// Parsing goes through the same pattern as [`super::major_to_minor`]; the
/// value is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MajorAmount(Decimal);

/// An amount in minor units (fen, cents).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorAmount(u64);

impl MajorAmount {
    /// Zero major units, rendered `"0.00"`.
    #[must_use]
    pub fn zero() -> Self {
        let mut amount = Decimal::ZERO;
        amount.rescale(MAJOR_SCALE);
        Self(amount)
    }

    /// Returns the underlying decimal, scale 2.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is numerically zero.
    ///
    /// Unlike [`super::is_positive_major_unit`], this treats `"00"` as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Converts to minor units, rounding half-up.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Conversion`] if the result does not fit a `u64`.
    pub fn to_minor(&self) -> Result<MinorAmount, MoneyError> {
        to_minor_units(self.0)
            .and_then(|minor| {
                minor
                    .to_u64()
                    .ok_or_else(|| rust_decimal::Error::ConversionTo("u64".to_string()))
            })
            .map(MinorAmount)
            .map_err(|source| {
                MoneyError::conversion(Direction::MajorToMinor, self.to_string(), source)
            })
    }
}

impl MinorAmount {
    /// Creates a minor unit amount.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the number of minor units.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Converts to major units. Always exact.
    #[must_use]
    pub fn to_major(&self) -> MajorAmount {
        MajorAmount(divide_to_major(Decimal::from(self.0)))
    }
}

impl fmt::Display for MajorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MinorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MajorAmount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_major_text(s) {
            return Err(MoneyError::invalid_format(Direction::MajorToMinor, s));
        }
        parse_major(s)
            .and_then(rescale_major)
            .map(Self)
            .map_err(|source| MoneyError::conversion(Direction::MajorToMinor, s, source))
    }
}

impl FromStr for MinorAmount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_minor_text(s) {
            return Err(MoneyError::invalid_format(Direction::MinorToMajor, s));
        }
        Decimal::from_str_exact(s)
            .and_then(|value| {
                value
                    .to_u64()
                    .ok_or_else(|| rust_decimal::Error::ConversionTo("u64".to_string()))
            })
            .map(Self)
            .map_err(|source| MoneyError::conversion(Direction::MinorToMajor, s, source))
    }
}

impl TryFrom<String> for MajorAmount {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MajorAmount> for String {
    fn from(value: MajorAmount) -> Self {
        value.to_string()
    }
}

impl From<u64> for MinorAmount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<MinorAmount> for MajorAmount {
    fn from(value: MinorAmount) -> Self {
        value.to_major()
    }
}
