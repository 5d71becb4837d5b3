//! Major/minor unit conversion.
//!
//! All arithmetic is done in `Decimal`. Float inputs are only ever rendered
//! to text and parsed back, so `0.1 + 0.2`-style representation error cannot
//! reach the cent boundary.

use rust_decimal::prelude::*;

use super::error::{Direction, MoneyError};
use super::input::AmountInput;
use super::pattern::{self, is_major_text, is_minor_text};

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Fraction digits of a major unit amount.
pub const MAJOR_SCALE: u32 = 2;

/// Half-up for the non-negative amounts accepted here.
pub(crate) const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Stateless major/minor unit converter.
///
/// Every method is a pure function of its input; the type only groups them.
pub struct MoneyConverter;

impl MoneyConverter {
    /// See [`pattern::is_major_unit`].
    pub fn is_major_unit(value: impl AmountInput) -> bool {
        pattern::is_major_unit(value)
    }

    /// See [`pattern::is_positive_major_unit`].
    pub fn is_positive_major_unit(value: impl AmountInput) -> bool {
        pattern::is_positive_major_unit(value)
    }

    /// See [`pattern::is_minor_unit`].
    pub fn is_minor_unit(value: impl AmountInput) -> bool {
        pattern::is_minor_unit(value)
    }

    /// See [`major_to_minor`].
    pub fn major_to_minor(value: impl AmountInput) -> Result<i64, MoneyError> {
        major_to_minor(value)
    }

    /// See [`minor_to_major`].
    pub fn minor_to_major(value: impl AmountInput) -> Result<String, MoneyError> {
        minor_to_major(value)
    }
}

/// Converts a major unit amount to minor units.
///
/// Accepts `"1"`, `"1.2"` and `"1.23"` style input and rounds half-up after
/// scaling by 100.
///
/// # Errors
///
/// - [`MoneyError::InvalidFormat`] if `value` is not a major unit amount.
/// - [`MoneyError::Conversion`] if the amount does not fit a `Decimal` or
///   the result does not fit an `i64`.
///
/// # Example
///
/// ```
/// use centum_core::money::major_to_minor;
///
/// assert_eq!(major_to_minor("19.99").unwrap(), 1999);
/// assert!(major_to_minor("1.234").is_err());
/// ```
pub fn major_to_minor(value: impl AmountInput) -> Result<i64, MoneyError> {
    let text = value.amount_text();
    if !is_major_text(&text) {
        tracing::debug!(input = %text, "Rejected major unit amount");
        return Err(MoneyError::invalid_format(Direction::MajorToMinor, &*text));
    }

    scale_to_minor(&text).map_err(|source| {
        tracing::error!(input = %text, error = %source, "Major to minor conversion failed");
        MoneyError::conversion(Direction::MajorToMinor, &*text, source)
    })
}

/// Converts a minor unit amount to its major unit string with exactly two
/// fraction digits.
///
/// # Errors
///
/// - [`MoneyError::InvalidFormat`] if `value` is not digits only. Negative
///   integers fail here since their text carries a sign.
/// - [`MoneyError::Conversion`] if the digits exceed the `Decimal` range.
///
/// # Example
///
/// ```
/// use centum_core::money::minor_to_major;
///
/// assert_eq!(minor_to_major(150).unwrap(), "1.50");
/// assert_eq!(minor_to_major("7").unwrap(), "0.07");
/// ```
pub fn minor_to_major(value: impl AmountInput) -> Result<String, MoneyError> {
    let text = value.amount_text();
    if !is_minor_text(&text) {
        tracing::debug!(input = %text, "Rejected minor unit amount");
        return Err(MoneyError::invalid_format(Direction::MinorToMajor, &*text));
    }

    let minor = Decimal::from_str_exact(&text).map_err(|source| {
        tracing::error!(input = %text, error = %source, "Minor to major conversion failed");
        MoneyError::conversion(Direction::MinorToMajor, &*text, source)
    })?;

    Ok(divide_to_major(minor).to_string())
}

/// Parses text already matched against the major unit pattern.
pub(crate) fn parse_major(text: &str) -> Result<Decimal, rust_decimal::Error> {
    // "1." is accepted by the pattern but not by the decimal parser.
    Decimal::from_str_exact(text.strip_suffix('.').unwrap_or(text))
}

/// `amount * 100`, rounded half-up to a whole number of minor units.
pub(crate) fn to_minor_units(amount: Decimal) -> Result<Decimal, rust_decimal::Error> {
    amount
        .checked_mul(Decimal::from(MINOR_PER_MAJOR))
        .map(|scaled| scaled.round_dp_with_strategy(0, ROUNDING))
        .ok_or(rust_decimal::Error::ExceedsMaximumPossibleValue)
}

/// `minor / 100`, rounded half-up and rescaled to exactly two fraction digits.
pub(crate) fn divide_to_major(minor: Decimal) -> Decimal {
    let mut major =
        (minor / Decimal::from(MINOR_PER_MAJOR)).round_dp_with_strategy(MAJOR_SCALE, ROUNDING);
    major.rescale(MAJOR_SCALE);
    major
}

/// Rescales to exactly two fraction digits.
///
/// `rescale` keeps a smaller scale when the mantissa would overflow, which
/// happens for whole parts of 28 digits and more.
pub(crate) fn rescale_major(mut amount: Decimal) -> Result<Decimal, rust_decimal::Error> {
    amount.rescale(MAJOR_SCALE);
    if amount.scale() == MAJOR_SCALE {
        Ok(amount)
    } else {
        Err(rust_decimal::Error::ScaleExceedsMaximumPrecision(MAJOR_SCALE))
    }
}

fn scale_to_minor(text: &str) -> Result<i64, rust_decimal::Error> {
    let minor = to_minor_units(parse_major(text)?)?;
    minor
        .to_i64()
        .ok_or_else(|| rust_decimal::Error::ConversionTo("i64".to_string()))
}
