//! Amount patterns and validation predicates.

use once_cell::sync::Lazy;
use regex::Regex;

use super::input::AmountInput;

/// Whole digits, optionally followed by `.` and at most two fraction digits.
pub const MAJOR_UNIT_PATTERN: &str = r"^[0-9]+(\.[0-9]{0,2})?$";

/// Digits only.
pub const MINOR_UNIT_PATTERN: &str = r"^[0-9]+$";

/// Zero forms excluded by [`is_positive_major_unit`]. Compared literally.
const LITERAL_ZEROS: [&str; 3] = ["0", "0.0", "0.00"];

static MAJOR_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAJOR_UNIT_PATTERN).expect("major unit pattern is valid"));

static MINOR_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(MINOR_UNIT_PATTERN).expect("minor unit pattern is valid"));

pub(crate) fn is_major_text(text: &str) -> bool {
    !text.trim().is_empty() && MAJOR_UNIT.is_match(text)
}

pub(crate) fn is_minor_text(text: &str) -> bool {
    MINOR_UNIT.is_match(text)
}

/// Returns true if `value` is a well-formed major unit amount.
///
/// Blank and `None` inputs are not amounts; they return false.
pub fn is_major_unit(value: impl AmountInput) -> bool {
    is_major_text(&value.amount_text())
}

/// Returns true if `value` is a major unit amount other than `"0"`,
/// `"0.0"` or `"0.00"`.
///
/// The exclusion is a string comparison against those three forms only:
/// `"00"` and `"000.00"` still pass.
pub fn is_positive_major_unit(value: impl AmountInput) -> bool {
    let text = value.amount_text();
    !LITERAL_ZEROS.contains(&text.as_ref()) && is_major_text(&text)
}

/// Returns true if `value` is a well-formed minor unit amount.
pub fn is_minor_unit(value: impl AmountInput) -> bool {
    is_minor_text(&value.amount_text())
}
