//! Property-based tests for major/minor conversion.
//!
//! - Round trip major -> minor -> major keeps the value at two decimals
//! - Round trip minor -> major -> minor is the identity
//! - Malformed major input is always rejected

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::*;

/// Valid major unit strings; at most 16 whole digits so the minor value fits an `i64`.
fn major_text() -> impl Strategy<Value = String> {
    "[0-9]{1,16}(\\.[0-9]{0,2})?"
}

/// Non-negative minor amounts across the whole `i64` range.
fn minor_value() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Round trips
    // =========================================================================

    /// *For any* valid major string, converting to minor and back yields the
    /// same numeric value rendered with exactly two fraction digits.
    #[test]
    fn prop_major_round_trip(text in major_text()) {
        let minor = major_to_minor(text.as_str()).unwrap();
        let back = minor_to_major(minor).unwrap();

        let (_, fraction) = back.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2, "{} should have two decimals", back);

        let original = Decimal::from_str(text.trim_end_matches('.')).unwrap();
        prop_assert_eq!(Decimal::from_str(&back).unwrap(), original);
    }

    /// *For any* non-negative integer, converting to major and back is the
    /// identity.
    #[test]
    fn prop_minor_round_trip(minor in minor_value()) {
        let major = minor_to_major(minor).unwrap();
        prop_assert_eq!(major_to_minor(major.as_str()).unwrap(), minor);
    }

    /// *For any* valid major string, the typed and string APIs agree.
    #[test]
    fn prop_typed_amount_matches_string_api(text in major_text()) {
        let typed = MajorAmount::from_str(&text).unwrap().to_minor().unwrap();
        let plain = major_to_minor(text.as_str()).unwrap();
        prop_assert_eq!(i64::try_from(typed.value()).unwrap(), plain);
    }

    /// Validity and convertibility coincide inside the `i64` range.
    #[test]
    fn prop_valid_iff_convertible(text in "[0-9.]{0,8}") {
        prop_assert_eq!(is_major_unit(text.as_str()), major_to_minor(text.as_str()).is_ok());
    }

    // =========================================================================
    // Rejections
    // =========================================================================

    #[test]
    fn prop_rejects_signs(text in "[0-9]{0,4}[+-][0-9]{0,4}(\\.[0-9]{0,2})?") {
        prop_assert!(!is_major_unit(text.as_str()));
        prop_assert!(!is_minor_unit(text.as_str()));
    }

    #[test]
    fn prop_rejects_multiple_points(text in "[0-9]{1,4}\\.[0-9]{0,2}\\.[0-9.]{0,3}") {
        prop_assert!(!is_major_unit(text.as_str()));
    }

    #[test]
    fn prop_rejects_three_or_more_fraction_digits(text in "[0-9]{1,6}\\.[0-9]{3,8}") {
        prop_assert!(!is_major_unit(text.as_str()));
        let rejected = matches!(
            major_to_minor(text.as_str()),
            Err(MoneyError::InvalidFormat { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_rejects_non_digits(text in "[0-9]{0,4}[a-zA-Z ,_#]{1,2}[0-9]{0,4}") {
        prop_assert!(!is_major_unit(text.as_str()));
        prop_assert!(!is_minor_unit(text.as_str()));
    }

    /// Negative integers carry a sign and never pass the minor pattern.
    #[test]
    fn prop_negative_minor_rejected(minor in i64::MIN..0i64) {
        let rejected = matches!(
            minor_to_major(minor),
            Err(MoneyError::InvalidFormat { .. })
        );
        prop_assert!(rejected);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_positive_major_unit_literal_forms() {
        assert!(!is_positive_major_unit("0"));
        assert!(!is_positive_major_unit("0.0"));
        assert!(!is_positive_major_unit("0.00"));
        assert!(is_positive_major_unit("1"));
    }

    /// "00" is numerically zero but is not one of the excluded literals.
    #[test]
    fn test_positive_major_unit_keeps_padded_zero() {
        assert!(is_positive_major_unit("00"));
        assert!("00".parse::<MajorAmount>().unwrap().is_zero());
    }
}
