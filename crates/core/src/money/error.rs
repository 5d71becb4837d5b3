//! Money conversion error types.

use std::fmt;

use centum_shared::AppError;
use thiserror::Error;

/// Which way a conversion was going when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Major unit (yuan, dollar) to minor unit (fen, cent).
    MajorToMinor,
    /// Minor unit to major unit.
    MinorToMajor,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MajorToMinor => write!(f, "major to minor"),
            Self::MinorToMajor => write!(f, "minor to major"),
        }
    }
}

/// Errors that can occur while validating or converting amounts.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// Input does not match the pattern required for its direction.
    #[error("Invalid amount format for {direction} conversion: {input:?}")]
    InvalidFormat {
        /// Conversion direction.
        direction: Direction,
        /// The rejected input, as text.
        input: String,
    },

    /// Input matched the pattern but the numeric conversion still failed.
    #[error("Failed {direction} conversion of {input:?}: {source}")]
    Conversion {
        /// Conversion direction.
        direction: Direction,
        /// The input, as text.
        input: String,
        /// Underlying decimal failure.
        #[source]
        source: rust_decimal::Error,
    },
}

impl MoneyError {
    pub(crate) fn invalid_format(direction: Direction, input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            direction,
            input: input.into(),
        }
    }

    pub(crate) fn conversion(
        direction: Direction,
        input: impl Into<String>,
        source: rust_decimal::Error,
    ) -> Self {
        Self::Conversion {
            direction,
            input: input.into(),
            source,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::Conversion { .. } => "CONVERSION_ERROR",
        }
    }

    /// Returns the direction of the failed conversion.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::InvalidFormat { direction, .. } | Self::Conversion { direction, .. } => {
                *direction
            }
        }
    }

    /// Returns the offending input text.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } | Self::Conversion { input, .. } => input,
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::InvalidFormat { .. } => Self::Validation(err.to_string()),
            MoneyError::Conversion { .. } => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_codes() {
        let invalid = MoneyError::invalid_format(Direction::MajorToMinor, "1.234");
        assert_eq!(invalid.error_code(), "INVALID_FORMAT");

        let conversion = MoneyError::conversion(
            Direction::MinorToMajor,
            "9",
            rust_decimal::Error::ExceedsMaximumPossibleValue,
        );
        assert_eq!(conversion.error_code(), "CONVERSION_ERROR");
    }

    #[test]
    fn test_error_display_includes_input() {
        let err = MoneyError::invalid_format(Direction::MinorToMajor, "12a");
        assert_eq!(
            err.to_string(),
            "Invalid amount format for minor to major conversion: \"12a\""
        );
        assert_eq!(err.input(), "12a");
        assert_eq!(err.direction(), Direction::MinorToMajor);
    }

    #[test]
    fn test_conversion_preserves_source() {
        let err = MoneyError::conversion(
            Direction::MajorToMinor,
            "1",
            rust_decimal::Error::ExceedsMaximumPossibleValue,
        );
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed major to minor conversion of \"1\""));
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = MoneyError::invalid_format(Direction::MajorToMinor, "x").into();
        assert!(app.is_client_error());

        let app: AppError = MoneyError::conversion(
            Direction::MajorToMinor,
            "1",
            rust_decimal::Error::ExceedsMaximumPossibleValue,
        )
        .into();
        assert_eq!(app.error_code(), "INTERNAL_ERROR");
    }
}
