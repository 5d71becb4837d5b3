//! Major/minor currency unit conversion.
//!
//! This module implements the conversion between a major unit amount
//! (`"19.99"` yuan) and a minor unit amount (`1999` fen):
//! - Pattern predicates for both representations
//! - String/number conversion in both directions
//! - Typed `MajorAmount` and `MinorAmount` values
//! - Error types for rejected and unconvertible input

pub mod converter;
pub mod error;
pub mod input;
pub mod pattern;
pub mod types;

#[cfg(test)]
mod converter_props;

pub use converter::{MoneyConverter, major_to_minor, minor_to_major};
pub use error::{Direction, MoneyError};
pub use input::AmountInput;
pub use pattern::{is_major_unit, is_minor_unit, is_positive_major_unit};
pub use types::{MajorAmount, MinorAmount};
