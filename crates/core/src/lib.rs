//! Core conversion logic for Centum.
//!
//! This crate contains pure logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `money` - Major/minor currency unit validation and conversion

pub mod money;

pub use money::{MajorAmount, MinorAmount, MoneyConverter, MoneyError};
