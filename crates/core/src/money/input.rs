//! Textual view of the values the converter accepts.
//!
//! Every check and conversion works on the decimal string form of its
//! input. Numbers are rendered with their `Display` impl, which never uses
//! exponent notation, so `1.5_f64` becomes `"1.5"` and `1e7_f64` becomes
//! `"10000000"`. `None` renders as the empty string.

use std::borrow::Cow;

/// A value that can be checked or converted as an amount.
pub trait AmountInput {
    /// Returns the string form the amount patterns are matched against.
    fn amount_text(&self) -> Cow<'_, str>;
}

impl AmountInput for str {
    fn amount_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AmountInput for String {
    fn amount_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: AmountInput + ?Sized> AmountInput for &T {
    fn amount_text(&self) -> Cow<'_, str> {
        (**self).amount_text()
    }
}

impl<T: AmountInput> AmountInput for Option<T> {
    fn amount_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.amount_text(),
            None => Cow::Borrowed(""),
        }
    }
}

macro_rules! display_amount_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AmountInput for $ty {
                fn amount_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_amount_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
