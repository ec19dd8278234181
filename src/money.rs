//! Fixed-point currency amounts parsed from receipt text.
//!
//! Uses `rust_decimal` so whole-dollar and quarter checks are exact instead of
//! depending on binary floating-point representation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A currency amount as written on a receipt.
///
/// Scale is preserved as parsed, so `"9.00"` displays as `9.00`. Surrounding
/// whitespace is not accepted.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use receipt_processor::Money;
///
/// let total = Money::from_str("9.00").unwrap();
/// assert!(total.is_whole());
/// assert!(total.is_multiple_of_quarter());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// 0.25
    const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

    /// Wraps a raw `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Returns `true` if the amount has no cents.
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Returns `true` if the amount is an exact multiple of 0.25.
    pub fn is_multiple_of_quarter(&self) -> bool {
        self.0
            .checked_rem(Self::QUARTER)
            .is_some_and(|rem| rem.is_zero())
    }

    /// Multiplies by `factor` and rounds up to the nearest integer.
    ///
    /// Returns `None` on overflow or when the result is negative.
    pub fn scaled_ceil(&self, factor: Decimal) -> Option<u64> {
        self.0.checked_mul(factor)?.ceil().to_u64()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
