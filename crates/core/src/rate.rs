//! Rate - A decimal fraction bounded to `[0, 1]`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("Rate must be between 0 and 1: {0}")]
    OutOfRange(Decimal),
}

/// A fraction such as a discount rate.
///
/// # Invariant
/// `0 <= value <= 1`.
///
/// # Example
/// ```
/// use shopkeep_core::Rate;
/// use rust_decimal::Decimal;
///
/// let rate = Rate::new(Decimal::new(15, 2)).unwrap();
/// assert_eq!(rate.to_string(), "0.15");
/// assert!(Rate::new(Decimal::new(2, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self, RateError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            Err(RateError::OutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Build a rate from a compile-time constant.
    ///
    /// The caller MUST ensure the value is within `[0, 1]`. Configs that
    /// carry rates re-check them on validation.
    #[inline]
    pub const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// `1 - rate`
    pub fn complement(&self) -> Rate {
        Rate(Decimal::ONE - self.0)
    }

    /// Apply this rate to a decimal value.
    pub fn of(&self, value: Decimal) -> Decimal {
        self.0 * value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = RateError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}
