//! Shopkeep Core - Domain types
//!
//! This crate contains the value types shared across Shopkeep:
//! - `Amount`: Non-negative decimal wrapper for prices and totals
//! - `Rate`: Decimal fraction in `[0, 1]` (discounts, pay ratios)

pub mod amount;
pub mod rate;

pub use amount::{Amount, AmountError};
pub use rate::{Rate, RateError};
