//! Shopkeep Pricing - Tiered customer discounts
//!
//! A customer's age selects the first matching tier, checked from the
//! highest threshold down:
//!
//! ```text
//! age > 65  → Senior  0.15
//! age > 18  → Adult   0.10
//! otherwise → Youth   0.05
//! ```
//!
//! Comparisons are strict, so 65 is Adult and 18 is Youth. Ages are not
//! validated; a negative age lands in the Youth tier.
//!
//! ## Key Components
//!
//! - [`config::PricingConfig`] - Configurable thresholds and rates
//! - [`policy::DiscountPolicy`] - Evaluates a customer against the tiers
//! - [`tier::DiscountTier`] - The three tiers and their default rates

pub mod config;
pub mod customer;
pub mod error;
pub mod policy;
pub mod tier;

pub use config::PricingConfig;
pub use customer::Customer;
pub use error::PricingError;
pub use policy::{calculate_discount, DiscountPolicy};
pub use tier::{
    DiscountTier, ADULT_AGE, ADULT_DISCOUNT, SENIOR_AGE, SENIOR_DISCOUNT, YOUTH_DISCOUNT,
};
