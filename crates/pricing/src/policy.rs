//! Discount policy

use rust_decimal::Decimal;
use shopkeep_core::Rate;

use crate::config::PricingConfig;
use crate::customer::Customer;
use crate::error::PricingResult;
use crate::tier::DiscountTier;

/// Maps a customer to a discount rate using configured tiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscountPolicy {
    config: PricingConfig,
}

impl DiscountPolicy {
    /// Create a policy from a validated config
    pub fn from_config(config: PricingConfig) -> PricingResult<Self> {
        config.validate()?;
        tracing::debug!(
            senior_age = config.senior_age,
            adult_age = config.adult_age,
            "Discount policy configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// First matching tier, highest threshold first
    pub fn tier_for(&self, age: i32) -> DiscountTier {
        if age > self.config.senior_age {
            return DiscountTier::Senior;
        }
        if age > self.config.adult_age {
            return DiscountTier::Adult;
        }
        DiscountTier::Youth
    }

    pub fn rate_for(&self, tier: DiscountTier) -> Rate {
        match tier {
            DiscountTier::Senior => self.config.senior_rate,
            DiscountTier::Adult => self.config.adult_rate,
            DiscountTier::Youth => self.config.youth_rate,
        }
    }

    pub fn discount(&self, customer: &Customer) -> Rate {
        self.rate_for(self.tier_for(customer.age))
    }

    /// `amount × (1 − rate)` for the customer's tier
    pub fn discounted(&self, customer: &Customer, amount: Decimal) -> Decimal {
        self.discount(customer).complement().of(amount)
    }
}

/// Discount rate for a customer under the default tiers.
///
/// # Example
/// ```
/// use shopkeep_pricing::{calculate_discount, Customer};
/// use rust_decimal::Decimal;
///
/// let rate = calculate_discount(&Customer::new("John Doe", 25));
/// assert_eq!(rate.value(), Decimal::new(10, 2));
/// ```
pub fn calculate_discount(customer: &Customer) -> Rate {
    DiscountTier::for_age(customer.age).rate()
}
