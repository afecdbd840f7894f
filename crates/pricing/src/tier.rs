//! Discount tiers and their default thresholds

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shopkeep_core::Rate;
use strum_macros::{Display, EnumString};

/// Customers strictly older than this are seniors
pub const SENIOR_AGE: i32 = 65;
/// Customers strictly older than this are adults
pub const ADULT_AGE: i32 = 18;

pub const SENIOR_DISCOUNT: Rate = Rate::new_unchecked(dec!(0.15));
pub const ADULT_DISCOUNT: Rate = Rate::new_unchecked(dec!(0.10));
pub const YOUTH_DISCOUNT: Rate = Rate::new_unchecked(dec!(0.05));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    Senior,
    Adult,
    Youth,
}

impl DiscountTier {
    /// Tier for an age using the default thresholds.
    pub fn for_age(age: i32) -> Self {
        if age > SENIOR_AGE {
            return DiscountTier::Senior;
        }
        if age > ADULT_AGE {
            return DiscountTier::Adult;
        }
        DiscountTier::Youth
    }

    /// Default rate for this tier
    pub fn rate(&self) -> Rate {
        match self {
            DiscountTier::Senior => SENIOR_DISCOUNT,
            DiscountTier::Adult => ADULT_DISCOUNT,
            DiscountTier::Youth => YOUTH_DISCOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_age_boundaries() {
        assert_eq!(DiscountTier::for_age(66), DiscountTier::Senior);
        assert_eq!(DiscountTier::for_age(65), DiscountTier::Adult);
        assert_eq!(DiscountTier::for_age(19), DiscountTier::Adult);
        assert_eq!(DiscountTier::for_age(18), DiscountTier::Youth);
        assert_eq!(DiscountTier::for_age(0), DiscountTier::Youth);
    }

    #[test]
    fn test_negative_age_is_youth() {
        assert_eq!(DiscountTier::for_age(-3), DiscountTier::Youth);
    }

    #[test]
    fn test_default_rates_within_bounds() {
        for tier in [DiscountTier::Senior, DiscountTier::Adult, DiscountTier::Youth] {
            let rate = tier.rate().value();
            assert!(Rate::new(rate).is_ok(), "{tier} rate out of range");
        }
        assert!(SENIOR_DISCOUNT > ADULT_DISCOUNT);
        assert!(ADULT_DISCOUNT > YOUTH_DISCOUNT);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(DiscountTier::Senior.to_string(), "senior");
        assert_eq!("youth".parse::<DiscountTier>().unwrap(), DiscountTier::Youth);
    }
}
