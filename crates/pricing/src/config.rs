//! Pricing configuration
//!
//! Thresholds and rates default to the published tier constants and can be
//! overridden from a JSON file. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use shopkeep_core::Rate;
use std::path::Path;

use crate::error::{PricingError, PricingResult};
use crate::tier::{ADULT_AGE, ADULT_DISCOUNT, SENIOR_AGE, SENIOR_DISCOUNT, YOUTH_DISCOUNT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    // === Thresholds (strictly greater than) ===
    #[serde(default = "default_senior_age")]
    pub senior_age: i32,

    #[serde(default = "default_adult_age")]
    pub adult_age: i32,

    // === Rates ===
    #[serde(default = "default_senior_rate")]
    pub senior_rate: Rate,

    #[serde(default = "default_adult_rate")]
    pub adult_rate: Rate,

    #[serde(default = "default_youth_rate")]
    pub youth_rate: Rate,
}

fn default_senior_age() -> i32 {
    SENIOR_AGE
}

fn default_adult_age() -> i32 {
    ADULT_AGE
}

fn default_senior_rate() -> Rate {
    SENIOR_DISCOUNT
}

fn default_adult_rate() -> Rate {
    ADULT_DISCOUNT
}

fn default_youth_rate() -> Rate {
    YOUTH_DISCOUNT
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            senior_age: default_senior_age(),
            adult_age: default_adult_age(),
            senior_rate: default_senior_rate(),
            adult_rate: default_adult_rate(),
            youth_rate: default_youth_rate(),
        }
    }
}

impl PricingConfig {
    /// Load configuration from a JSON file and validate it
    pub fn from_file(path: &Path) -> PricingResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PricingError::Io(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| PricingError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded pricing config");
        Ok(config)
    }

    /// Tiers must not overlap: the senior threshold sits above the adult one.
    /// Every rate must lie in `[0, 1]`.
    pub fn validate(&self) -> PricingResult<()> {
        for rate in [self.senior_rate, self.adult_rate, self.youth_rate] {
            Rate::new(rate.value())?;
        }
        if self.senior_age <= self.adult_age {
            return Err(PricingError::ThresholdOrder {
                senior: self.senior_age,
                adult: self.adult_age,
            });
        }
        Ok(())
    }
}
