//! Pricing errors

use shopkeep_core::RateError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Senior age threshold ({senior}) must be above adult threshold ({adult})")]
    ThresholdOrder { senior: i32, adult: i32 },

    #[error("Invalid discount rate: {0}")]
    Rate(#[from] RateError),

    #[error("Failed to read pricing config: {0}")]
    Io(String),

    #[error("Invalid pricing config: {0}")]
    Parse(String),
}

pub type PricingResult<T> = Result<T, PricingError>;
