//! Account configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::account::OVERDRAFT_LIMIT;
use crate::error::{AccountError, AccountResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// How far below zero the balance may go
    #[serde(default = "default_overdraft_limit")]
    pub overdraft_limit: Decimal,
}

fn default_overdraft_limit() -> Decimal {
    OVERDRAFT_LIMIT
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            overdraft_limit: default_overdraft_limit(),
        }
    }
}

impl AccountConfig {
    /// Load configuration from a JSON file and validate it
    pub fn from_file(path: &Path) -> AccountResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AccountError::Io(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| AccountError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AccountResult<()> {
        if self.overdraft_limit < Decimal::ZERO {
            return Err(AccountError::NegativeOverdraftLimit(self.overdraft_limit));
        }
        Ok(())
    }
}
