use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub is_separated: bool,
    pub is_retired: bool,
    pub salary: Decimal,
}

/// Employment status as seen by payroll.
///
/// Separation takes precedence over retirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PayStatus {
    Separated,
    Retired,
    Active,
}

impl Employee {
    pub fn active(salary: Decimal) -> Self {
        Self {
            is_separated: false,
            is_retired: false,
            salary,
        }
    }

    pub fn retired(salary: Decimal) -> Self {
        Self {
            is_retired: true,
            ..Self::active(salary)
        }
    }

    pub fn separated(salary: Decimal) -> Self {
        Self {
            is_separated: true,
            ..Self::active(salary)
        }
    }

    pub fn status(&self) -> PayStatus {
        if self.is_separated {
            return PayStatus::Separated;
        }
        if self.is_retired {
            return PayStatus::Retired;
        }
        PayStatus::Active
    }
}
