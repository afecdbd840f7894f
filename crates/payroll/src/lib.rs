//! Shopkeep Payroll
//!
//! Pay is decided by the first guard that matches: separated employees get
//! nothing, retired employees get half their salary, everyone else gets
//! their full salary.

pub mod employee;
pub mod pay;

pub use employee::{Employee, PayStatus};
pub use pay::{pay_amount, RETIRED_PAY_RATIO};
