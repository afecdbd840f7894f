//! Shopkeep Account - Overdraft-bounded withdrawals
//!
//! An [`Account`] holds a single decimal balance. The only transition is
//! [`Account::withdraw`], guarded in this order:
//!
//! 1. amount must be positive, else [`AccountError::InvalidArgument`]
//! 2. `balance - amount` must not go below `-overdraft_limit`, else
//!    [`AccountError::InvalidOperation`]
//!
//! A rejected withdrawal leaves the balance untouched.

pub mod account;
pub mod config;
pub mod error;

pub use account::{Account, OVERDRAFT_LIMIT};
pub use config::AccountConfig;
pub use error::{AccountError, ErrorKind};
