//! Account errors

use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// The two ways a withdrawal can be refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input, e.g. a non-positive amount
    InvalidArgument,
    /// Valid input that would break an account invariant
    InvalidOperation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("amount must be positive: {amount}")]
    InvalidArgument { amount: Decimal },

    #[error("insufficient funds: balance {balance}, requested {requested}, overdraft limit {overdraft_limit}")]
    InvalidOperation {
        balance: Decimal,
        requested: Decimal,
        overdraft_limit: Decimal,
    },

    #[error("overdraft limit cannot be negative: {0}")]
    NegativeOverdraftLimit(Decimal),

    #[error("Failed to read account config: {0}")]
    Io(String),

    #[error("Invalid account config: {0}")]
    Parse(String),
}

impl AccountError {
    /// Classify the error so callers can match by kind.
    ///
    /// Configuration problems are reported as invalid arguments.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            AccountError::InvalidArgument { .. }
            | AccountError::NegativeOverdraftLimit(_)
            | AccountError::Io(_)
            | AccountError::Parse(_) => ErrorKind::InvalidArgument,
        }
    }
}

pub type AccountResult<T> = Result<T, AccountError>;
