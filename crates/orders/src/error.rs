//! Order errors

use shopkeep_core::AmountError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Customer identifier cannot be empty")]
    EmptyCustomer,

    #[error("Product name cannot be empty (line {0})")]
    EmptyProductName(usize),

    #[error("Invalid unit price: {0}")]
    Amount(#[from] AmountError),
}
