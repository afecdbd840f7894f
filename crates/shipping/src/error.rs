use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingError {
    #[error("Recipient name cannot be empty")]
    EmptyName,
}
