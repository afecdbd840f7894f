//! Recipient with an encapsulated, validated name

use serde::Serialize;

use crate::address::Address;
use crate::error::ShippingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    name: String,
    pub address: Address,
}

impl Recipient {
    pub fn new(name: impl Into<String>, address: Address) -> Result<Self, ShippingError> {
        let name = validate_name(name.into())?;
        Ok(Self { name, address })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name. On error the previous name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ShippingError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }
}

fn validate_name(name: String) -> Result<String, ShippingError> {
    if name.trim().is_empty() {
        return Err(ShippingError::EmptyName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("1 Main St", "Springfield", "IL", "62701")
    }

    #[test]
    fn test_new_valid() {
        let recipient = Recipient::new("Acme Corp", address()).unwrap();
        assert_eq!(recipient.name(), "Acme Corp");
    }

    #[test]
    fn test_new_blank_rejected() {
        assert_eq!(Recipient::new("", address()), Err(ShippingError::EmptyName));
        assert_eq!(Recipient::new(" \t", address()), Err(ShippingError::EmptyName));
    }

    #[test]
    fn test_set_name_keeps_old_on_error() {
        let mut recipient = Recipient::new("Acme Corp", address()).unwrap();

        assert_eq!(recipient.set_name(""), Err(ShippingError::EmptyName));
        assert_eq!(recipient.name(), "Acme Corp");

        recipient.set_name("Globex").unwrap();
        assert_eq!(recipient.name(), "Globex");
    }
}
