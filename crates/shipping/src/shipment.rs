//! Shipments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::address::Address;

/// A dispatched shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub destination: Address,
    pub created_at: DateTime<Utc>,
}

impl Shipment {
    /// `"Shipping to: {street}, {city}"`
    pub fn label(&self) -> String {
        format!("Shipping to: {}", self.destination)
    }
}

/// Ship to an address.
///
/// The whole address travels as one parameter rather than four loose strings.
pub fn ship(address: &Address) -> Shipment {
    let shipment = Shipment {
        id: Uuid::new_v4().to_string(),
        destination: address.clone(),
        created_at: Utc::now(),
    };
    tracing::info!(shipment_id = %shipment.id, destination = %address, "Shipment created");
    shipment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("742 Evergreen Terrace", "Springfield", "OR", "97403")
    }

    #[test]
    fn test_label() {
        let shipment = ship(&address());
        assert_eq!(shipment.label(), "Shipping to: 742 Evergreen Terrace, Springfield");
        assert_eq!(shipment.destination, address());
    }

    #[test]
    fn test_ids_unique() {
        let a = ship(&address());
        let b = ship(&address());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_roundtrip() {
        let shipment = ship(&address());
        let json = serde_json::to_string(&shipment).unwrap();
        let parsed: Shipment = serde_json::from_str(&json).unwrap();
        assert_eq!(shipment, parsed);
    }
}
