//! Shopkeep Shipping
//!
//! - [`Address`]: street, city, state and postal code travelling as one value
//! - [`Recipient`]: a named addressee whose name can never be blank
//! - [`ship`]: produce a [`Shipment`] for an address

pub mod address;
pub mod error;
pub mod recipient;
pub mod shipment;

pub use address::Address;
pub use error::ShippingError;
pub use recipient::Recipient;
pub use shipment::{ship, Shipment};
