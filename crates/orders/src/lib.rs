//! Shopkeep Orders
//!
//! # Key Types
//! - `Order`: A customer identifier plus an ordered list of lines
//! - `OrderLine`: Product, quantity and unit price
//! - `OrderBuilder`: Validating constructor for orders
//!
//! Totaling lives in [`total`] and never fails: an order without lines
//! simply owes nothing.

pub mod error;
pub mod order;
pub mod total;

pub use error::OrderError;
pub use order::{Order, OrderBuilder, OrderLine};
pub use total::{calculate_outstanding, checked_outstanding};
