//! Order and order line types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopkeep_core::Amount;

use crate::error::OrderError;

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Amount,
}

impl OrderLine {
    pub fn new(product_name: impl Into<String>, quantity: u32, unit_price: Amount) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// quantity × unit price, or `None` if it overflows
    pub fn cost(&self) -> Option<Amount> {
        self.unit_price.checked_times(self.quantity)
    }
}

/// A customer's order
///
/// Lines keep their insertion order. Totaling treats the order as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer: String,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Create an order with no lines
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: OrderLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total owed for this order. See [`crate::calculate_outstanding`].
    ///
    /// # Panics
    /// Panics if the total does not fit in a [`Decimal`]. Use
    /// [`Order::checked_outstanding`] to handle that case.
    pub fn outstanding(&self) -> Decimal {
        crate::total::calculate_outstanding(self)
    }

    /// Total owed for this order, or `None` on overflow.
    pub fn checked_outstanding(&self) -> Option<Decimal> {
        crate::total::checked_outstanding(self)
    }
}

/// Builder for orders with validation
pub struct OrderBuilder {
    customer: Option<String>,
    lines: Vec<(String, u32, Decimal)>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            customer: None,
            lines: Vec::new(),
        }
    }

    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn line(
        mut self,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        self.lines.push((product_name.into(), quantity, unit_price));
        self
    }

    pub fn build(self) -> Result<Order, OrderError> {
        let customer = self
            .customer
            .filter(|c| !c.trim().is_empty())
            .ok_or(OrderError::EmptyCustomer)?;

        let mut order = Order::new(customer);
        for (index, (product_name, quantity, unit_price)) in self.lines.into_iter().enumerate() {
            if product_name.trim().is_empty() {
                return Err(OrderError::EmptyProductName(index));
            }
            let unit_price = Amount::new(unit_price)?;
            order.lines.push(OrderLine::new(product_name, quantity, unit_price));
        }

        Ok(order)
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price(val: Decimal) -> Amount {
        Amount::new(val).unwrap()
    }

    #[test]
    fn test_line_cost() {
        let line = OrderLine::new("Widget", 5, price(dec!(10.00)));
        assert_eq!(line.cost().unwrap().value(), dec!(50.00));
    }

    #[test]
    fn test_zero_quantity_line_costs_nothing() {
        let line = OrderLine::new("Widget", 0, price(dec!(10.00)));
        assert!(line.cost().unwrap().is_zero());
    }

    #[test]
    fn test_line_cost_overflow() {
        let line = OrderLine::new("Widget", 2, price(Decimal::MAX));
        assert!(line.cost().is_none());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let order = Order::new("Acme Corp")
            .with_line(OrderLine::new("Widget", 5, price(dec!(10.00))))
            .with_line(OrderLine::new("Gadget", 2, price(dec!(25.00))));

        let names: Vec<_> = order.lines.iter().map(|l| l.product_name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget"]);
    }

    #[test]
    fn test_builder_success() {
        let order = OrderBuilder::new()
            .customer("Acme Corp")
            .line("Widget", 5, dec!(10.00))
            .build()
            .unwrap();

        assert_eq!(order.customer, "Acme Corp");
        assert_eq!(order.lines.len(), 1);
    }

    #[test]
    fn test_builder_rejects_missing_customer() {
        let result = OrderBuilder::new().line("Widget", 1, dec!(1)).build();
        assert_eq!(result, Err(OrderError::EmptyCustomer));

        let result = OrderBuilder::new().customer("   ").build();
        assert_eq!(result, Err(OrderError::EmptyCustomer));
    }

    #[test]
    fn test_builder_rejects_negative_price() {
        let result = OrderBuilder::new()
            .customer("Acme Corp")
            .line("Widget", 1, dec!(-10))
            .build();
        assert!(matches!(result, Err(OrderError::Amount(_))));
    }

    #[test]
    fn test_builder_rejects_blank_product() {
        let result = OrderBuilder::new()
            .customer("Acme Corp")
            .line("Widget", 1, dec!(1))
            .line("", 1, dec!(1))
            .build();
        assert_eq!(result, Err(OrderError::EmptyProductName(1)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let order =
            Order::new("Acme Corp").with_line(OrderLine::new("Widget", 2, price(dec!(10.00))));
        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, parsed);
    }
}
