//! Order totaling

use rust_decimal::Decimal;
use shopkeep_core::Amount;

use crate::order::Order;

/// Sum of `quantity × unit_price` over every line of the order.
///
/// An order with no lines owes zero. No rounding is applied beyond the
/// precision of [`Decimal`].
///
/// # Example
/// ```
/// use shopkeep_orders::{calculate_outstanding, Order, OrderLine};
/// use shopkeep_core::Amount;
/// use rust_decimal::Decimal;
///
/// let order = Order::new("Test Customer")
///     .with_line(OrderLine::new("Widget", 2, Amount::new(Decimal::new(1000, 2)).unwrap()))
///     .with_line(OrderLine::new("Gadget", 1, Amount::new(Decimal::new(1500, 2)).unwrap()));
///
/// assert_eq!(calculate_outstanding(&order), Decimal::new(3500, 2));
/// ```
///
/// # Panics
/// Panics if a line cost or the running total does not fit in a
/// [`Decimal`], the same contract as `Decimal`'s `+` and `*`. Use
/// [`checked_outstanding`] to handle that case.
pub fn calculate_outstanding(order: &Order) -> Decimal {
    match checked_outstanding(order) {
        Some(total) => total,
        None => panic!("outstanding total for {} overflowed", order.customer),
    }
}

/// Like [`calculate_outstanding`], returning `None` on overflow.
pub fn checked_outstanding(order: &Order) -> Option<Decimal> {
    order
        .lines
        .iter()
        .try_fold(Amount::ZERO, |total, line| total.checked_add(&line.cost()?))
        .map(|total| total.value())
}
