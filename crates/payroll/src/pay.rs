use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shopkeep_core::Rate;

use crate::employee::{Employee, PayStatus};

/// Share of salary paid to retired employees
pub const RETIRED_PAY_RATIO: Rate = Rate::new_unchecked(dec!(0.5));

/// Amount to pay an employee this period.
///
/// # Example
/// ```
/// use shopkeep_payroll::{pay_amount, Employee};
/// use rust_decimal::Decimal;
///
/// let salary = Decimal::new(4000, 0);
/// assert_eq!(pay_amount(&Employee::retired(salary)), Decimal::new(2000, 0));
/// assert_eq!(pay_amount(&Employee::separated(salary)), Decimal::ZERO);
/// ```
pub fn pay_amount(employee: &Employee) -> Decimal {
    match employee.status() {
        PayStatus::Separated => Decimal::ZERO,
        PayStatus::Retired => retired_amount(employee),
        PayStatus::Active => normal_pay_amount(employee),
    }
}

fn retired_amount(employee: &Employee) -> Decimal {
    RETIRED_PAY_RATIO.of(employee.salary)
}

fn normal_pay_amount(employee: &Employee) -> Decimal {
    employee.salary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_gets_nothing() {
        assert_eq!(pay_amount(&Employee::separated(dec!(3000))), Decimal::ZERO);
    }

    #[test]
    fn test_separated_wins_over_retired() {
        let employee = Employee {
            is_separated: true,
            is_retired: true,
            salary: dec!(3000),
        };
        assert_eq!(pay_amount(&employee), Decimal::ZERO);
    }

    #[test]
    fn test_retired_gets_half() {
        assert_eq!(pay_amount(&Employee::retired(dec!(4000))), dec!(2000));
        assert_eq!(pay_amount(&Employee::retired(dec!(1234.57))), dec!(617.285));
    }

    #[test]
    fn test_active_gets_full_salary() {
        assert_eq!(pay_amount(&Employee::active(dec!(4000))), dec!(4000));
    }
}
