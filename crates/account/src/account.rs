//! Account with overdraft-bounded withdrawals

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::config::AccountConfig;
use crate::error::{AccountError, AccountResult};

/// Maximum amount the balance may go negative by default
pub const OVERDRAFT_LIMIT: Decimal = dec!(500);

/// A single balance with an overdraft allowance.
///
/// # Invariant
/// After any successful operation, `balance >= -overdraft_limit`.
///
/// # Example
/// ```
/// use shopkeep_account::{Account, ErrorKind};
/// use rust_decimal::Decimal;
///
/// let mut account = Account::new(Decimal::new(1000, 0));
/// account.withdraw(Decimal::new(100, 0)).unwrap();
/// assert_eq!(account.balance(), Decimal::new(900, 0));
///
/// let err = account.withdraw(Decimal::new(-50, 0)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    balance: Decimal,
    overdraft_limit: Decimal,
}

impl Account {
    /// Open an account with the default overdraft limit
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance,
            overdraft_limit: OVERDRAFT_LIMIT,
        }
    }

    /// Open an account with a configured overdraft limit
    pub fn with_config(balance: Decimal, config: &AccountConfig) -> AccountResult<Self> {
        config.validate()?;
        Ok(Self {
            balance,
            overdraft_limit: config.overdraft_limit,
        })
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Funds that can still be withdrawn, overdraft included.
    ///
    /// Returns `None` if the sum does not fit in a [`Decimal`].
    pub fn available(&self) -> Option<Decimal> {
        self.balance.checked_add(self.overdraft_limit)
    }

    /// Withdraw `amount`, leaving the balance unchanged on failure.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        let balance = match self.balance_after(amount) {
            Ok(balance) => balance,
            Err(err) => {
                tracing::warn!(
                    balance = %self.balance,
                    amount = %amount,
                    kind = %err.kind(),
                    "Withdrawal rejected"
                );
                return Err(err);
            }
        };

        self.balance = balance;
        tracing::debug!(amount = %amount, balance = %self.balance, "Withdrawal applied");
        Ok(())
    }

    /// Whether [`Account::withdraw`] would succeed. Never mutates.
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        self.balance_after(amount).is_ok()
    }

    /// Balance that a withdrawal of `amount` would leave.
    ///
    /// A difference too negative to represent is past any overdraft limit.
    fn balance_after(&self, amount: Decimal) -> AccountResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidArgument { amount });
        }

        match self.balance.checked_sub(amount) {
            Some(balance) if balance >= -self.overdraft_limit => Ok(balance),
            _ => Err(AccountError::InvalidOperation {
                balance: self.balance,
                requested: amount,
                overdraft_limit: self.overdraft_limit,
            }),
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}
