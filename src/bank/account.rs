use super::error::TransactionError;
use super::pin::Pin;
use super::Decimal;

/// The logged-in user's account: one balance and the PIN chosen at login.
///
/// The balance is only changed through `credit` and `debit`, both of which are
/// called by the teller after validation and PIN confirmation have succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: Decimal,
    pin: Pin,
}

impl Account {
    /// Create an account with an opening balance.
    ///
    /// # Panics (debug only)
    /// Panics if the opening balance is negative.
    pub fn new(balance: Decimal, pin: Pin) -> Self {
        debug_assert!(balance >= Decimal::ZERO, "negative opening balance {balance}");
        Self { balance, pin }
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the session PIN
    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    /// Credit the account and return the new balance.
    /// The balance is left as it was if the sum does not fit in a `Decimal`.
    ///
    /// # Panics (debug only)
    /// Panics if the amount is not strictly positive.
    pub(super) fn credit(&mut self, amount: Decimal) -> Result<Decimal, TransactionError> {
        debug_assert!(amount > Decimal::ZERO, "credit of non-positive amount {amount}");
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::BalanceOverflow)?;
        Ok(self.balance)
    }

    /// Debit the account and return the new balance.
    /// Caller must ensure `0 <= amount <= balance`.
    ///
    /// # Panics (debug only)
    /// Panics if the debit would leave the balance negative.
    pub(super) fn debit(&mut self, amount: Decimal) -> Decimal {
        debug_assert!(amount >= Decimal::ZERO, "debit of negative amount {amount}");
        self.balance -= amount;
        #[cfg(debug_assertions)]
        self.assert_invariant();
        self.balance
    }

    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance ({}) is negative",
            self.balance
        );
    }
}
