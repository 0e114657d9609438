use crate::bank::{error::TransactionError, validation::validate_deposit, Decimal};

/// A validated cash deposit. The amount is strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct CashDeposit {
    amount: Decimal,
}

impl CashDeposit {
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl TryFrom<Decimal> for CashDeposit {
    type Error = TransactionError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: validate_deposit(amount)?,
        })
    }
}

/// Cheques collected during one deposit session.
///
/// Cheques are only accumulated here. The batch is paid in as a single credit
/// of [`ChequeBatch::total`], never cheque by cheque.
#[derive(Debug, Clone, Default)]
pub struct ChequeBatch {
    cheques: Vec<Decimal>,
    total: Decimal,
}

impl ChequeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one cheque.
    /// A non-positive amount, or one that would overflow the running total, is
    /// refused and the batch is left as it was.
    pub fn add(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        let amount = validate_deposit(amount)?;
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(TransactionError::BalanceOverflow)?;
        self.cheques.push(amount);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.cheques.len()
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::error::AmountRule;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_cash_deposit() {
        let deposit = CashDeposit::try_from(dec!(100.5)).unwrap();
        assert_eq!(deposit.amount(), dec!(100.5));
    }

    #[test]
    fn test_cash_deposit_rejects_zero_and_negative() {
        for amount in [Decimal::ZERO, dec!(-1)] {
            assert_eq!(
                CashDeposit::try_from(amount).unwrap_err(),
                TransactionError::InvalidAmount(AmountRule::Positive)
            );
        }
    }

    #[test]
    fn test_batch_totals_cheques() {
        let mut batch = ChequeBatch::new();
        batch.add(dec!(10.00)).unwrap();
        batch.add(dec!(20.50)).unwrap();
        batch.add(dec!(5.25)).unwrap();

        assert_eq!(batch.count(), 3);
        assert_eq!(batch.total(), dec!(35.75));
    }

    #[test]
    fn test_invalid_cheque_leaves_batch_untouched() {
        let mut batch = ChequeBatch::new();
        batch.add(dec!(10)).unwrap();
        assert!(batch.add(Decimal::ZERO).is_err());
        assert!(batch.add(dec!(-4)).is_err());

        assert_eq!(batch.count(), 1);
        assert_eq!(batch.total(), dec!(10));
    }

    #[test]
    fn test_empty_batch() {
        let batch = ChequeBatch::new();
        assert_eq!(batch.count(), 0);
        assert_eq!(batch.total(), Decimal::ZERO);
    }

    #[test]
    fn test_cheque_that_overflows_total_is_refused() {
        let mut batch = ChequeBatch::new();
        batch.add(Decimal::MAX).unwrap();
        assert_eq!(
            batch.add(Decimal::MAX),
            Err(TransactionError::BalanceOverflow)
        );

        assert_eq!(batch.count(), 1);
        assert_eq!(batch.total(), Decimal::MAX);
    }
}
