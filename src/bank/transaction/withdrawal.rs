use crate::bank::{error::TransactionError, validation::validate_debit, Decimal};

/// A validated cash withdrawal.
///
/// Withdrawals debit the session account and follow the same amount rules as
/// transfers: zero is allowed, negative amounts and overdrafts are not.
#[derive(Debug, Clone, Copy)]
pub struct Withdrawal {
    amount: Decimal,
}

impl Withdrawal {
    pub fn new(amount: Decimal, available: Decimal) -> Result<Self, TransactionError> {
        Ok(Self {
            amount: validate_debit(amount, available)?,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::error::AmountRule;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_withdrawal() {
        let withdrawal = Withdrawal::new(dec!(50.25), dec!(100)).unwrap();
        assert_eq!(withdrawal.amount(), dec!(50.25));
    }

    #[test]
    fn test_zero_withdrawal_is_allowed() {
        assert!(Withdrawal::new(Decimal::ZERO, dec!(100)).is_ok());
    }

    #[test]
    fn test_rejects_negative_amount() {
        assert_eq!(
            Withdrawal::new(dec!(-100), dec!(100)).unwrap_err(),
            TransactionError::InvalidAmount(AmountRule::NonNegative)
        );
    }

    #[test]
    fn test_rejects_overdraft() {
        assert!(matches!(
            Withdrawal::new(dec!(150), dec!(100)),
            Err(TransactionError::InsufficientFunds { .. })
        ));
    }
}
