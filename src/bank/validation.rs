//! Amount and identifier admissibility checks.
//!
//! Every function here is pure: it either returns the accepted value or the
//! `TransactionError` that describes why the input was refused.

use std::str::FromStr;

use super::error::{AmountRule, TransactionError};
use super::Decimal;

/// Decimal places kept on every amount the user enters
pub const AMOUNT_DP: u32 = 2;

pub const SORT_CODE_LEN: usize = 6;
pub const ACCOUNT_NUMBER_LEN: usize = 8;

/// Parse a typed amount and round it to two decimal places.
///
/// Surrounding whitespace is ignored, and both plain (`12.5`) and scientific
/// (`1.25e1`) notation are accepted. Midpoints round to even.
pub fn parse_amount(input: &str) -> Result<Decimal, TransactionError> {
    let trimmed = input.trim();
    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));

    match parsed {
        Ok(amount) => {
            let rounded = amount.round_dp(AMOUNT_DP);
            log::debug!("[validate] parsed amount {input:?} -> {rounded}");
            Ok(rounded)
        }
        Err(e) => {
            log::debug!("[validate] malformed amount {input:?}: {e}");
            Err(TransactionError::MalformedNumericInput {
                input: input.to_owned(),
            })
        }
    }
}

/// Check an amount that will leave the account (transfer or withdrawal).
///
/// Insufficiency is checked before negativity, and zero is admissible.
pub fn validate_debit(amount: Decimal, available: Decimal) -> Result<Decimal, TransactionError> {
    if amount > available {
        return Err(TransactionError::InsufficientFunds {
            available,
            requested: amount,
        });
    }
    if amount < Decimal::ZERO {
        return Err(TransactionError::InvalidAmount(AmountRule::NonNegative));
    }
    Ok(amount)
}

/// Check an amount that will be paid in (cash or a single cheque).
pub fn validate_deposit(amount: Decimal) -> Result<Decimal, TransactionError> {
    if amount <= Decimal::ZERO {
        return Err(TransactionError::InvalidAmount(AmountRule::Positive));
    }
    Ok(amount)
}

/// Check that paying `amount` into an account holding `balance` is representable.
pub fn validate_credit(amount: Decimal, balance: Decimal) -> Result<Decimal, TransactionError> {
    match balance.checked_add(amount) {
        Some(_) => Ok(amount),
        None => {
            log::debug!("[validate] credit of {amount} onto {balance} overflows");
            Err(TransactionError::BalanceOverflow)
        }
    }
}

fn is_digits(input: &str, len: usize) -> bool {
    input.len() == len && input.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_sort_code(input: &str) -> bool {
    is_digits(input, SORT_CODE_LEN)
}

pub fn is_valid_account_number(input: &str) -> bool {
    is_digits(input, ACCOUNT_NUMBER_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_amount() {
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount("20.5").unwrap(), dec!(20.50));
        assert_eq!(parse_amount("-5.00").unwrap(), dec!(-5));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(parse_amount("  42.10\t").unwrap(), dec!(42.10));
    }

    #[test]
    fn test_parse_accepts_scientific_notation() {
        assert_eq!(parse_amount("1.5e2").unwrap(), dec!(150));
    }

    #[test]
    fn test_parse_rounds_to_two_places() {
        assert_eq!(parse_amount("10.006").unwrap(), dec!(10.01));
        assert_eq!(parse_amount("10.004").unwrap(), dec!(10.00));
        // Midpoint goes to the even neighbour
        assert_eq!(parse_amount("0.125").unwrap(), dec!(0.12));
        assert_eq!(parse_amount("0.135").unwrap(), dec!(0.14));
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        let amount = parse_amount("-0.001").unwrap();
        assert!(validate_debit(amount, dec!(100)).is_ok());
        assert!(validate_deposit(amount).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_text() {
        for input in ["", "abc", "12,50", "£10", "inf", "nan", "1.2.3"] {
            assert_eq!(
                parse_amount(input),
                Err(TransactionError::MalformedNumericInput {
                    input: input.to_owned()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_debit_within_balance() {
        assert_eq!(validate_debit(dec!(40), dec!(100)), Ok(dec!(40)));
        assert_eq!(validate_debit(dec!(100), dec!(100)), Ok(dec!(100)));
        assert_eq!(validate_debit(Decimal::ZERO, dec!(100)), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_debit_over_balance_is_insufficient() {
        assert_eq!(
            validate_debit(dec!(150), dec!(100)),
            Err(TransactionError::InsufficientFunds {
                available: dec!(100),
                requested: dec!(150),
            })
        );
    }

    #[test]
    fn test_negative_debit_is_invalid() {
        assert_eq!(
            validate_debit(dec!(-5), dec!(100)),
            Err(TransactionError::InvalidAmount(AmountRule::NonNegative))
        );
    }

    #[test]
    fn test_insufficiency_is_checked_first() {
        // Only reachable with a negative balance, which the account never holds
        assert!(matches!(
            validate_debit(dec!(-5), dec!(-10)),
            Err(TransactionError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_deposit_must_be_positive() {
        assert_eq!(validate_deposit(dec!(0.01)), Ok(dec!(0.01)));
        assert_eq!(
            validate_deposit(Decimal::ZERO),
            Err(TransactionError::InvalidAmount(AmountRule::Positive))
        );
        assert_eq!(
            validate_deposit(dec!(-3)),
            Err(TransactionError::InvalidAmount(AmountRule::Positive))
        );
    }

    #[test]
    fn test_credit_that_overflows_the_balance() {
        assert_eq!(validate_credit(dec!(35.75), dec!(100)), Ok(dec!(35.75)));
        assert_eq!(
            validate_credit(Decimal::MAX, dec!(100)),
            Err(TransactionError::BalanceOverflow)
        );
        // The largest amount still fits on an empty account
        assert_eq!(
            validate_credit(Decimal::MAX, Decimal::ZERO),
            Ok(Decimal::MAX)
        );
    }

    #[test]
    fn test_sort_code_format() {
        assert!(is_valid_sort_code("123456"));
        assert!(!is_valid_sort_code("12345"));
        assert!(!is_valid_sort_code("123abc"));
        assert!(!is_valid_sort_code("1234567"));
        assert!(!is_valid_sort_code("12-34-56"));
    }

    #[test]
    fn test_account_number_format() {
        assert!(is_valid_account_number("12345678"));
        assert!(!is_valid_account_number("1234567"));
        assert!(!is_valid_account_number("1234567a"));
        assert!(!is_valid_account_number("123456789"));
    }
}
