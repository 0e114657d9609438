use crate::bank::{
    error::TransactionError,
    validation::{is_valid_account_number, is_valid_sort_code},
    Decimal,
};

/// A 6-digit sort code. Format only, no bank directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCode(String);

impl SortCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SortCode {
    type Error = TransactionError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        if is_valid_sort_code(input) {
            Ok(SortCode(input.to_owned()))
        } else {
            Err(TransactionError::InvalidSortCode)
        }
    }
}

/// An 8-digit account number. Format only, no checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AccountNumber {
    type Error = TransactionError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        if is_valid_account_number(input) {
            Ok(AccountNumber(input.to_owned()))
        } else {
            Err(TransactionError::InvalidAccountNumber)
        }
    }
}

/// A validated transfer to another account.
///
/// Transfers debit the session account. The amount must already have passed
/// `validation::validate_debit`; it is checked as soon as it is typed, before
/// the payee details are asked for.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    amount: Decimal,
    sort_code: SortCode,
    account_number: AccountNumber,
    /// Payee name, free text
    recipient: String,
}

impl TransferRequest {
    pub fn new(
        amount: Decimal,
        sort_code: SortCode,
        account_number: AccountNumber,
        recipient: String,
    ) -> Self {
        Self {
            amount,
            sort_code,
            account_number,
            recipient,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn sort_code(&self) -> &SortCode {
        &self.sort_code
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payee() -> (SortCode, AccountNumber) {
        (
            SortCode::try_from("123456").unwrap(),
            AccountNumber::try_from("12345678").unwrap(),
        )
    }

    #[test]
    fn test_valid_transfer() {
        let (sort_code, account_number) = payee();
        let request = TransferRequest::new(dec!(25.50), sort_code, account_number, "Ann".into());

        assert_eq!(request.amount(), dec!(25.50));
        assert_eq!(request.sort_code().as_str(), "123456");
        assert_eq!(request.account_number().as_str(), "12345678");
        assert_eq!(request.recipient(), "Ann");
    }

    #[test]
    fn test_recipient_is_not_validated() {
        let (sort_code, account_number) = payee();
        let request = TransferRequest::new(dec!(1), sort_code, account_number, String::new());
        assert_eq!(request.recipient(), "");
    }

    #[test]
    fn test_sort_code_errors() {
        assert_eq!(
            SortCode::try_from("12345"),
            Err(TransactionError::InvalidSortCode)
        );
        assert_eq!(
            SortCode::try_from("123abc"),
            Err(TransactionError::InvalidSortCode)
        );
        assert!(SortCode::try_from("123456").is_ok());
    }

    #[test]
    fn test_account_number_errors() {
        assert_eq!(
            AccountNumber::try_from("1234567"),
            Err(TransactionError::InvalidAccountNumber)
        );
        assert!(AccountNumber::try_from("12345678").is_ok());
    }
}
