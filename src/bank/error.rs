use crate::bank::Decimal;

/// Top-level error type for a banking session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),
}

impl Error {
    /// True when the console input was closed while a prompt was waiting.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Which lower bound an amount was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// Debits accept zero but nothing below it.
    NonNegative,
    /// Deposits must be strictly positive.
    Positive,
}

impl std::fmt::Display for AmountRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountRule::NonNegative => write!(f, "The entered amount cannot be negative."),
            AmountRule::Positive => write!(f, "The entered amount must be greater than 0."),
        }
    }
}

/// Soft errors raised by one transaction attempt.
/// These are reported to the user and abandon the attempt; the session continues.
/// The `Display` text is exactly what the user is shown after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("{0}")]
    InvalidAmount(AmountRule),

    #[error("There are not enough funds available.")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    #[error("Sort Codes must consist of 6 digits.")]
    InvalidSortCode,

    #[error("Account numbers must consist of 8 digits.")]
    InvalidAccountNumber,

    #[error("Invalid input.")]
    MalformedNumericInput { input: String },

    #[error("Too many incorrect PIN attempts made.")]
    PinLockout,

    #[error("The amount is too large to be paid into this account.")]
    BalanceOverflow,
}
