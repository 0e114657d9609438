mod deposit;
mod transfer;
mod withdrawal;

pub use deposit::{CashDeposit, ChequeBatch};
pub use transfer::{AccountNumber, SortCode, TransferRequest};
pub use withdrawal::Withdrawal;

/// The balance-changing operations a user can start from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Transfer,
    CashDeposit,
    ChequeDeposit,
    Withdrawal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Transfer => write!(f, "transfer"),
            TransactionKind::CashDeposit => write!(f, "cash deposit"),
            TransactionKind::ChequeDeposit => write!(f, "cheque deposit"),
            TransactionKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}
