//! `SafeBank`: a single-session console bank.
//!
//! The library holds the transaction validation and confirmation engine; the
//! `safebank` binary wires it to stdin/stdout.

pub mod bank;

pub use bank::{
    format_currency, is_valid_email, login, validation, Account, AccountNumber, AmountRule,
    CashDeposit, ChequeBatch, Console, Error, Outcome, Pin, PinGate, SortCode, Teller, Terminal,
    TransactionError, TransactionKind, TransferRequest, Withdrawal, MAX_PIN_ATTEMPTS,
    OPENING_BALANCE,
};
