//! Bank module.
//!
//! This module contains the session-level banking logic including:
//! - `Teller` - Menu dispatch and the four transaction flows
//! - `Account` - Balance and PIN state for the logged-in user
//! - `PinGate` - Retry-bounded PIN re-confirmation
//! - `validation` - Amount, sort code and account number checks
//! - `Error` types - I/O and transaction rejection errors

mod account;
mod console;
mod error;
mod pin;
mod session;
mod teller;
mod transaction;
pub mod validation;

pub(crate) use rust_decimal::Decimal;

pub use account::Account;
pub use console::{Console, Terminal};
pub use error::{AmountRule, Error, TransactionError};
pub use pin::{Pin, PinGate, MAX_PIN_ATTEMPTS};
pub use session::{is_valid_email, login, OPENING_BALANCE};
pub use teller::{Outcome, Teller};
pub use transaction::{
    AccountNumber, CashDeposit, ChequeBatch, SortCode, TransactionKind, TransferRequest, Withdrawal,
};

/// Formats an amount the way every balance figure is shown to the user.
pub fn format_currency(amount: Decimal) -> String {
    format!("£{amount:.2}")
}
