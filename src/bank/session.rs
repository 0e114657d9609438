use std::ops::RangeInclusive;

use rand::Rng;

use super::account::Account;
use super::console::Console;
use super::error::Error;
use super::pin::read_pin;
use super::Decimal;

/// Whole-pound range the pretend opening balance is drawn from
pub const OPENING_BALANCE: RangeInclusive<u32> = 10..=99_999;

/// Email pre-check: exactly one `@`, and a `.` somewhere in the domain.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((_, domain)) => !domain.contains('@') && domain.contains('.'),
        None => false,
    }
}

/// Log a user in and open their account.
///
/// Prompts for an email address until it passes [`is_valid_email`], then for
/// a PIN until it is well formed, then draws the opening balance from
/// [`OPENING_BALANCE`] using `rng`.
pub fn login<C, G>(console: &mut C, rng: &mut G) -> Result<Account, Error>
where
    C: Console + ?Sized,
    G: Rng,
{
    console.write_line("Welcome to SafeBank, please log in to begin.")?;

    loop {
        let email = console.read_line("Please enter your email address : ")?;
        if is_valid_email(&email) {
            break;
        }
        log::debug!("[login] rejected email address format");
        console.write_line(&format!(
            "{email} is not a valid email address format, please try again."
        ))?;
    }

    let pin = read_pin(console)?;
    let balance = Decimal::from(rng.random_range(OPENING_BALANCE));
    log::info!("[login] session opened with balance {balance}");

    Ok(Account::new(balance, pin))
}
