use super::console::Console;
use super::error::{Error, TransactionError};

/// Number of mismatching PINs tolerated before a confirmation is refused
pub const MAX_PIN_ATTEMPTS: u8 = 3;

const PIN_LEN: usize = 4;
const PIN_PROMPT: &str = "Please enter your PIN : ";

/// A 4-digit PIN.
/// Only constructed through `TryFrom<&str>`, so every `Pin` is well formed.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep PINs out of logs and panic messages
impl std::fmt::Debug for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pin(****)")
    }
}

impl TryFrom<&str> for Pin {
    type Error = ();

    fn try_from(candidate: &str) -> Result<Self, Self::Error> {
        if candidate.len() == PIN_LEN && candidate.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Pin(candidate.to_owned()))
        } else {
            Err(())
        }
    }
}

/// Prompt until the user types something shaped like a PIN.
///
/// This loop has no attempt limit; it ends only on a well-formed PIN or when
/// the console fails (including end of input).
pub fn read_pin<C: Console + ?Sized>(console: &mut C) -> Result<Pin, Error> {
    loop {
        let candidate = console.read_line(PIN_PROMPT)?;
        match Pin::try_from(candidate.as_str()) {
            Ok(pin) => return Ok(pin),
            Err(()) => {
                log::debug!("[pin] rejected malformed PIN entry");
                console.write_line("Invalid PIN, please try again.")?;
            }
        }
    }
}

/// Re-confirmation of the session PIN before a balance change.
///
/// Each attempt reads a well-formed PIN through [`read_pin`] and compares it
/// with the expected one. The gate opens on the first match; after
/// `MAX_PIN_ATTEMPTS` mismatches it refuses with `PinLockout`. The gate only
/// talks to the console and never touches the account.
#[derive(Debug)]
pub struct PinGate<'a> {
    expected: &'a Pin,
}

impl<'a> PinGate<'a> {
    pub fn new(expected: &'a Pin) -> Self {
        Self { expected }
    }

    /// Run the confirmation dialogue.
    ///
    /// Returns `Err(Error::Transaction(PinLockout))` when every attempt mismatched.
    pub fn confirm<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), Error> {
        for attempt in 1..=MAX_PIN_ATTEMPTS {
            let candidate = read_pin(console)?;
            if candidate == *self.expected {
                log::debug!("[pin] confirmed on attempt {attempt}");
                return Ok(());
            }
            log::debug!("[pin] mismatch on attempt {attempt}/{MAX_PIN_ATTEMPTS}");
            console.write_line("Incorrect PIN")?;
        }

        log::warn!("[pin] locked out after {MAX_PIN_ATTEMPTS} attempts");
        Err(TransactionError::PinLockout.into())
    }
}
