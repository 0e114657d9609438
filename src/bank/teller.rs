use super::account::Account;
use super::console::Console;
use super::error::{Error, TransactionError};
use super::pin::PinGate;
use super::transaction::{
    AccountNumber, CashDeposit, ChequeBatch, SortCode, TransactionKind, TransferRequest,
    Withdrawal,
};
use super::validation::{parse_amount, validate_credit, validate_debit};
use super::{format_currency, Decimal};

const MAIN_MENU: &str = "
    1. Check your balance
    2. Transfer Funds
    3. Make a deposit
    4. Withdraw Funds
    5. Log out
    ";

const DEPOSIT_MENU: &str = "
Please choose from the following options:
    1. Deposit cheques
    2. Deposit cash
    3. Finish";

/// How one transaction attempt ended.
///
/// An attempt either commits exactly once or is rejected with the reason; it
/// never does both.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The balance was changed; holds the balance after the change
    Committed { balance: Decimal },
    /// Nothing was changed; the reason has already been shown to the user
    Rejected(TransactionError),
}

/// The teller serving one logged-in session.
///
/// Owns the session account and the console, dispatches menu choices and runs
/// each transaction as collect, validate, confirm, commit. Validation failures
/// end the attempt before the PIN is asked for.
#[derive(Debug)]
pub struct Teller<C> {
    account: Account,
    console: C,
}

impl<C: Console> Teller<C> {
    pub fn new(account: Account, console: C) -> Self {
        log::trace!("Teller initialized");
        Self { account, console }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// End the session and hand back the account and console
    pub fn into_parts(self) -> (Account, C) {
        (self.account, self.console)
    }

    /// Primary API: serve the main menu until the user logs out.
    ///
    /// Rejected transactions are reported and the menu is shown again; only
    /// console failures (including end of input) end the loop early.
    pub fn run(&mut self) -> Result<(), Error> {
        log::info!("Session started");
        self.console.write_line(
            "Welcome! What would you like to do today?\nPlease choose from the following options:",
        )?;

        loop {
            self.console.write_line(MAIN_MENU)?;
            let choice = self
                .console
                .read_line("Please make your selection (enter the number) : ")?;
            log::trace!("[menu] selection {choice:?}");

            match choice.as_str() {
                "1" => {
                    self.check_balance()?;
                }
                "2" => {
                    self.transfer()?;
                }
                "3" => self.deposit_menu()?,
                "4" => {
                    self.withdraw()?;
                }
                "5" => {
                    self.console.write_line("Thank you for using SafeBank.")?;
                    log::info!("Session ended with balance {}", self.account.balance());
                    return Ok(());
                }
                other => self.console.write_line(&format!(
                    "{other} is not a valid selection, please choose from 1 to 5."
                ))?,
            }
        }
    }

    /// Deposit submenu: cheques or cash, repeated until the user finishes.
    pub fn deposit_menu(&mut self) -> Result<(), Error> {
        loop {
            self.console.write_line(DEPOSIT_MENU)?;
            let choice = self.console.read_line("Please make your selection (1-3) : ")?;
            log::trace!("[deposit menu] selection {choice:?}");

            match choice.as_str() {
                "1" => {
                    self.deposit_cheques()?;
                }
                "2" => {
                    self.deposit_cash()?;
                }
                "3" => return Ok(()),
                other => self.console.write_line(&format!(
                    "{other} is not a valid selection, please choose from 1 to 3."
                ))?,
            }
        }
    }

    pub fn check_balance(&mut self) -> Result<Decimal, Error> {
        let balance = self.account.balance();
        self.console.write_line(&format!(
            "Your current balance is {}",
            format_currency(balance)
        ))?;
        Ok(balance)
    }

    pub fn transfer(&mut self) -> Result<Outcome, Error> {
        let result = self.try_transfer();
        self.settle(TransactionKind::Transfer, result)
    }

    pub fn deposit_cash(&mut self) -> Result<Outcome, Error> {
        let result = self.try_deposit_cash();
        self.settle(TransactionKind::CashDeposit, result)
    }

    pub fn deposit_cheques(&mut self) -> Result<Outcome, Error> {
        let result = self.try_deposit_cheques();
        self.settle(TransactionKind::ChequeDeposit, result)
    }

    pub fn withdraw(&mut self) -> Result<Outcome, Error> {
        let result = self.try_withdraw();
        self.settle(TransactionKind::Withdrawal, result)
    }

    /// Turn a rejected attempt into a reported `Outcome::Rejected`.
    /// Console failures pass through untouched.
    fn settle(
        &mut self,
        kind: TransactionKind,
        result: Result<Decimal, Error>,
    ) -> Result<Outcome, Error> {
        match result {
            Ok(balance) => Ok(Outcome::Committed { balance }),
            Err(Error::Transaction(e)) => {
                log::warn!("[{kind}] rejected: {e:?}");
                self.console.write_line(&format!("Error: {e}"))?;
                Ok(Outcome::Rejected(e))
            }
            Err(e) => Err(e),
        }
    }
}

// =============================================================================
// Transaction Flows
// =============================================================================

impl<C: Console> Teller<C> {
    fn try_transfer(&mut self) -> Result<Decimal, Error> {
        let available = self.show_available()?;
        let amount = self.read_amount("Please enter the amount you wish to transfer : ")?;
        let amount = validate_debit(amount, available)?;

        let sort_code = self
            .console
            .read_line("Please enter the sort code of the account you wish to send money to: ")?;
        let sort_code = SortCode::try_from(sort_code.as_str())?;

        let account_number = self
            .console
            .read_line("Please enter the account number you wish to send money to : ")?;
        let account_number = AccountNumber::try_from(account_number.as_str())?;

        let recipient = self
            .console
            .read_line("Please enter the name of the account you are sending money to : ")?;

        let request = TransferRequest::new(amount, sort_code, account_number, recipient);
        log::trace!(
            "[transfer] amount={} sort_code={} account={}",
            request.amount(),
            request.sort_code().as_str(),
            request.account_number().as_str()
        );

        self.console.write_line(&format!(
            "To confirm that you wish to transfer {} to {}",
            format_currency(request.amount()),
            request.recipient()
        ))?;
        self.confirm()?;

        let balance = self.account.debit(request.amount());
        log::info!(
            "[transfer] amount={} -> new_balance={balance}",
            request.amount()
        );
        self.console.write_line(&format!(
            "Transaction successful. Your new balance is {}",
            format_currency(balance)
        ))?;
        Ok(balance)
    }

    fn try_deposit_cash(&mut self) -> Result<Decimal, Error> {
        let amount = self.read_amount("Please enter the total amount of cash : ")?;
        let deposit = CashDeposit::try_from(amount)?;
        validate_credit(deposit.amount(), self.account.balance())?;

        self.console
            .write_line(&format!("To deposit {}", format_currency(deposit.amount())))?;
        self.confirm()?;

        let balance = self.account.credit(deposit.amount())?;
        log::info!(
            "[cash deposit] amount={} -> new_balance={balance}",
            deposit.amount()
        );
        self.console.write_line(&format!(
            "Cash deposit successful. Your new balance is {}",
            format_currency(balance)
        ))?;
        Ok(balance)
    }

    fn try_deposit_cheques(&mut self) -> Result<Decimal, Error> {
        let batch = self.collect_cheques()?;
        let total = validate_credit(batch.total(), self.account.balance())?;

        self.console.write_line(&format!(
            "To deposit {} cheques totalling {}",
            batch.count(),
            format_currency(total)
        ))?;
        self.confirm()?;

        // One credit for the whole batch
        let balance = self.account.credit(total)?;
        log::info!(
            "[cheque deposit] cheques={} total={total} -> new_balance={balance}",
            batch.count()
        );
        self.console.write_line(&format!(
            "Cheque deposit successful. Your new balance is {}",
            format_currency(balance)
        ))?;
        Ok(balance)
    }

    fn try_withdraw(&mut self) -> Result<Decimal, Error> {
        let available = self.show_available()?;
        let amount = self.read_amount("Please enter the amount you wish to withdraw : ")?;
        let withdrawal = Withdrawal::new(amount, available)?;

        self.console.write_line(&format!(
            "To confirm that you wish to withdraw {}",
            format_currency(withdrawal.amount())
        ))?;
        self.confirm()?;

        let balance = self.account.debit(withdrawal.amount());
        log::info!(
            "[withdrawal] amount={} -> new_balance={balance}",
            withdrawal.amount()
        );
        self.console.write_line(&format!(
            "Transaction successful. Your new balance is {}",
            format_currency(balance)
        ))?;
        Ok(balance)
    }

    /// Collect cheques until the user stops adding more.
    ///
    /// A malformed or non-positive cheque is reported and asked for again; it
    /// does not abandon the batch. The returned batch holds at least one cheque.
    fn collect_cheques(&mut self) -> Result<ChequeBatch, Error> {
        let mut batch = ChequeBatch::new();
        loop {
            let input = self
                .console
                .read_line("Please enter the amount shown on the cheque : ")?;
            if let Err(e) = parse_amount(&input).and_then(|amount| batch.add(amount)) {
                log::debug!("[cheque deposit] cheque refused: {e:?}");
                self.console.write_line(&format!("Error: {e}"))?;
                continue;
            }
            log::trace!(
                "[cheque deposit] cheque #{} accepted, running total={}",
                batch.count(),
                batch.total()
            );

            let another = self.console.read_line("Deposit another cheque? (y/n) : ")?;
            if !another.eq_ignore_ascii_case("y") {
                return Ok(batch);
            }
        }
    }

    fn show_available(&mut self) -> Result<Decimal, Error> {
        let available = self.account.balance();
        self.console.write_line(&format!(
            "You have {} available.",
            format_currency(available)
        ))?;
        Ok(available)
    }

    fn read_amount(&mut self, prompt: &str) -> Result<Decimal, Error> {
        let input = self.console.read_line(prompt)?;
        Ok(parse_amount(&input)?)
    }

    fn confirm(&mut self) -> Result<(), Error> {
        PinGate::new(self.account.pin()).confirm(&mut self.console)
    }
}
