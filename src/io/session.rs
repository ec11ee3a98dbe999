//! Interactive menu session
//!
//! Drives an [`AccountRegistry`] from a text menu. Input is any `BufRead`
//! (tokens may span lines) and output any `Write`, so the session runs the
//! same against a terminal, a pipe or an in-memory buffer.
//!
//! Business errors (unknown account, insufficient funds, invalid date) and
//! malformed numbers are reported in the output and the loop continues. Only
//! I/O failures end the session with an error.

use crate::core::clock::default_start_date;
use crate::core::AccountRegistry;
use crate::io::csv_format::format_interest;
use crate::io::tokens::TokenReader;
use crate::types::{AccountId, AccountType, Amount, BankError, LotteryOutcome};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\
********** Account Manager **********
1. Open short-term account
2. Open long-term account
3. Open special account
4. Open checking account
5. Deposit
6. Withdraw
7. Draw lottery
8. List accounts
9. List account numbers
10. Change system date
0. Exit
*************************************
";

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// System date the registry starts with
    pub start_date: NaiveDate,

    /// Lottery RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Print the menu banner and prompts
    pub show_menu: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            start_date: default_start_date(),
            seed: None,
            show_menu: true,
        }
    }
}

/// Menu entries, keyed by the number the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    OpenShortTerm,
    OpenLongTerm,
    OpenSpecial,
    OpenChecking,
    Deposit,
    Withdraw,
    DrawLottery,
    ListAccounts,
    ListAccountIds,
    SetDate,
}

impl MenuChoice {
    pub fn from_code(code: u32) -> Option<Self> {
        let choice = match code {
            0 => MenuChoice::Exit,
            1 => MenuChoice::OpenShortTerm,
            2 => MenuChoice::OpenLongTerm,
            3 => MenuChoice::OpenSpecial,
            4 => MenuChoice::OpenChecking,
            5 => MenuChoice::Deposit,
            6 => MenuChoice::Withdraw,
            7 => MenuChoice::DrawLottery,
            8 => MenuChoice::ListAccounts,
            9 => MenuChoice::ListAccountIds,
            10 => MenuChoice::SetDate,
            _ => return None,
        };
        Some(choice)
    }
}

/// A menu session over one registry
pub struct Session<R, W> {
    registry: AccountRegistry,
    rng: StdRng,
    input: TokenReader<R>,
    output: W,
    show_menu: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &SessionConfig, input: R, output: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session {
            registry: AccountRegistry::with_date(config.start_date),
            rng,
            input: TokenReader::new(input),
            output,
            show_menu: config.show_menu,
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Process commands until the user exits or input runs out
    ///
    /// # Errors
    ///
    /// Returns `IoError` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), BankError> {
        loop {
            if self.show_menu {
                self.output.write_all(MENU.as_bytes())?;
            }
            self.prompt("Select an option: ")?;

            let Some(token) = self.input.next_token()? else {
                break;
            };

            let keep_going = match token.parse::<u32>().ok().and_then(MenuChoice::from_code) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.input.discard_line();
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            writeln!(self.output)?;

            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Run one command; `false` means the session should end
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool, BankError> {
        match choice {
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(false);
            }
            MenuChoice::OpenShortTerm => {
                self.open_funded(AccountType::ShortTerm, AccountRegistry::open_short_term)?
            }
            MenuChoice::OpenLongTerm => {
                self.open_funded(AccountType::LongTerm, AccountRegistry::open_long_term)?
            }
            MenuChoice::OpenSpecial => {
                self.open_funded(AccountType::Special, AccountRegistry::open_special)?
            }
            MenuChoice::OpenChecking => {
                let id = self.registry.open_checking();
                self.report_opened(AccountType::Checking, id)?;
            }
            MenuChoice::Deposit => self.deposit()?,
            MenuChoice::Withdraw => self.withdraw()?,
            MenuChoice::DrawLottery => self.draw_lottery()?,
            MenuChoice::ListAccounts => self.list_accounts()?,
            MenuChoice::ListAccountIds => self.list_account_ids()?,
            MenuChoice::SetDate => self.set_date()?,
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> Result<(), BankError> {
        if self.show_menu {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Read the next token as a number
    ///
    /// `None` means the command should be abandoned: either input ended or
    /// the token was malformed (which has already been reported, and the rest
    /// of its line dropped).
    fn read_number<T: FromStr>(&mut self) -> Result<Option<T>, BankError> {
        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.input.discard_line();
                writeln!(
                    self.output,
                    "Invalid number '{}'. Please enter a non-negative whole number.",
                    token
                )?;
                Ok(None)
            }
        }
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<Option<T>, BankError> {
        self.prompt(text)?;
        self.read_number()
    }

    fn report_error(&mut self, error: BankError) -> Result<(), BankError> {
        if !error.is_recoverable() {
            return Err(error);
        }
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    fn report_opened(&mut self, account_type: AccountType, id: AccountId) -> Result<(), BankError> {
        writeln!(
            self.output,
            "New {} account opened. Account No: {}",
            account_type, id
        )?;
        Ok(())
    }

    fn report_deposit(
        &mut self,
        id: AccountId,
        amount: Amount,
        balance: Amount,
    ) -> Result<(), BankError> {
        writeln!(
            self.output,
            "Account No: {} - deposited {}. New balance: {}",
            id, amount, balance
        )?;
        Ok(())
    }

    fn open_funded(
        &mut self,
        account_type: AccountType,
        open: fn(&mut AccountRegistry, Amount) -> AccountId,
    ) -> Result<(), BankError> {
        let Some(initial_balance) = self.prompt_number::<Amount>("Initial balance: ")? else {
            return Ok(());
        };
        let id = open(&mut self.registry, initial_balance);
        self.report_opened(account_type, id)
    }

    fn deposit(&mut self) -> Result<(), BankError> {
        let Some(id) = self.prompt_number::<AccountId>("Account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_number::<Amount>("Amount to deposit: ")? else {
            return Ok(());
        };
        match self.registry.deposit(id, amount) {
            Ok(balance) => self.report_deposit(id, amount, balance),
            Err(e) => self.report_error(e),
        }
    }

    fn withdraw(&mut self) -> Result<(), BankError> {
        let Some(id) = self.prompt_number::<AccountId>("Account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_number::<Amount>("Amount to withdraw: ")? else {
            return Ok(());
        };
        match self.registry.withdraw(id, amount) {
            Ok(balance) => {
                writeln!(
                    self.output,
                    "Account No: {} - withdrew {}. New balance: {}",
                    id, amount, balance
                )?;
                Ok(())
            }
            Err(e) => self.report_error(e),
        }
    }

    fn draw_lottery(&mut self) -> Result<(), BankError> {
        match self.registry.draw_lottery(&mut self.rng) {
            Ok(LotteryOutcome::NoEligibleAccounts) => {
                writeln!(
                    self.output,
                    "No special accounts are eligible for the lottery."
                )?;
            }
            Ok(LotteryOutcome::NoAccountSelected) => {
                writeln!(self.output, "No account was selected in the lottery.")?;
            }
            Ok(LotteryOutcome::Winner {
                account,
                bonus,
                balance,
            }) => {
                self.report_deposit(account, bonus, balance)?;
                writeln!(self.output, "Lottery winner: account {}", account)?;
                writeln!(self.output, "Bonus credited: {}", bonus)?;
            }
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<(), BankError> {
        if self.registry.is_empty() {
            writeln!(self.output, "No accounts opened yet.")?;
            return Ok(());
        }
        for summary in self.registry.list_accounts() {
            writeln!(
                self.output,
                "Account No: {} ({})",
                summary.id, summary.account_type
            )?;
            writeln!(self.output, "  Balance: {}", summary.balance)?;
            writeln!(
                self.output,
                "  Interest: {}",
                format_interest(summary.interest)
            )?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn list_account_ids(&mut self) -> Result<(), BankError> {
        if self.registry.is_empty() {
            writeln!(self.output, "No accounts opened yet.")?;
            return Ok(());
        }
        for id in self.registry.list_account_ids() {
            writeln!(self.output, "Account No: {}", id)?;
        }
        Ok(())
    }

    fn set_date(&mut self) -> Result<(), BankError> {
        self.prompt("New date (dd mm yyyy): ")?;
        let Some(day) = self.read_number::<u32>()? else {
            return Ok(());
        };
        let Some(month) = self.read_number::<u32>()? else {
            return Ok(());
        };
        let Some(year) = self.read_number::<i32>()? else {
            return Ok(());
        };
        match self.registry.set_system_date(year, month, day) {
            Ok(date) => {
                writeln!(self.output, "System date set to {}", date)?;
                Ok(())
            }
            Err(e) => self.report_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use rstest::rstest;
    use std::io::Cursor;

    fn scripted(input: &str) -> (String, AccountRegistry) {
        let config = SessionConfig {
            seed: Some(7),
            show_menu: false,
            ..SessionConfig::default()
        };
        let mut output = Vec::new();
        let registry = {
            let mut session = Session::new(&config, Cursor::new(input), &mut output);
            session.run().unwrap();
            session.registry().clone()
        };
        (String::from_utf8(output).unwrap(), registry)
    }

    #[rstest]
    #[case::exit(0, Some(MenuChoice::Exit))]
    #[case::open_short_term(1, Some(MenuChoice::OpenShortTerm))]
    #[case::lottery(7, Some(MenuChoice::DrawLottery))]
    #[case::set_date(10, Some(MenuChoice::SetDate))]
    #[case::unknown(11, None)]
    fn test_menu_choice_from_code(#[case] code: u32, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::from_code(code), expected);
    }

    #[test]
    fn test_open_and_deposit() {
        let (output, registry) = scripted("1 1000\n5 1 500\n0\n");
        assert_eq!(
            output,
            "New short-term account opened. Account No: 1\n\n\
             Account No: 1 - deposited 500. New balance: 1500\n\n\
             Exiting...\n\n"
        );
        assert_eq!(registry.get(1).map(Account::balance), Some(1500));
    }

    #[test]
    fn test_arguments_may_span_lines() {
        let (output, registry) = scripted("3\n4000\n5\n1\n250\n");
        assert_eq!(
            output,
            "New special account opened. Account No: 1\n\n\
             Account No: 1 - deposited 250. New balance: 4250\n\n"
        );
        assert_eq!(registry.get(1).and_then(Account::points), Some(2));
    }

    #[test]
    fn test_withdraw_reports_insufficient_funds() {
        let (output, registry) = scripted("1 100\n6 1 150\n6 1 40\n0\n");
        assert_eq!(
            output,
            "New short-term account opened. Account No: 1\n\n\
             Insufficient funds in account 1: balance 100, requested 150\n\n\
             Account No: 1 - withdrew 40. New balance: 60\n\n\
             Exiting...\n\n"
        );
        assert_eq!(registry.get(1).map(Account::balance), Some(60));
    }

    #[test]
    fn test_negative_amount_rejected_at_parse() {
        let (output, registry) = scripted("1 100\n5 1 -50\n0\n");
        assert!(output.contains("Invalid number '-50'. Please enter a non-negative whole number."));
        assert_eq!(registry.get(1).map(Account::balance), Some(100));
    }

    #[test]
    fn test_malformed_argument_drops_rest_of_line() {
        let (output, registry) = scripted("5 1x 3\n1 0\n0\n");
        assert_eq!(
            output,
            "Invalid number '1x'. Please enter a non-negative whole number.\n\n\
             New short-term account opened. Account No: 1\n\n\
             Exiting...\n\n"
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(1).map(Account::balance), Some(0));
        assert_eq!(registry.get(1).and_then(Account::points), None);
    }

    #[test]
    fn test_invalid_choice_drops_rest_of_line() {
        let (output, registry) = scripted("abc 3 4000\n0\n");
        assert_eq!(output, "Invalid choice. Please try again.\n\nExiting...\n\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_reported_and_session_continues() {
        let config = SessionConfig {
            seed: Some(7),
            show_menu: false,
            ..SessionConfig::default()
        };
        let input: &[u8] = b"1 1000\n\xff\xfe\n9\n0\n";
        let mut output = Vec::new();
        Session::new(&config, Cursor::new(input), &mut output)
            .run()
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "New short-term account opened. Account No: 1\n\n\
             Invalid choice. Please try again.\n\n\
             Account No: 1\n\n\
             Exiting...\n\n"
        );
    }

    #[test]
    fn test_unknown_account() {
        let (output, _) = scripted("5 3 100\n0\n");
        assert_eq!(output, "Account 3 not found\n\nExiting...\n\n");
    }

    #[test]
    fn test_lottery_with_single_special_account() {
        let (output, registry) = scripted("3 2000\n7\n0\n");
        assert_eq!(
            output,
            "New special account opened. Account No: 1\n\n\
             Account No: 1 - deposited 10000. New balance: 12000\n\
             Lottery winner: account 1\n\
             Bonus credited: 10000\n\n\
             Exiting...\n\n"
        );
        assert_eq!(registry.get(1).map(Account::balance), Some(12000));
    }

    #[test]
    fn test_lottery_with_zero_point_special_account() {
        let (output, _) = scripted("3 100\n7\n0\n");
        assert!(output.contains("No account was selected in the lottery.\n"));
    }

    #[test]
    fn test_set_date_changes_registry_date() {
        let (output, registry) = scripted("10 29 2 2024\n0\n");
        assert_eq!(output, "System date set to 2024-02-29\n\nExiting...\n\n");
        assert_eq!(
            registry.system_date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_list_account_ids() {
        let (output, _) = scripted("4\n4\n9\n0\n");
        assert_eq!(
            output,
            "New checking account opened. Account No: 1\n\n\
             New checking account opened. Account No: 2\n\n\
             Account No: 1\nAccount No: 2\n\n\
             Exiting...\n\n"
        );
    }

    #[test]
    fn test_input_after_exit_is_ignored() {
        let (output, registry) = scripted("0\n1 500\n");
        assert_eq!(output, "Exiting...\n\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_menu_is_shown_when_enabled() {
        let config = SessionConfig {
            seed: Some(1),
            ..SessionConfig::default()
        };
        let mut output = Vec::new();
        Session::new(&config, Cursor::new("0\n"), &mut output)
            .run()
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("********** Account Manager **********\n"));
        assert!(text.contains("10. Change system date\n"));
        assert!(text.contains("Select an option: Exiting...\n"));
    }

    #[test]
    fn test_start_date_from_config() {
        let config = SessionConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            seed: Some(1),
            show_menu: false,
        };
        let session = Session::new(&config, Cursor::new(""), Vec::new());
        assert_eq!(
            session.registry().system_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
