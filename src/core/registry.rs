//! Account registry module
//!
//! This module provides the `AccountRegistry` struct which owns every account,
//! the account number allocator and the system clock.
//!
//! The AccountRegistry is responsible for:
//! - Opening accounts of each kind and allocating sequential account numbers
//! - Routing deposits and withdrawals to the right account
//! - Producing account listings with freshly computed interest
//! - Running the weighted lottery over special accounts

use crate::core::clock::SystemClock;
use crate::core::lottery::{self, Candidate};
use crate::types::{
    Account, AccountId, AccountSummary, Amount, BankError, LotteryOutcome, LOTTERY_BONUS,
};
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info, warn};

/// Owns all accounts plus the current system date
///
/// Accounts are kept in creation order and are never removed.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    /// Accounts in creation order
    accounts: Vec<Account>,

    /// Number handed to the next opened account
    next_id: AccountId,

    /// "Today" as seen by long-term interest
    clock: SystemClock,
}

impl AccountRegistry {
    /// Create an empty registry with the default system date
    pub fn new() -> Self {
        Self::with_clock(SystemClock::default())
    }

    /// Create an empty registry whose clock starts at `today`
    pub fn with_date(today: NaiveDate) -> Self {
        Self::with_clock(SystemClock::new(today))
    }

    fn with_clock(clock: SystemClock) -> Self {
        AccountRegistry {
            accounts: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    fn allocate_id(&mut self) -> AccountId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert(&mut self, account: Account) -> AccountId {
        let id = account.id();
        debug!(
            account = id,
            kind = %account.kind().account_type(),
            balance = account.balance(),
            "account opened"
        );
        self.accounts.push(account);
        id
    }

    /// Open a short-term account and return its number
    pub fn open_short_term(&mut self, initial_balance: Amount) -> AccountId {
        let id = self.allocate_id();
        self.insert(Account::short_term(id, initial_balance))
    }

    /// Open a long-term account dated at the current system date
    pub fn open_long_term(&mut self, initial_balance: Amount) -> AccountId {
        let id = self.allocate_id();
        let opened_on = self.clock.today();
        self.insert(Account::long_term(id, initial_balance, opened_on))
    }

    /// Open a special account; its lottery points are fixed from `initial_balance`
    pub fn open_special(&mut self, initial_balance: Amount) -> AccountId {
        let id = self.allocate_id();
        self.insert(Account::special(id, initial_balance))
    }

    /// Open a checking account with a zero balance
    pub fn open_checking(&mut self) -> AccountId {
        let id = self.allocate_id();
        self.insert(Account::checking(id))
    }

    pub fn system_date(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Replace the system date used by later long-term interest computations
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if the parts do not form a calendar date; the
    /// system date is left unchanged.
    pub fn set_system_date(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<NaiveDate, BankError> {
        let date = self.clock.set(year, month, day)?;
        debug!(%date, "system date changed");
        Ok(date)
    }

    /// Look up an account by number
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    fn get_mut(&mut self, id: AccountId) -> Result<&mut Account, BankError> {
        self.accounts
            .iter_mut()
            .find(|account| account.id() == id)
            .ok_or_else(|| BankError::account_not_found(id))
    }

    /// Deposit `amount` into account `id` and return the new balance
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has number `id`
    /// - `BalanceOverflow` if the balance would overflow
    pub fn deposit(&mut self, id: AccountId, amount: Amount) -> Result<Amount, BankError> {
        let balance = self.get_mut(id)?.deposit(amount)?;
        debug!(account = id, amount, balance, "deposit applied");
        Ok(balance)
    }

    /// Withdraw `amount` from account `id` and return the new balance
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has number `id`
    /// - `InsufficientFunds` if `amount` exceeds the balance; the balance is
    ///   left unchanged
    pub fn withdraw(&mut self, id: AccountId, amount: Amount) -> Result<Amount, BankError> {
        match self.get_mut(id)?.withdraw(amount) {
            Ok(balance) => {
                debug!(account = id, amount, balance, "withdrawal applied");
                Ok(balance)
            }
            Err(e) => {
                warn!(account = id, amount, error = %e, "withdrawal rejected");
                Err(e)
            }
        }
    }

    /// Every account in creation order with freshly computed interest
    pub fn list_accounts(&self) -> impl Iterator<Item = AccountSummary> + '_ {
        let today = self.clock.today();
        self.accounts.iter().map(move |account| AccountSummary {
            id: account.id(),
            account_type: account.kind().account_type(),
            balance: account.balance(),
            interest: account.compute_interest(today),
        })
    }

    /// Every account number in creation order
    pub fn list_account_ids(&self) -> impl Iterator<Item = AccountId> + '_ {
        self.accounts.iter().map(Account::id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Special accounts with their points, in creation order
    fn lottery_candidates(&self) -> Vec<Candidate> {
        self.accounts
            .iter()
            .filter_map(|account| account.points().map(|points| (account.id(), points)))
            .collect()
    }

    /// Run the lottery with a random draw from `rng`
    ///
    /// The winner is credited with [`LOTTERY_BONUS`] through the normal
    /// deposit path.
    ///
    /// # Errors
    ///
    /// Returns `BalanceOverflow` if the bonus would overflow the winner's
    /// balance.
    pub fn draw_lottery<R: Rng>(&mut self, rng: &mut R) -> Result<LotteryOutcome, BankError> {
        let candidates = self.lottery_candidates();
        if candidates.is_empty() {
            return Ok(LotteryOutcome::NoEligibleAccounts);
        }
        match lottery::draw_value(rng, lottery::total_points(&candidates)) {
            Some(draw) => self.settle(&candidates, draw),
            None => Ok(LotteryOutcome::NoAccountSelected),
        }
    }

    /// Run the lottery with a caller-chosen draw value
    ///
    /// A draw value outside `1..=total_points` selects nobody.
    pub fn draw_lottery_at(&mut self, draw: u64) -> Result<LotteryOutcome, BankError> {
        let candidates = self.lottery_candidates();
        if candidates.is_empty() {
            return Ok(LotteryOutcome::NoEligibleAccounts);
        }
        self.settle(&candidates, draw)
    }

    fn settle(&mut self, candidates: &[Candidate], draw: u64) -> Result<LotteryOutcome, BankError> {
        let Some(account) = lottery::select_weighted(candidates, draw) else {
            return Ok(LotteryOutcome::NoAccountSelected);
        };
        let balance = self.deposit(account, LOTTERY_BONUS)?;
        info!(account, draw, bonus = LOTTERY_BONUS, "lottery winner drawn");
        Ok(LotteryOutcome::Winner {
            account,
            bonus: LOTTERY_BONUS,
            balance,
        })
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
