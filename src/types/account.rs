//! Account-related types for the account manager
//!
//! This module defines the Account structure, the closed set of account kinds
//! and the per-kind interest policy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::error::BankError;

/// Account number, allocated sequentially from 1
pub type AccountId = u32;

/// Whole currency amount
///
/// Unsigned: negative balances and negative deposits/withdrawals are not
/// representable.
pub type Amount = u64;

/// Initial balance required per lottery point for special accounts
pub const POINTS_DIVISOR: Amount = 2000;

/// Days per year used to turn the long-term annual rate into a daily rate
pub const DAYS_PER_YEAR: i64 = 365;

/// Interest-bearing account kinds
///
/// Variant-specific state lives in the variant; the interest formula is
/// selected by matching on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Flat 17% of the current balance
    ShortTerm,

    /// 24% per year, pro rata over whole days since `opened_on`
    LongTerm {
        /// System date at the moment the account was opened
        opened_on: NaiveDate,
    },

    /// Flat 12% of the current balance, plus lottery points
    Special {
        /// Lottery weight fixed at creation: `initial_balance / 2000`
        points: u64,
    },

    /// Always starts empty and never earns interest
    Checking,
}

impl AccountKind {
    /// Interest rate of this kind (annual for long-term accounts)
    pub fn rate(&self) -> Decimal {
        match self {
            AccountKind::ShortTerm => Decimal::new(17, 2),
            AccountKind::LongTerm { .. } => Decimal::new(24, 2),
            AccountKind::Special { .. } => Decimal::new(12, 2),
            AccountKind::Checking => Decimal::ZERO,
        }
    }

    /// The data-free label of this kind
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::ShortTerm => AccountType::ShortTerm,
            AccountKind::LongTerm { .. } => AccountType::LongTerm,
            AccountKind::Special { .. } => AccountType::Special,
            AccountKind::Checking => AccountType::Checking,
        }
    }
}

/// Account kind without its variant data, for listings and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountType {
    ShortTerm,
    LongTerm,
    Special,
    Checking,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::ShortTerm => "short-term",
            AccountType::LongTerm => "long-term",
            AccountType::Special => "special",
            AccountType::Checking => "checking",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single account
///
/// The balance is private so that it only changes through `deposit` and
/// `withdraw`, which keep it non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    balance: Amount,
    kind: AccountKind,
}

impl Account {
    /// Create a short-term account holding `initial_balance`
    pub fn short_term(id: AccountId, initial_balance: Amount) -> Self {
        Account {
            id,
            balance: initial_balance,
            kind: AccountKind::ShortTerm,
        }
    }

    /// Create a long-term account opened on `opened_on`
    pub fn long_term(id: AccountId, initial_balance: Amount, opened_on: NaiveDate) -> Self {
        Account {
            id,
            balance: initial_balance,
            kind: AccountKind::LongTerm { opened_on },
        }
    }

    /// Create a special account; its points are derived from `initial_balance`
    /// once and never recomputed.
    pub fn special(id: AccountId, initial_balance: Amount) -> Self {
        Account {
            id,
            balance: initial_balance,
            kind: AccountKind::Special {
                points: initial_balance / POINTS_DIVISOR,
            },
        }
    }

    /// Create a checking account with a zero balance
    pub fn checking(id: AccountId) -> Self {
        Account {
            id,
            balance: 0,
            kind: AccountKind::Checking,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Lottery points, `None` for anything but a special account
    pub fn points(&self) -> Option<u64> {
        match self.kind {
            AccountKind::Special { points } => Some(points),
            _ => None,
        }
    }

    /// Credit `amount` and return the new balance
    ///
    /// # Errors
    ///
    /// Returns `BalanceOverflow` if the new balance does not fit in `Amount`;
    /// the balance is left unchanged.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, BankError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::balance_overflow("deposit", self.id))?;
        Ok(self.balance)
    }

    /// Debit `amount` and return the new balance
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if `amount` exceeds the balance. No partial
    /// withdrawal takes place.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, BankError> {
        if amount > self.balance {
            return Err(BankError::insufficient_funds(
                self.id,
                self.balance,
                amount,
            ));
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Interest accrued as of `today`
    ///
    /// Pure: the balance is not touched. `today` only matters for long-term
    /// accounts.
    pub fn compute_interest(&self, today: NaiveDate) -> Decimal {
        let balance = Decimal::from(self.balance);
        match self.kind {
            AccountKind::ShortTerm | AccountKind::Special { .. } => balance * self.kind.rate(),
            AccountKind::LongTerm { opened_on } => {
                let daily = balance * self.kind.rate() / Decimal::from(DAYS_PER_YEAR);
                daily * Decimal::from(elapsed_days(opened_on, today))
            }
            AccountKind::Checking => Decimal::ZERO,
        }
    }
}

/// Whole days from `since` to `today`, clamped to 0 when `today` is earlier
pub fn elapsed_days(since: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(since).num_days().max(0)
}

/// One row of the account listing
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub id: AccountId,
    pub account_type: AccountType,
    pub balance: Amount,
    pub interest: Decimal,
}
