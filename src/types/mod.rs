//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Accounts, account kinds and the interest policy
//! - `lottery`: Lottery outcomes
//! - `error`: Error types for the account manager

pub mod account;
pub mod error;
pub mod lottery;

pub use account::{Account, AccountId, AccountKind, AccountSummary, AccountType, Amount};
pub use error::BankError;
pub use lottery::{LotteryOutcome, LOTTERY_BONUS};
