//! Interest Bank Library
//! # Overview
//!
//! This library provides an in-memory registry of interest-bearing bank
//! accounts driven by a text menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountKind, BankError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Account ownership, deposits, withdrawals and the lottery
//!   - [`core::lottery`] - Weighted selection by lottery points
//!   - [`core::clock`] - The explicitly settable system date
//! - [`io`] - Menu session, token input and CSV export
//! - [`logging`] - Tracing subscriber setup
//!
//! # Account Kinds
//!
//! - **Short-term**: interest is 17% of the balance
//! - **Long-term**: 24% per year, pro rata over whole days since opening
//! - **Special**: 12% of the balance, plus lottery points (`initial / 2000`)
//! - **Checking**: opens empty, never earns interest
//!
//! # Lottery
//!
//! The lottery picks one special account with probability proportional to
//! its points and credits it with a fixed bonus of 10000.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{AccountRegistry, SystemClock};
pub use io::{export_accounts_csv, write_accounts_csv, Session, SessionConfig};
pub use types::{
    Account, AccountId, AccountKind, AccountSummary, AccountType, Amount, BankError,
    LotteryOutcome,
};
